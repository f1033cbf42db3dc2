//! Print format catalog.
//!
//! Formats are a fixed set; each carries a flat surcharge that is added to
//! the product's base price at cart time. The surcharge table lives here so
//! pricing stays deterministic and free of lookups against mutable state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Available poster print formats.
///
/// Persisted cart entries may reference formats that no longer exist (old
/// payloads, hand-edited data). Those deserialize to [`PosterFormat::Unknown`]
/// rather than failing, and price as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PosterFormat {
    /// 21 x 29.7 cm
    #[default]
    A4,
    /// 29.7 x 42 cm
    A3,
    /// 42 x 59.4 cm
    A2,
    /// 50 x 70 cm gallery format
    #[serde(rename = "XL")]
    Xl,
    /// Unrecognized format from persisted data. Prices as zero.
    #[serde(other)]
    Unknown,
}

impl PosterFormat {
    /// The flat print surcharge for this format.
    ///
    /// Returns zero for [`PosterFormat::Unknown`] so pricing never fails on
    /// stale persisted data.
    #[must_use]
    pub fn price(self) -> Decimal {
        match self {
            Self::A4 => Decimal::new(990, 2),
            Self::A3 => Decimal::new(1490, 2),
            Self::A2 => Decimal::new(1990, 2),
            Self::Xl => Decimal::new(2990, 2),
            Self::Unknown => Decimal::ZERO,
        }
    }

    /// Human-readable label (format name plus dimensions).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A4 => "A4 (21 x 29.7 cm)",
            Self::A3 => "A3 (29.7 x 42 cm)",
            Self::A2 => "A2 (42 x 59.4 cm)",
            Self::Xl => "XL (50 x 70 cm)",
            Self::Unknown => "Unknown format",
        }
    }

    /// All orderable formats, smallest first.
    pub const ALL: [Self; 4] = [Self::A4, Self::A3, Self::A2, Self::Xl];
}

impl std::fmt::Display for PosterFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A4 => write!(f, "A4"),
            Self::A3 => write!(f, "A3"),
            Self::A2 => write!(f, "A2"),
            Self::Xl => write!(f, "XL"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for PosterFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A4" => Ok(Self::A4),
            "A3" => Ok(Self::A3),
            "A2" => Ok(Self::A2),
            "XL" => Ok(Self::Xl),
            _ => Err(format!("invalid poster format: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_all_orderable_formats_are_priced() {
        for format in PosterFormat::ALL {
            assert!(format.price() > Decimal::ZERO, "{format} has no surcharge");
        }
    }

    #[test]
    fn test_unknown_format_prices_as_zero() {
        assert_eq!(PosterFormat::Unknown.price(), Decimal::ZERO);
    }

    #[test]
    fn test_unrecognized_format_deserializes_to_unknown() {
        let format: PosterFormat = serde_json::from_str("\"B1\"").unwrap();
        assert_eq!(format, PosterFormat::Unknown);
    }

    #[test]
    fn test_xl_serde_rename() {
        let json = serde_json::to_string(&PosterFormat::Xl).unwrap();
        assert_eq!(json, "\"XL\"");

        let parsed: PosterFormat = serde_json::from_str("\"XL\"").unwrap();
        assert_eq!(parsed, PosterFormat::Xl);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("a3".parse::<PosterFormat>().unwrap(), PosterFormat::A3);
        assert!("poster".parse::<PosterFormat>().is_err());
    }
}
