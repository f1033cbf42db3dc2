//! Catalog product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductId;

/// Poster genre categories.
///
/// The catalog UI filters on these; serde names match the display strings
/// the catalog ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Films,
    #[serde(rename = "Séries")]
    Series,
    #[serde(rename = "Jeux Vidéo")]
    VideoGames,
    Anime,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Films => write!(f, "Films"),
            Self::Series => write!(f, "Séries"),
            Self::VideoGames => write!(f, "Jeux Vidéo"),
            Self::Anime => write!(f, "Anime"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Films" | "films" => Ok(Self::Films),
            "Séries" | "Series" | "series" => Ok(Self::Series),
            "Jeux Vidéo" | "VideoGames" | "games" => Ok(Self::VideoGames),
            "Anime" | "anime" => Ok(Self::Anime),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// A catalog entry.
///
/// Products are immutable once added; catalog edits replace whole records.
/// `price` is the base surcharge added on top of the chosen print format's
/// surcharge, not a standalone retail price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable unique identifier.
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    /// Base price surcharge (>= 0). Missing values in persisted data read
    /// as zero rather than failing hydration.
    #[serde(default)]
    pub price: Decimal,
    /// True for user-generated one-off prints. Custom prints never merge
    /// in the cart because no two uploads are interchangeable.
    #[serde(default)]
    pub is_custom: bool,
    /// Artwork preview, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_display_strings() {
        assert_eq!(
            serde_json::to_string(&Category::VideoGames).unwrap(),
            "\"Jeux Vidéo\""
        );
        assert_eq!(
            serde_json::from_str::<Category>("\"Séries\"").unwrap(),
            Category::Series
        );
    }

    #[test]
    fn test_product_defaults_on_sparse_payload() {
        // Minimal payload: only id and title, the rest falls back.
        let product: Product =
            serde_json::from_str(r#"{"id":"p1","title":"Blade Runner"}"#).unwrap();
        assert_eq!(product.price, Decimal::ZERO);
        assert!(!product.is_custom);
        assert_eq!(product.category, Category::Films);
        assert!(product.image_url.is_none());
    }

    #[test]
    fn test_product_camel_case_fields() {
        let product = Product {
            id: ProductId::new("p1"),
            title: "Akira".to_owned(),
            description: String::new(),
            category: Category::Anime,
            price: Decimal::new(500, 2),
            is_custom: true,
            image_url: None,
        };
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"isCustom\":true"));
        assert!(!json.contains("imageUrl"));
    }
}
