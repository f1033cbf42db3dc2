//! Pure price resolution for cart lines.
//!
//! The final unit price of a cart line is derived from three inputs at the
//! moment the line is added or merged: the product's base surcharge, the
//! chosen print format's surcharge, and an optional discount multiplier.
//! The result is denormalized onto the line; nothing here reads or writes
//! state.

use rust_decimal::Decimal;

use crate::types::{PosterFormat, Product};

/// Catalog ID of the free sample poster. Always prices at zero, whatever
/// the format or discount.
pub const FREE_SAMPLE_ID: &str = "test-0";

/// Whether a product is free regardless of format and discount: the
/// designated sample, or a custom print with a zero base price.
#[must_use]
pub fn is_free(product: &Product) -> bool {
    product.id == FREE_SAMPLE_ID || (product.is_custom && product.price.is_zero())
}

/// Resolve the final unit price for a product in a given format.
///
/// The free-item override takes precedence over every other term; otherwise
/// the price is `(format surcharge + base surcharge) * multiplier`. An
/// unrecognized format contributes zero rather than failing.
#[must_use]
pub fn resolve_price(product: &Product, format: PosterFormat, multiplier: Decimal) -> Decimal {
    if is_free(product) {
        return Decimal::ZERO;
    }

    (format.price() + product.price) * multiplier
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Category, ProductId};

    fn product(id: &str, price: Decimal, is_custom: bool) -> Product {
        Product {
            id: ProductId::new(id),
            title: "Poster".to_owned(),
            description: String::new(),
            category: Category::Films,
            price,
            is_custom,
            image_url: None,
        }
    }

    #[test]
    fn test_base_plus_format_times_multiplier() {
        let p = product("p1", Decimal::new(500, 2), false);
        // A3 surcharge 14.90 + base 5.00 = 19.90
        assert_eq!(
            resolve_price(&p, PosterFormat::A3, Decimal::ONE),
            Decimal::new(1990, 2)
        );
        // 20% off
        assert_eq!(
            resolve_price(&p, PosterFormat::A3, Decimal::new(8, 1)),
            Decimal::new(15_920, 3)
        );
    }

    #[test]
    fn test_free_sample_overrides_everything() {
        let p = product(FREE_SAMPLE_ID, Decimal::new(9900, 2), false);
        for format in PosterFormat::ALL {
            assert_eq!(resolve_price(&p, format, Decimal::TWO), Decimal::ZERO);
        }
    }

    #[test]
    fn test_zero_priced_custom_is_free() {
        let p = product("custom-1", Decimal::ZERO, true);
        assert_eq!(
            resolve_price(&p, PosterFormat::Xl, Decimal::ONE),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_priced_custom_is_not_free() {
        let p = product("custom-2", Decimal::new(1200, 2), true);
        assert_eq!(
            resolve_price(&p, PosterFormat::A4, Decimal::ONE),
            Decimal::new(2190, 2)
        );
    }

    #[test]
    fn test_unknown_format_contributes_zero() {
        let p = product("p1", Decimal::new(500, 2), false);
        assert_eq!(
            resolve_price(&p, PosterFormat::Unknown, Decimal::ONE),
            Decimal::new(500, 2)
        );
    }

    #[test]
    fn test_result_is_non_negative_for_catalog_inputs() {
        let p = product("p1", Decimal::new(750, 2), false);
        for format in PosterFormat::ALL {
            assert!(resolve_price(&p, format, Decimal::ONE) >= Decimal::ZERO);
        }
    }
}
