//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PosterFormat, Product, ProductId};

/// A line in the cart: a product snapshot plus the chosen format, quantity,
/// and the price computed at the moment the line was added or last merged.
///
/// Two lines are "mergeable" when they share the (`product id`, `format`)
/// key and the product is not custom; the cart never holds two mergeable
/// lines side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Snapshot of the product at add time, flattened into the line so the
    /// persisted payload stays a single flat object.
    #[serde(flatten)]
    pub product: Product,
    /// Number of copies, always >= 1.
    pub quantity: u32,
    pub selected_format: PosterFormat,
    /// Final unit price, denormalized at insertion/merge time.
    pub final_price: Decimal,
}

impl CartItem {
    /// Create a single-copy line for a product at a computed price.
    #[must_use]
    pub const fn new(product: Product, format: PosterFormat, final_price: Decimal) -> Self {
        Self {
            product,
            quantity: 1,
            selected_format: format,
            final_price,
        }
    }

    /// Whether this line matches the given merge key.
    #[must_use]
    pub fn matches(&self, id: &ProductId, format: PosterFormat) -> bool {
        self.product.id == *id && self.selected_format == format
    }

    /// Whether a repeated add of `product` at `format` should merge into
    /// this line instead of appending a new one.
    #[must_use]
    pub fn merges_with(&self, product: &Product, format: PosterFormat) -> bool {
        !product.is_custom && self.matches(&product.id, format)
    }

    /// Line total (`final_price` x `quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.final_price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn product(id: &str, is_custom: bool) -> Product {
        Product {
            id: ProductId::new(id),
            title: "Test poster".to_owned(),
            description: String::new(),
            category: Category::Films,
            price: Decimal::new(500, 2),
            is_custom,
            image_url: None,
        }
    }

    #[test]
    fn test_matches_on_id_and_format() {
        let item = CartItem::new(product("p1", false), PosterFormat::A3, Decimal::ONE);
        assert!(item.matches(&ProductId::new("p1"), PosterFormat::A3));
        assert!(!item.matches(&ProductId::new("p1"), PosterFormat::A4));
        assert!(!item.matches(&ProductId::new("p2"), PosterFormat::A3));
    }

    #[test]
    fn test_custom_products_never_merge() {
        let custom = product("c1", true);
        let item = CartItem::new(custom.clone(), PosterFormat::A3, Decimal::ONE);
        assert!(!item.merges_with(&custom, PosterFormat::A3));
    }

    #[test]
    fn test_line_total() {
        let mut item = CartItem::new(product("p1", false), PosterFormat::A3, Decimal::new(1500, 2));
        item.quantity = 3;
        assert_eq!(item.line_total(), Decimal::new(4500, 2));
    }

    #[test]
    fn test_flattened_serde_shape() {
        let item = CartItem::new(product("p1", false), PosterFormat::A3, Decimal::new(1990, 2));
        let json = serde_json::to_value(&item).unwrap();
        // Product fields sit at the top level of the line, not nested.
        assert_eq!(json["id"], "p1");
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["selectedFormat"], "A3");
    }
}
