//! Completed order records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CartItem, UserId};

/// An immutable record created at checkout.
///
/// Orders are only ever appended to history (newest first) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Snapshot of the purchased cart lines.
    pub items: Vec<CartItem>,
    pub total: Decimal,
    /// The purchasing user, absent for guest checkout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl Order {
    /// Build an order from purchased lines, computing the total from the
    /// lines' denormalized prices.
    #[must_use]
    pub fn new(items: Vec<CartItem>, user_id: Option<UserId>) -> Self {
        let total = items.iter().map(CartItem::line_total).sum();
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            items,
            total,
            user_id,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Category, PosterFormat, Product, ProductId};

    fn line(id: &str, quantity: u32, unit_price: Decimal) -> CartItem {
        let mut item = CartItem::new(
            Product {
                id: ProductId::new(id),
                title: "Poster".to_owned(),
                description: String::new(),
                category: Category::Films,
                price: Decimal::ZERO,
                is_custom: false,
                image_url: None,
            },
            PosterFormat::A4,
            unit_price,
        );
        item.quantity = quantity;
        item
    }

    #[test]
    fn test_total_sums_line_totals() {
        let order = Order::new(
            vec![
                line("p1", 2, Decimal::new(1500, 2)),
                line("p2", 1, Decimal::new(990, 2)),
            ],
            None,
        );
        assert_eq!(order.total, Decimal::new(3990, 2));
    }

    #[test]
    fn test_empty_order_totals_zero() {
        let order = Order::new(Vec::new(), Some(UserId::new("u1")));
        assert_eq!(order.total, Decimal::ZERO);
        assert!(order.items.is_empty());
    }
}
