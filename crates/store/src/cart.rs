//! Pure cart mutations.
//!
//! Each operation takes the current lines and returns a fresh vector; the
//! [`StateStore`](crate::state::StateStore) layers persistence on top. Two
//! invariants live here: the cart never holds two mergeable lines with the
//! same (`product id`, `format`) key, and a line's quantity never drops
//! below one through a decrement.

use rust_decimal::Decimal;

use lumaprint_core::{CartItem, PosterFormat, Product, ProductId};

/// Result of an add-to-cart operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddToCartOutcome {
    /// Whether the add merged into an existing line (vs. appending).
    pub merged: bool,
    /// View hint: the storefront opens the cart drawer after every add.
    /// Not a state mutation, just a signal for the caller's UI.
    pub open_cart: bool,
}

/// Merge-or-append a product into the cart lines.
///
/// A non-custom product matching an existing line's merge key increments
/// that line's quantity and overwrites its `final_price` with the freshly
/// computed value, so a discount in effect at re-add time wins. Custom
/// products always append a new line; one-off prints are not
/// interchangeable.
#[must_use]
pub fn add_line(
    lines: &[CartItem],
    product: &Product,
    format: PosterFormat,
    final_price: Decimal,
) -> (Vec<CartItem>, AddToCartOutcome) {
    let mut next: Vec<CartItem> = lines.to_vec();

    if let Some(existing) = next.iter_mut().find(|line| line.merges_with(product, format)) {
        existing.quantity += 1;
        existing.final_price = final_price;
        return (
            next,
            AddToCartOutcome {
                merged: true,
                open_cart: true,
            },
        );
    }

    next.push(CartItem::new(product.clone(), format, final_price));
    (
        next,
        AddToCartOutcome {
            merged: false,
            open_cart: true,
        },
    )
}

/// Adjust the quantity of the line matching (`id`, `format`) by `delta`,
/// flooring at one. Lines that don't match pass through untouched; no match
/// at all is a no-op, not an error.
#[must_use]
pub fn update_quantity(
    lines: &[CartItem],
    id: &ProductId,
    format: PosterFormat,
    delta: i64,
) -> Vec<CartItem> {
    lines
        .iter()
        .map(|line| {
            if line.matches(id, format) {
                let mut updated = line.clone();
                updated.quantity = apply_delta(line.quantity, delta);
                updated
            } else {
                line.clone()
            }
        })
        .collect()
}

/// Drop every line matching (`id`, `format`). A missing key is a no-op.
#[must_use]
pub fn remove_line(lines: &[CartItem], id: &ProductId, format: PosterFormat) -> Vec<CartItem> {
    lines
        .iter()
        .filter(|line| !line.matches(id, format))
        .cloned()
        .collect()
}

/// Total number of copies across all lines. Derived for display badges,
/// never stored.
#[must_use]
pub fn item_count(lines: &[CartItem]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}

/// Quantity floor: decrements bottom out at one, never zero.
fn apply_delta(quantity: u32, delta: i64) -> u32 {
    let next = i64::from(quantity).saturating_add(delta).max(1);
    u32::try_from(next).unwrap_or(u32::MAX)
}
