//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! lumaprint cart show
//! lumaprint cart add -i film-neon-drive -f A3 -m 0.8
//! lumaprint cart update -i film-neon-drive -f A3 -d -1
//! lumaprint cart remove -i film-neon-drive -f A3
//! ```

use rust_decimal::Decimal;

use lumaprint_core::{PosterFormat, ProductId};

use super::{CommandError, open_state};

/// Show cart lines and the derived item count.
pub fn show() -> Result<(), CommandError> {
    let state = open_state()?;

    tracing::info!("{} item(s) in cart", state.cart_item_count());
    for line in state.cart() {
        tracing::info!(
            "{} x{} | {} | {} each | {} line total",
            line.product.title,
            line.quantity,
            line.selected_format,
            line.final_price,
            line.line_total()
        );
    }
    Ok(())
}

/// Add a catalog product to the cart.
pub fn add(id: &str, format: &str, multiplier: &str) -> Result<(), CommandError> {
    let format: PosterFormat = format.parse().map_err(CommandError::InvalidInput)?;
    let multiplier: Decimal = multiplier
        .parse()
        .map_err(|_| CommandError::InvalidInput(format!("invalid multiplier: {multiplier}")))?;

    let mut state = open_state()?;
    let product_id = ProductId::new(id);
    let product = state
        .product(&product_id)
        .ok_or_else(|| CommandError::NotFound(format!("product {id}")))?
        .clone();

    let outcome = state.add_to_cart(&product, format, multiplier);
    tracing::info!(
        "{} {} in {format}, cart now holds {} item(s)",
        if outcome.merged { "Merged" } else { "Added" },
        product.title,
        state.cart_item_count()
    );
    Ok(())
}

/// Adjust a line's quantity by a delta (floors at 1).
pub fn update(id: &str, format: &str, delta: i64) -> Result<(), CommandError> {
    let format: PosterFormat = format.parse().map_err(CommandError::InvalidInput)?;

    let mut state = open_state()?;
    state.update_quantity(&ProductId::new(id), format, delta);
    tracing::info!("Cart now holds {} item(s)", state.cart_item_count());
    Ok(())
}

/// Remove a line from the cart.
pub fn remove(id: &str, format: &str) -> Result<(), CommandError> {
    let format: PosterFormat = format.parse().map_err(CommandError::InvalidInput)?;

    let mut state = open_state()?;
    state.remove_from_cart(&ProductId::new(id), format);
    tracing::info!("Cart now holds {} item(s)", state.cart_item_count());
    Ok(())
}
