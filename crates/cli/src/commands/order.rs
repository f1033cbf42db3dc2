//! Checkout and order history commands.
//!
//! # Usage
//!
//! ```bash
//! lumaprint order complete
//! lumaprint order history
//! ```

use lumaprint_core::Order;

use super::{CommandError, open_state};

/// Turn the current cart into an order and clear the cart atomically.
pub fn complete() -> Result<(), CommandError> {
    let mut state = open_state()?;

    if state.cart().is_empty() {
        return Err(CommandError::InvalidInput("cart is empty".to_owned()));
    }

    let user_id = state.user().map(|u| u.id.clone());
    let order = Order::new(state.cart().to_vec(), user_id);
    let order_id = order.id;
    let total = order.total;

    state.complete_order(order)?;
    tracing::info!("Order {order_id} completed, total {total}");
    Ok(())
}

/// List order history, newest first.
pub fn history() -> Result<(), CommandError> {
    let state = open_state()?;

    tracing::info!("{} order(s)", state.orders().len());
    for order in state.orders() {
        tracing::info!(
            "{} | {} | {} line(s) | total {}{}",
            order.id,
            order.created_at.format("%Y-%m-%d %H:%M"),
            order.items.len(),
            order.total,
            order
                .user_id
                .as_ref()
                .map(|id| format!(" | user {id}"))
                .unwrap_or_default()
        );
    }
    Ok(())
}
