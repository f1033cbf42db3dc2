//! Catalog admin commands.
//!
//! # Usage
//!
//! ```bash
//! lumaprint catalog list
//! lumaprint catalog add -i poster-dune -t "Dune" -c Films -p 7.50
//! lumaprint catalog delete -i poster-dune
//! lumaprint catalog reset
//! ```

use rust_decimal::Decimal;

use lumaprint_core::{Category, Product, ProductId};

use super::{CommandError, open_state};

/// List the catalog, newest first.
pub fn list() -> Result<(), CommandError> {
    let state = open_state()?;

    tracing::info!("{} product(s) in catalog", state.catalog().len());
    for product in state.catalog() {
        tracing::info!(
            "{} | {} | {} | base {}{}",
            product.id,
            product.title,
            product.category,
            product.price,
            if product.is_custom { " | custom" } else { "" }
        );
    }
    Ok(())
}

/// Add a product to the catalog.
pub fn add(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    price: &str,
    custom: bool,
) -> Result<(), CommandError> {
    let category: Category = category
        .parse()
        .map_err(CommandError::InvalidInput)?;
    let price: Decimal = price
        .parse()
        .map_err(|_| CommandError::InvalidInput(format!("invalid price: {price}")))?;
    if price < Decimal::ZERO {
        return Err(CommandError::InvalidInput(
            "price must not be negative".to_owned(),
        ));
    }

    let mut state = open_state()?;
    state.add_product(Product {
        id: ProductId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        category,
        price,
        is_custom: custom,
        image_url: None,
    });

    tracing::info!("Added product {id}");
    Ok(())
}

/// Delete a product by id.
pub fn delete(id: &str) -> Result<(), CommandError> {
    let mut state = open_state()?;
    state.delete_product(&ProductId::new(id));
    tracing::info!("Deleted product {id} (no-op if absent)");
    Ok(())
}

/// Restore the built-in catalog and clear the studio background.
pub fn reset() -> Result<(), CommandError> {
    let mut state = open_state()?;
    state.reset_catalog();
    tracing::info!(
        "Catalog reset to {} default product(s), studio background cleared",
        state.catalog().len()
    );
    Ok(())
}
