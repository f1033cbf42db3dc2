//! Lumaprint Core - Shared types library.
//!
//! This crate provides common types used across all Lumaprint components:
//! - `store` - Cart & pricing engine with persisted state
//! - `cli` - Command-line management tools
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! storage access. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Domain records for products, cart items, users, and orders
//! - [`pricing`] - Pure price resolution for cart lines

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pricing;
pub mod types;

pub use pricing::{FREE_SAMPLE_ID, resolve_price};
pub use types::*;
