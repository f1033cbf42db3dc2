//! Core types for Lumaprint.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod format;
pub mod id;
pub mod order;
pub mod product;
pub mod user;

pub use cart::CartItem;
pub use format::PosterFormat;
pub use id::*;
pub use order::Order;
pub use product::{Category, Product};
pub use user::{User, UserPatch};
