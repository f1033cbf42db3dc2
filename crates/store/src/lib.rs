//! Lumaprint Store - Cart & pricing engine with persisted state.
//!
//! Five independent state slices (catalog, cart, session user, order
//! history, studio background) live in memory behind a [`StateStore`] and
//! are written through to a string-keyed JSON key-value store on every
//! mutation. At process start each slice hydrates from the store, falling
//! back to a well-defined default on missing or corrupt data.
//!
//! # Modules
//!
//! - [`kv`] - The key-value store contract plus in-memory and on-disk backends
//! - [`hydrate`] - The load-with-fallback helper shared by all slices
//! - [`cart`] - Pure merge/update/remove functions over cart lines
//! - [`catalog`] - The built-in default catalog
//! - [`state`] - The [`StateStore`] owning the slices and their persistence
//! - [`config`] - Environment-based configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod hydrate;
pub mod kv;
pub mod state;

pub use cart::AddToCartOutcome;
pub use config::{ConfigError, StoreConfig};
pub use error::StoreError;
pub use kv::{DirStore, KvError, KvStore, MemoryStore};
pub use state::{StateStore, slice_keys};
