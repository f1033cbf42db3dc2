//! Integration tests for Lumaprint.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lumaprint-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `persistence` - Restart hydration and corruption fallback over the
//!   on-disk store
//! - `cart_lifecycle` - Browse, add, checkout scenarios end to end

#![cfg_attr(not(test), forbid(unsafe_code))]

use lumaprint_store::{DirStore, StateStore};

/// Open a state store over a fresh on-disk store rooted at `dir`.
///
/// Reopening over the same directory models a process restart.
#[must_use]
pub fn open_at(dir: &std::path::Path) -> StateStore<DirStore> {
    let store = DirStore::open(dir).expect("failed to open data dir");
    StateStore::open(store)
}
