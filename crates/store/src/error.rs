//! Engine error type.

use thiserror::Error;

use crate::kv::KvError;

/// Errors surfaced by [`StateStore`](crate::state::StateStore) operations.
///
/// Most mutations persist best-effort and never fail; only order completion
/// reports persistence problems to the caller, because its two slice writes
/// must land together.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key-value backend rejected a write.
    #[error("persistence error: {0}")]
    Persist(#[from] KvError),

    /// A slice value could not be serialized to JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
