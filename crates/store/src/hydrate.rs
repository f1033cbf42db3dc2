//! Load-with-fallback hydration for persisted slices.
//!
//! Every slice loads through [`hydrate`] at process start so the fallback
//! contract lives in one place: missing key, backend failure, or a payload
//! that does not deserialize to the slice's type all fall back to the
//! slice's default. Hydration never propagates an error outward.

use serde::de::DeserializeOwned;

use crate::kv::KvStore;

/// Read and parse the slice stored under `key`, falling back to `default`.
///
/// Typed deserialization doubles as the shape check: a non-array payload
/// under a `Vec` slice key fails to parse and yields the default. Fallbacks
/// on corrupt or unreadable data are logged at `warn`; a simply-absent key
/// is the normal first-run case and logs nothing.
pub fn hydrate<T, F>(store: &dyn KvStore, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "slice unreadable, using default");
            return default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "slice payload corrupt, using default");
            default()
        }
    }
}
