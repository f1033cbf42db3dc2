//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LUMAPRINT_DATA_DIR` - Directory for the on-disk slice store (default: ./data)
//! - `LUMAPRINT_LOG` - Tracing filter directive (e.g. `lumaprint_store=debug`)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store application configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the per-slice JSON files
    pub data_dir: PathBuf,
    /// Tracing filter directive, if set
    pub log_filter: Option<String>,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse. All
    /// variables are optional, so a bare environment loads defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("LUMAPRINT_DATA_DIR", "./data"));
        if data_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "LUMAPRINT_DATA_DIR".to_owned(),
                "must not be empty".to_owned(),
            ));
        }
        let log_filter = get_optional_env("LUMAPRINT_LOG");

        Ok(Self {
            data_dir,
            log_filter,
        })
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_dir() {
        // from_env reads real env; exercise the helpers directly so tests
        // stay independent of the process environment.
        assert_eq!(get_env_or_default("LUMAPRINT_NONEXISTENT_VAR", "./data"), "./data");
        assert!(get_optional_env("LUMAPRINT_NONEXISTENT_VAR").is_none());
    }
}
