//! Fare estimation error types.

use std::path::PathBuf;

/// Errors from loading fare profiles or producing estimates.
#[derive(Debug, thiserror::Error)]
pub enum FareError {
    /// Profile file could not be read
    #[error("failed to read fare profiles from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Profile file is not valid JSON
    #[error("invalid fare profile JSON: {0}")]
    Json(#[from] serde_json::Error),
}
