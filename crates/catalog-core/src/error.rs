use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the Catalog Insights crates.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The dataset could not be located, read, or decoded into records.
    #[error("Dataset unavailable at {path}: {reason}")]
    DataUnavailable { path: PathBuf, reason: String },

    /// A `date_added` value did not match the `DD/MM/YYYY` format.
    #[error("Malformed date_added {value:?} for record {record_id}")]
    MalformedDate { record_id: String, value: String },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A report could not be encoded as JSON.
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Shorthand for building a [`CatalogError::DataUnavailable`].
    pub fn unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        CatalogError::DataUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience alias used throughout the catalog crates.
pub type Result<T> = std::result::Result<T, CatalogError>;
