//! Error types for endpoint validation

use stac_client::StacError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for validation operations
pub type ValidateResult<T> = Result<T, ValidateError>;

/// Errors that abort a validation run.
///
/// Missing or differing items are not errors; they are collected as
/// findings in the [`ValidationReport`](crate::ValidationReport).
#[derive(Debug, Error)]
pub enum ValidateError {
    /// An endpoint could not be opened or searched
    #[error(transparent)]
    Client(#[from] StacError),

    /// Item ids must be unique within the searched collection
    #[error("{endpoint} returned {count} items for id '{id}'")]
    DuplicateItem {
        endpoint: String,
        id: String,
        count: usize,
    },

    /// A search result has no string id
    #[error("{endpoint} returned an item without an id")]
    MissingId { endpoint: String },

    /// A diff could not be rendered for the log
    #[error("failed to render differences for '{id}': {source}")]
    Render {
        id: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The validation log could not be created
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The global logger could not be installed
    #[error("failed to install logger: {0}")]
    Logger(String),
}
