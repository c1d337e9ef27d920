//! Error types for the STAC client

use thiserror::Error;

/// Result type for STAC client operations
pub type StacResult<T> = Result<T, StacError>;

/// Errors that can occur while talking to a STAC API
#[derive(Debug, Error)]
pub enum StacError {
    /// The endpoint or a link could not be parsed as a URL
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to build the HTTP client
    #[error("failed to create HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    /// The request could not be sent or its body could not be read
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON document we expected
    #[error("invalid response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },

    /// The landing page does not describe a STAC catalog
    #[error("{url} is not a STAC catalog: {reason}")]
    NotACatalog { url: String, reason: String },
}
