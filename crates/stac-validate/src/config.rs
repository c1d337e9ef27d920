//! Configuration for a validation run

use stac_client::SearchQuery;
use std::path::PathBuf;

/// Endpoint used for both sides when none is given
pub const DEFAULT_ENDPOINT: &str = "https://api.stac.esgf-west.org/";
/// Collection searched on both endpoints
pub const DEFAULT_COLLECTION: &str = "CMIP6";
/// Cap on reference items, also used as the page size
pub const DEFAULT_LIMIT: usize = 100;
/// Validation log, overwritten on every run
pub const DEFAULT_LOG_FILE: &str = "errors.log";

/// Configuration for comparing two endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateConfig {
    /// Endpoint whose items drive the comparison
    pub reference_url: String,
    /// Endpoint checked against the reference
    pub comparison_url: String,
    /// Maximum number of reference items, and the page size
    pub limit: usize,
    /// Collection searched on both sides
    pub collection: String,
    /// Where findings are logged
    pub log_file: PathBuf,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            reference_url: DEFAULT_ENDPOINT.to_string(),
            comparison_url: DEFAULT_ENDPOINT.to_string(),
            limit: DEFAULT_LIMIT,
            collection: DEFAULT_COLLECTION.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl ValidateConfig {
    /// The same run with reference and comparison exchanged
    pub fn swapped(&self) -> Self {
        Self {
            reference_url: self.comparison_url.clone(),
            comparison_url: self.reference_url.clone(),
            ..self.clone()
        }
    }

    /// The search sent to both endpoints
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new()
            .collection(&self.collection)
            .limit(self.limit)
            .max_items(self.limit)
    }
}
