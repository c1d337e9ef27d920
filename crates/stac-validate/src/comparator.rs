//! Item-by-item comparison of two catalogs

use crate::config::ValidateConfig;
use crate::error::{ValidateError, ValidateResult};
use serde_json::Value;
use stac_client::{item_id, ItemSearch, SearchQuery};
use stac_diff::{diff, DiffReport, SideLabels};
use tracing::{error, info};

/// A problem found with one reference item
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// The comparison endpoint has no item with this id
    Missing { id: String },
    /// Both endpoints have the item but the records differ
    Differs { id: String, diff: DiffReport },
}

impl Finding {
    pub fn id(&self) -> &str {
        match self {
            Finding::Missing { id } | Finding::Differs { id, .. } => id,
        }
    }
}

/// Outcome of comparing one endpoint against another
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub reference: String,
    pub comparison: String,
    /// Number of reference items that were looked up
    pub checked: usize,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    /// True when no item was missing and no item differed
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.findings.iter().filter_map(|f| match f {
            Finding::Missing { id } => Some(id.as_str()),
            Finding::Differs { .. } => None,
        })
    }

    pub fn differing(&self) -> impl Iterator<Item = &str> {
        self.findings.iter().filter_map(|f| match f {
            Finding::Differs { id, .. } => Some(id.as_str()),
            Finding::Missing { .. } => None,
        })
    }
}

/// Compares a comparison catalog against a reference catalog.
///
/// Only items returned by the reference search are checked; items that
/// exist solely on the comparison side are never seen.
#[derive(Debug, Clone)]
pub struct Comparator {
    query: SearchQuery,
}

impl Comparator {
    /// Compare up to `limit` items of `collection`, fetched `limit` per page
    pub fn new(collection: &str, limit: usize) -> Self {
        Self {
            query: SearchQuery::new()
                .collection(collection)
                .limit(limit)
                .max_items(limit),
        }
    }

    pub fn from_config(config: &ValidateConfig) -> Self {
        Self {
            query: config.query(),
        }
    }

    /// The search sent to both endpoints
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Check every reference item against the comparison catalog.
    ///
    /// Missing and differing items are logged and collected; the run only
    /// stops early on a search failure or when the comparison catalog holds
    /// several items with the same id.
    pub async fn compare(
        &self,
        reference: &dyn ItemSearch,
        comparison: &dyn ItemSearch,
    ) -> ValidateResult<ValidationReport> {
        error!("ref = {}", reference.endpoint());
        error!("com = {}", comparison.endpoint());

        let ref_items = reference.search(&self.query).await?;
        let total = ref_items.len();
        let mut findings = Vec::new();

        for (index, ref_item) in ref_items.into_iter().enumerate() {
            let id = item_id(&ref_item)
                .ok_or_else(|| ValidateError::MissingId {
                    endpoint: reference.endpoint().to_string(),
                })?
                .to_string();

            let mut com_items = comparison.search(&self.query.with_id(&id)).await?;
            match com_items.len() {
                0 => {
                    error!("ref item does not exist in com!\nid={}", id);
                    findings.push(Finding::Missing { id });
                }
                1 => {
                    let com_item = com_items.remove(0);
                    let report = diff(&Value::Object(ref_item), &Value::Object(com_item));
                    if !report.is_empty() {
                        let rendered = report
                            .to_yaml(SideLabels::REF_COM)
                            .map_err(|source| ValidateError::Render {
                                id: id.clone(),
                                source,
                            })?;
                        error!("differences found!\nid={}\n{}", id, rendered);
                        findings.push(Finding::Differs { id, diff: report });
                    }
                }
                count => {
                    return Err(ValidateError::DuplicateItem {
                        endpoint: comparison.endpoint().to_string(),
                        id,
                        count,
                    });
                }
            }

            info!("Checking {}: {}/{} items", reference.endpoint(), index + 1, total);
        }

        Ok(ValidationReport {
            reference: reference.endpoint().to_string(),
            comparison: comparison.endpoint().to_string(),
            checked: total,
            findings,
        })
    }
}
