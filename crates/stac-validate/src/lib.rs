//! STAC endpoint validation
//!
//! Compares a *comparison* STAC API against a *reference* one, item by item:
//! every item the reference returns for the configured collection is looked
//! up by id on the comparison side and diffed. Missing and differing items
//! are written to the validation log at error level.
//!
//! ```text
//!  reference ──search──▶ items ──for each id──▶ comparison search(ids=[id])
//!                                                   │
//!                          0 hits: missing ◀────────┤
//!                          1 hit:  diff    ◀────────┤
//!                          2+:     fatal   ◀────────┘
//! ```
//!
//! A single comparison only looks in one direction; [`validate_both`] runs it
//! again with the endpoints swapped.

pub mod cli;
pub mod comparator;
pub mod config;
mod error;
pub mod logging;

pub use comparator::{Comparator, Finding, ValidationReport};
pub use config::ValidateConfig;
pub use error::{ValidateError, ValidateResult};

use stac_client::StacClient;

/// Open both endpoints of `config` and compare them in the configured direction
pub async fn validate(config: &ValidateConfig) -> ValidateResult<ValidationReport> {
    let reference = StacClient::open(&config.reference_url).await?;
    let comparison = StacClient::open(&config.comparison_url).await?;

    Comparator::from_config(config)
        .compare(&reference, &comparison)
        .await
}

/// Validate `comparison_url` against `reference_url` for the default
/// collection, returning whether no item was missing or different
pub async fn validate_endpoints(
    reference_url: &str,
    comparison_url: &str,
    limit: usize,
) -> ValidateResult<bool> {
    let config = ValidateConfig {
        reference_url: reference_url.to_string(),
        comparison_url: comparison_url.to_string(),
        limit,
        ..ValidateConfig::default()
    };
    Ok(validate(&config).await?.passed())
}

/// Validate in both directions.
///
/// The reverse direction only runs if the forward one passed.
pub async fn validate_both(config: &ValidateConfig) -> ValidateResult<bool> {
    Ok(validate(config).await?.passed() && validate(&config.swapped()).await?.passed())
}
