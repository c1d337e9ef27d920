//! stac-validate
//!
//! Checks two STAC API endpoints against each other in both directions and
//! writes any missing or differing items to the validation log.

use anyhow::{bail, Result};
use clap::Parser;
use stac_validate::cli::Cli;
use stac_validate::logging::init_logging;
use stac_validate::validate_both;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Cli::parse().into_config();
    init_logging(&config.log_file)?;

    info!(
        "Validating {} against {} ({} items of {})",
        config.comparison_url, config.reference_url, config.limit, config.collection
    );

    if validate_both(&config).await? {
        println!("Endpoints are the same.");
        Ok(())
    } else {
        bail!(
            "Differences found, see '{}' for details.",
            config.log_file.display()
        )
    }
}
