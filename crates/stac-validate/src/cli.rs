//! Command line arguments

use crate::config::{
    ValidateConfig, DEFAULT_COLLECTION, DEFAULT_ENDPOINT, DEFAULT_LIMIT, DEFAULT_LOG_FILE,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "stac-validate",
    version,
    about = "Check that two STAC API endpoints serve the same items"
)]
pub struct Cli {
    /// Reference and comparison endpoints
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["REF", "COM"],
        default_values = [DEFAULT_ENDPOINT, DEFAULT_ENDPOINT]
    )]
    pub endpoints: Vec<String>,

    /// Number of items to check, also used as the page size
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_LIMIT,
        env = "STAC_VALIDATE_LIMIT",
        value_parser = parse_limit
    )]
    pub limit: usize,

    /// Collection searched on both endpoints
    #[arg(
        short,
        long,
        default_value = DEFAULT_COLLECTION,
        env = "STAC_VALIDATE_COLLECTION"
    )]
    pub collection: String,

    /// Validation log, overwritten on every run
    #[arg(long, default_value = DEFAULT_LOG_FILE, env = "STAC_VALIDATE_LOG_FILE")]
    pub log_file: PathBuf,
}

fn parse_limit(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    pub fn into_config(self) -> ValidateConfig {
        let mut endpoints = self.endpoints.into_iter();
        let reference_url = endpoints
            .next()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let comparison_url = endpoints
            .next()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        ValidateConfig {
            reference_url,
            comparison_url,
            limit: self.limit,
            collection: self.collection,
            log_file: self.log_file,
        }
    }
}
