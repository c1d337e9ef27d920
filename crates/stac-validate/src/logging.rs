//! Validation log setup
//!
//! Findings are emitted as `tracing` events at error level. The process-wide
//! subscriber sends them to two places:
//!
//! - the validation log file, truncated at startup, error level only, one
//!   `YYYY-MM-DD HH:MM:SS <message>` entry per event
//! - stderr, filtered by `RUST_LOG` (default `info`), for progress

use crate::error::{ValidateError, ValidateResult};
use std::fs::File;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Timestamp format of validation log entries
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Layer writing error events to `writer` in the validation log format
pub fn file_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .with_timer(ChronoLocal::new(LOG_TIME_FORMAT.to_string()))
        .with_filter(LevelFilter::ERROR)
}

/// Create (or truncate) the validation log
pub fn open_log_file(path: &Path) -> ValidateResult<File> {
    File::create(path).map_err(|source| ValidateError::LogFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Install the global subscriber writing the validation log to `log_file`.
///
/// Only the first call has an effect; later calls return `Ok(false)` and
/// leave the existing log untouched.
pub fn init_logging(log_file: &Path) -> ValidateResult<bool> {
    if INSTALLED.get().is_some() {
        return Ok(false);
    }

    let file = open_log_file(log_file)?;

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let subscriber = tracing_subscriber::registry()
        .with(file_layer(Mutex::new(file)))
        .with(console);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ValidateError::Logger(e.to_string()))?;

    let _ = INSTALLED.set(());
    Ok(true)
}
