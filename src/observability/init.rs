//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber: an `EnvFilter` for level
//! selection and a `fmt` layer writing plain text to a rotating log file.
//! The terminal belongs to the UI, so nothing is logged to stdout or stderr.

use super::file_writer::FileWriter;
use crate::infrastructure::paths;
use crate::Config;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the log inside the data directory.
pub const LOG_FILE_NAME: &str = "resume-analyzer.log";

/// Log file used when the configuration does not name one.
#[must_use]
pub fn default_log_file() -> PathBuf {
    paths::get_data_dir().join(LOG_FILE_NAME)
}

/// Initializes the tracing subscriber with a rotating log file.
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `RUST_LOG` environment variable
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently skips setup if directory creation fails (logging is optional)
/// - Idempotent: Safe to call multiple times (only first call takes effect)
///
/// # Example
///
/// ```rust
/// use resume_analyzer::observability::init_tracing;
/// use resume_analyzer::Config;
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     log_file: Some(dir.path().join("analyzer.log")),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let log_file = config.log_file.clone().unwrap_or_else(default_log_file);
    if let Some(parent) = log_file.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Arc::new(FileWriter::new(log_file)))
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
