//! Structured logging to a rotating log file.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → resume-analyzer.log
//! ```
//!
//! The terminal belongs to the form, so nothing is logged to stdout or
//! stderr. Logs go to `<data_dir>/resume-analyzer/resume-analyzer.log`, or
//! the configured `log_file`, and roll over at 10MB keeping three backups.
//!
//! The level comes from `RUST_LOG` when set, else `trace_level`, else `info`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Size-based rotating file sink

pub mod file_writer;
pub mod init;

pub use file_writer::FileWriter;
pub use init::{default_log_file, init_tracing, LOG_FILE_NAME};
