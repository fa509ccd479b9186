//! Resume Analyzer: a terminal client that scores a PDF resume against a job
//! role or a pasted job description.
//!
//! The crate provides:
//! - An analysis form state machine with synchronous input validation
//! - Keyword (TF-IDF) matching against a job-role catalog fetched from the backend
//! - Semantic matching against free-text job descriptions
//! - Concurrent, single-threaded request handling with per-operation loading flags
//! - Themed terminal rendering of scores, remarks and keyword badges

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Front End (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and validation                    │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Fetch Layer   │   │ Service Layer │
//! │ (ui/)         │   │ (fetch/)      │   │ (service/)    │
//! │ - Rendering   │   │ - Requests    │   │ - HTTP client │
//! │ - Theming     │   │ - Generations │   │ - Decoding    │
//! │ - Components  │   │ - Completions │   │ - Backend API │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Resume, analysis and catalog models (domain/)    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber with rotating log file        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Form state machine with event/action model
//! - [`domain`]: Core domain types (resume, modes, results, catalog, errors)
//! - [`fetch`]: Request/response protocol and the fetch coordinator
//! - [`service`]: Backend abstraction and its HTTP implementation
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Log file setup
//!
//! # Configuration
//!
//! Read from `~/.config/resume-analyzer/config.toml` (or `--config`), then
//! overridden by command line flags:
//!
//! ```toml
//! base_url = "http://localhost:8000"
//! theme = "catppuccin-latte"
//! trace_level = "debug"
//! default_mode = "semantic"
//! color = true
//! ```
//!
//! # Example
//!
//! ```rust
//! use resume_analyzer::{handle_event, initialize, Config, Event};
//! use resume_analyzer::domain::UploadedFile;
//!
//! let mut state = initialize(&Config::default());
//!
//! handle_event(&mut state, Event::FileSelected(UploadedFile::new("cv.txt", "text/plain", vec![])));
//! assert_eq!(state.error_message(), Some("Only PDF files are allowed."));
//! ```

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod observability;
pub mod service;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Workflow};
pub use domain::{AnalysisMode, AnalysisResult, AnalyzerError, Result};
pub use ui::Theme;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Backend address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Runtime configuration.
///
/// Every field has a default, so a configuration file only needs the keys it
/// changes. Unknown keys are rejected.
///
/// # Example
///
/// ```toml
/// base_url = "https://resume.example.com"
/// theme = "catppuccin-mocha"
/// theme_file = "~/.config/resume-analyzer/theme.toml"
/// trace_level = "debug"
/// log_file = "/tmp/resume-analyzer.log"
/// default_mode = "tfidf"
/// color = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the analysis backend. Default: `http://localhost:8000`
    pub base_url: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<PathBuf>,

    /// Tracing level for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file path. Default: `<data_dir>/resume-analyzer/resume-analyzer.log`
    pub log_file: Option<PathBuf>,

    /// Mode the form starts in. Default: keyword matching
    pub default_mode: AnalysisMode,

    /// Whether output carries ANSI colors. Default: `true`
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            log_file: None,
            default_mode: AnalysisMode::default(),
            color: true,
        }
    }
}

/// Values given on the command line, applied over the file configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces `base_url`.
    pub base_url: Option<String>,
    /// Replaces `theme` and clears `theme_file`.
    pub theme_name: Option<String>,
    /// Replaces `trace_level`.
    pub trace_level: Option<String>,
    /// Replaces `default_mode`.
    pub mode: Option<AnalysisMode>,
    /// Turns colors off when set.
    pub no_color: bool,
}

impl Config {
    /// Parses a configuration file.
    ///
    /// A leading `~` in `theme_file` and `log_file` is expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this structure.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| {
            AnalyzerError::Config(format!("Failed to parse {}: {e}", path.display()))
        })?;

        config.theme_file = config.theme_file.map(|p| expand_path(&p));
        config.log_file = config.log_file.map(|p| expand_path(&p));

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// read if present, otherwise defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let default_path = infrastructure::default_config_path();
        if default_path.exists() {
            Self::from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Applies command line overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(theme_name) = overrides.theme_name {
            self.theme_name = Some(theme_name);
            self.theme_file = None;
        }
        if let Some(trace_level) = overrides.trace_level {
            self.trace_level = Some(trace_level);
        }
        if let Some(mode) = overrides.mode {
            self.default_mode = mode;
        }
        if overrides.no_color {
            self.color = false;
        }
        self
    }
}

fn expand_path(path: &Path) -> PathBuf {
    path.to_str().map_or_else(|| path.to_path_buf(), infrastructure::expand_tilde)
}

/// Creates the initial form state from configuration.
///
/// Theme problems are not fatal: the default theme is used and the failure
/// is logged.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(base_url = %config.base_url, mode = %config.default_mode, "initializing resume analyzer");

    let theme = Theme::resolve(config.theme_name.as_deref(), config.theme_file.as_deref())
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load theme, using default");
            Theme::default()
        });

    AppState::new(config.default_mode, theme)
}
