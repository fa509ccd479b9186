//! Analysis backend access.
//!
//! This module provides the [`AnalysisService`] abstraction over the two
//! endpoints the workflow consumes, plus the HTTP implementation and the
//! wire models it decodes.
//!
//! # Architecture
//!
//! - [`backend`]: The service trait and outcome aliases
//! - [`http`]: `reqwest` implementation against a configured base URL
//! - [`models`]: Response shapes and decoding rules

pub mod backend;
pub mod http;
pub mod models;

pub use backend::{AnalysisOutcome, AnalysisService, JobRolesOutcome};
pub use http::{HttpAnalysisService, ANALYZE_PATH, JOB_ROLES_PATH};
