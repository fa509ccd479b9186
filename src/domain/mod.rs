//! Domain layer for the resume analyzer.
//!
//! This module contains the core data model of the analysis workflow,
//! independent of the terminal front end and of the HTTP transport.
//!
//! # Organization
//!
//! - [`analysis`]: Analysis modes, validated submissions and tagged results
//! - [`catalog`]: Job-role catalog with fuzzy lookup
//! - [`error`]: Error types and result aliases
//! - [`resume`]: Uploaded resume file and media type detection
//!
//! # Examples
//!
//! ```
//! use resume_analyzer::domain::{AnalysisMode, UploadedFile};
//!
//! let file = UploadedFile::new("cv.pdf", "application/pdf", vec![]);
//! assert!(file.is_pdf());
//! assert_eq!(AnalysisMode::default().wire_id(), "tfidf");
//! ```

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod resume;

pub use analysis::{
    AnalysisMode, AnalysisResult, AnalysisSubmission, AnalysisTarget, KeywordMatch,
    SemanticMatch,
};
pub use catalog::JobRoleCatalog;
pub use error::{AnalyzerError, FetchError, Result, ValidationError};
pub use resume::{UploadedFile, PDF_MEDIA_TYPE};
