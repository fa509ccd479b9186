//! Error types for the resume analyzer.
//!
//! This module defines the crate-wide error type [`AnalyzerError`], the
//! user-facing [`ValidationError`] raised by the input checks, and
//! [`FetchError`] describing why a network request failed. All of them are
//! implemented with `thiserror`.
//!
//! Validation and fetch errors never escape the workflow: the event handler
//! converts them into the single error banner shown by the UI. Only setup
//! failures (configuration, themes, reading a file from disk) travel as
//! [`AnalyzerError`].

use thiserror::Error;

/// Generic message shown when an analysis request fails without detail.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze resume.";

/// Message shown whenever the job-role catalog cannot be fetched.
pub const JOB_ROLES_FAILED_MESSAGE: &str = "Unable to load job roles.";

/// The main error type for resume analyzer operations.
///
/// # Examples
///
/// ```
/// use resume_analyzer::AnalyzerError;
///
/// fn validate_base_url(url: &str) -> Result<(), AnalyzerError> {
///     if url.is_empty() {
///         return Err(AnalyzerError::Config("base_url must not be empty".to_string()));
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(String),

    /// A request to the analysis backend failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// User input was rejected by the validation policy.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Input rejected before any network call is made.
///
/// The `Display` text of every variant is exactly the message shown in the
/// error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The candidate file does not declare `application/pdf`.
    #[error("Only PDF files are allowed.")]
    NotPdf {
        /// Media type the candidate file declared.
        media_type: String,
    },

    /// Submission attempted without an uploaded resume.
    #[error("Please upload a PDF resume.")]
    MissingFile,

    /// Keyword matching requested without a job role.
    #[error("Please select a job role.")]
    MissingJobRole,

    /// Semantic matching requested with a blank job description.
    #[error("Please enter job description.")]
    MissingJobDescription,
}

/// Why a request to the analysis backend failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server returned {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error detail extracted from the response body, if any.
        message: Option<String>,
    },

    /// The server answered successfully but reported an error in the body.
    #[error("{0}")]
    Rejected(String),

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Returns the text stored in the error banner for a failed analysis.
    ///
    /// Server-supplied detail and transport errors carry their own message;
    /// everything else falls back to [`ANALYSIS_FAILED_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(message) | Self::Rejected(message) if !message.trim().is_empty() => {
                message.clone()
            }
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => {
                message.clone()
            }
            _ => ANALYSIS_FAILED_MESSAGE.to_string(),
        }
    }
}

/// A specialized `Result` type for resume analyzer operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_banner_text() {
        assert_eq!(
            ValidationError::NotPdf { media_type: "text/plain".into() }.to_string(),
            "Only PDF files are allowed."
        );
        assert_eq!(ValidationError::MissingFile.to_string(), "Please upload a PDF resume.");
        assert_eq!(ValidationError::MissingJobRole.to_string(), "Please select a job role.");
        assert_eq!(
            ValidationError::MissingJobDescription.to_string(),
            "Please enter job description."
        );
    }

    #[test]
    fn status_without_detail_uses_generic_message() {
        let err = FetchError::Status { status: 500, message: None };
        assert_eq!(err.user_message(), ANALYSIS_FAILED_MESSAGE);

        let blank = FetchError::Status { status: 422, message: Some("  ".into()) };
        assert_eq!(blank.user_message(), ANALYSIS_FAILED_MESSAGE);
    }

    #[test]
    fn server_detail_is_preserved() {
        let err = FetchError::Status {
            status: 400,
            message: Some("Job role is required for TF-IDF method".into()),
        };
        assert_eq!(err.user_message(), "Job role is required for TF-IDF method");

        let rejected = FetchError::Rejected("File is empty or not provided".into());
        assert_eq!(rejected.user_message(), "File is empty or not provided");
    }

    #[test]
    fn decode_failure_uses_generic_message() {
        let err = FetchError::Decode("missing field `score`".into());
        assert_eq!(err.user_message(), ANALYSIS_FAILED_MESSAGE);
    }
}
