//! Analysis backend abstraction.
//!
//! This module defines the [`AnalysisService`] trait that abstracts over the
//! two endpoints the workflow consumes. The workflow never talks HTTP
//! directly, so tests can script completions and the transport can change
//! without touching the state machine.
//!
//! Both methods return `'static` boxed futures. The caller owns the future
//! and decides when it is polled; nothing runs until then.

use crate::domain::{AnalysisResult, AnalysisSubmission, FetchError};
use futures_util::future::BoxFuture;

/// Outcome of a job-role catalog request.
pub type JobRolesOutcome = Result<Vec<String>, FetchError>;

/// Outcome of an analysis submission.
pub type AnalysisOutcome = Result<AnalysisResult, FetchError>;

/// Abstraction over the analysis backend.
///
/// # Implementations
///
/// - [`HttpAnalysisService`](crate::service::HttpAnalysisService): talks to
///   the HTTP backend with `reqwest`
///
/// # Examples
///
/// ```no_run
/// use resume_analyzer::service::{AnalysisService, HttpAnalysisService};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let service = HttpAnalysisService::new("http://localhost:8000")?;
/// let roles = service.fetch_job_roles().await?;
/// println!("{} roles available", roles.len());
/// # Ok(())
/// # }
/// ```
pub trait AnalysisService: Send + Sync {
    /// Reads the job-role catalog.
    ///
    /// Any non-success status, transport failure or undecodable body is an
    /// error.
    fn fetch_job_roles(&self) -> BoxFuture<'static, JobRolesOutcome>;

    /// Uploads a resume with its comparison target and returns the score.
    fn submit_analysis(&self, submission: AnalysisSubmission) -> BoxFuture<'static, AnalysisOutcome>;
}
