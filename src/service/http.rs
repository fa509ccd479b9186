//! HTTP implementation of [`AnalysisService`] backed by `reqwest`.
//!
//! The base URL is injected once at construction; endpoint paths are fixed
//! and appended to it. The client is built without a timeout: a request
//! runs until the server or the transport gives up.

use crate::domain::error::{AnalyzerError, Result};
use crate::domain::{AnalysisResult, AnalysisSubmission, AnalysisTarget, FetchError};
use crate::service::backend::{AnalysisOutcome, AnalysisService, JobRolesOutcome};
use crate::service::models::{decode_analysis, decode_job_roles, error_detail};
use futures_util::future::{BoxFuture, FutureExt};
use reqwest::multipart::{Form, Part};

/// Path of the job-role catalog endpoint.
pub const JOB_ROLES_PATH: &str = "/job_roles/";

/// Path of the analysis endpoint.
pub const ANALYZE_PATH: &str = "/analyze/";

/// Analysis backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnalysisService {
    /// Creates a service for the backend at `base_url`.
    ///
    /// A trailing slash on the base URL is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or the HTTP client cannot be
    /// built.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(base_url, reqwest::Client::builder())
    }

    fn with_client(base_url: &str, builder: reqwest::ClientBuilder) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(AnalyzerError::Config("base_url must not be empty".to_string()));
        }

        let client = builder.build().map_err(|e| AnalyzerError::Http(e.to_string()))?;

        tracing::debug!(base_url = %base_url, "analysis service configured");

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Full URL for an endpoint path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_job_roles(client: reqwest::Client, url: String) -> JobRolesOutcome {
        tracing::debug!(url = %url, "requesting job roles");

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "job roles request rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: error_detail(&body),
            });
        }

        decode_job_roles(&body)
    }

    async fn post_analysis(
        client: reqwest::Client,
        url: String,
        submission: AnalysisSubmission,
    ) -> AnalysisOutcome {
        let mode = submission.mode();
        let file_name = submission.file.name.clone();

        tracing::debug!(
            url = %url,
            method = mode.wire_id(),
            file_name = %file_name,
            size = submission.file.size(),
            "submitting analysis"
        );

        let part = Part::bytes(submission.file.bytes)
            .file_name(file_name)
            .mime_str(&submission.file.media_type)
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let form = Form::new().part("file", part).text("method", mode.wire_id());
        let form = match submission.target {
            AnalysisTarget::JobRole(role) => form.text("job_role", role),
            AnalysisTarget::JobDescription(text) => form.text("job_description", text),
        };

        let response = client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "analysis request rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: error_detail(&body),
            });
        }

        let result: AnalysisResult = decode_analysis(&body)?;
        tracing::debug!(method = result.mode().wire_id(), score = result.score(), "analysis decoded");
        Ok(result)
    }
}

impl AnalysisService for HttpAnalysisService {
    fn fetch_job_roles(&self) -> BoxFuture<'static, JobRolesOutcome> {
        Self::get_job_roles(self.client.clone(), self.endpoint(JOB_ROLES_PATH)).boxed()
    }

    fn submit_analysis(&self, submission: AnalysisSubmission) -> BoxFuture<'static, AnalysisOutcome> {
        Self::post_analysis(self.client.clone(), self.endpoint(ANALYZE_PATH), submission).boxed()
    }
}
