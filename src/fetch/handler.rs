//! Fetch coordinator owning every in-flight request.
//!
//! The coordinator turns [`FetchRequest`]s into futures against an
//! [`AnalysisService`] and keeps them in a `FuturesUnordered` set. Nothing is
//! spawned: requests make progress only while the owner awaits
//! [`FetchCoordinator::next_response`], which keeps completions on the same
//! task as the state machine and removes any need for locking.
//!
//! Every request future resolves to exactly one [`FetchResponse`]. Failures
//! are carried inside the response, never raised.

use crate::fetch::messages::{FetchRequest, FetchResponse, RequestId};
use crate::service::AnalysisService;
use futures_util::future::{BoxFuture, FutureExt};
use futures_util::stream::{FuturesUnordered, StreamExt};
use std::fmt;
use std::sync::Arc;
use tracing::Instrument;

/// Executes fetch requests and yields their completions.
pub struct FetchCoordinator {
    service: Arc<dyn AnalysisService>,
    in_flight: FuturesUnordered<BoxFuture<'static, FetchResponse>>,
}

impl FetchCoordinator {
    /// Creates a coordinator issuing requests against `service`.
    #[must_use]
    pub fn new(service: Arc<dyn AnalysisService>) -> Self {
        Self {
            service,
            in_flight: FuturesUnordered::new(),
        }
    }

    /// Starts executing a request.
    ///
    /// The request is only polled while [`next_response`](Self::next_response)
    /// is awaited.
    pub fn execute(&mut self, request: FetchRequest) {
        let id = request.id();
        let future = match request {
            FetchRequest::JobRoles { id } => Self::handle_job_roles(self.service.as_ref(), id),
            FetchRequest::Analyze { id, submission } => {
                tracing::debug!(request_id = %id, method = submission.mode().wire_id(), "analysis request issued");
                self.service
                    .submit_analysis(submission)
                    .map(move |outcome| FetchResponse::Analysis { id, outcome })
                    .instrument(tracing::debug_span!("fetch", operation = "analyze", request_id = id.0))
                    .boxed()
            }
        };

        self.in_flight.push(future);
        tracing::debug!(request_id = %id, in_flight = self.in_flight.len(), "request queued");
    }

    fn handle_job_roles(service: &dyn AnalysisService, id: RequestId) -> BoxFuture<'static, FetchResponse> {
        tracing::debug!(request_id = %id, "job roles request issued");
        service
            .fetch_job_roles()
            .map(move |outcome| FetchResponse::JobRoles { id, outcome })
            .instrument(tracing::debug_span!("fetch", operation = "job_roles", request_id = id.0))
            .boxed()
    }

    /// Waits for the next request to complete.
    ///
    /// Returns `None` immediately when nothing is in flight.
    pub async fn next_response(&mut self) -> Option<FetchResponse> {
        let response = self.in_flight.next().await?;

        match &response {
            FetchResponse::JobRoles { id, outcome: Ok(roles) } => {
                tracing::debug!(request_id = %id, role_count = roles.len(), "job roles request completed");
            }
            FetchResponse::Analysis { id, outcome: Ok(result) } => {
                tracing::debug!(request_id = %id, method = result.mode().wire_id(), "analysis request completed");
            }
            FetchResponse::JobRoles { id, outcome: Err(e) }
            | FetchResponse::Analysis { id, outcome: Err(e) } => {
                tracing::debug!(request_id = %id, error = %e, "request failed");
            }
        }

        Some(response)
    }

    /// Number of requests that have not completed yet.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Returns `true` if no request is outstanding.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.in_flight.is_empty()
    }
}

impl fmt::Debug for FetchCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchCoordinator")
            .field("in_flight", &self.in_flight.len())
            .finish_non_exhaustive()
    }
}
