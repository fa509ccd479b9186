//! Request and response protocol between the state machine and the fetch
//! coordinator.
//!
//! The event handler emits [`FetchRequest`]s; the coordinator turns each one
//! into a future that always resolves to exactly one [`FetchResponse`],
//! which is fed back to the handler as an event. Every request carries a
//! [`RequestId`] so completions of superseded requests can be recognised.

use crate::domain::AnalysisSubmission;
use crate::service::{AnalysisOutcome, JobRolesOutcome};
use std::fmt;

/// Identifier of one issued request, unique within a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Requests sent from the state machine to the fetch coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Read the job-role catalog.
    JobRoles {
        /// Request identifier.
        id: RequestId,
    },

    /// Upload a resume for analysis.
    Analyze {
        /// Request identifier.
        id: RequestId,
        /// Validated submission payload.
        submission: AnalysisSubmission,
    },
}

impl FetchRequest {
    /// Identifier of this request.
    #[must_use]
    pub const fn id(&self) -> RequestId {
        match self {
            Self::JobRoles { id } | Self::Analyze { id, .. } => *id,
        }
    }
}

/// Completions sent from the fetch coordinator back to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResponse {
    /// A job-role catalog request finished.
    JobRoles {
        /// Identifier of the completed request.
        id: RequestId,
        /// Role identifiers, or why the request failed.
        outcome: JobRolesOutcome,
    },

    /// An analysis request finished.
    Analysis {
        /// Identifier of the completed request.
        id: RequestId,
        /// Analysis result, or why the request failed.
        outcome: AnalysisOutcome,
    },
}

impl FetchResponse {
    /// Identifier of the completed request.
    #[must_use]
    pub const fn id(&self) -> RequestId {
        match self {
            Self::JobRoles { id, .. } | Self::Analysis { id, .. } => *id,
        }
    }
}
