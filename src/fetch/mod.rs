//! Fetch coordination between the workflow state machine and the backend.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol with per-request identifiers
//! - `handler`: Coordinator that executes requests and yields completions
//! - `tracker`: Loading flags that ignore completions of superseded requests

pub mod handler;
pub mod messages;
pub mod tracker;

pub use handler::FetchCoordinator;
pub use messages::{FetchRequest, FetchResponse, RequestId};
pub use tracker::LoadingFlag;
