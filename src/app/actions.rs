//! Actions representing side effects to be executed by the workflow driver.
//!
//! The event handler never performs I/O. It returns a `Vec<Action>` after
//! processing each event and the [`Workflow`](crate::app::Workflow) driver
//! executes them in order.
//!
//! # Example
//!
//! ```rust
//! use resume_analyzer::app::Action;
//! use resume_analyzer::fetch::{FetchRequest, RequestId};
//!
//! let actions = vec![Action::Fetch(FetchRequest::JobRoles { id: RequestId(1) })];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::fetch::FetchRequest;

/// Commands representing side effects to be executed by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hands a request to the fetch coordinator.
    ///
    /// The completion comes back later as
    /// [`Event::FetchCompleted`](crate::app::Event::FetchCompleted).
    Fetch(FetchRequest),
}
