//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the front end (main.rs) and the
//! domain/service/fetch layers. It implements the event-driven state machine
//! behind the analysis form.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Fetch Coordinator
//!                           ↑                                              ↓
//!                           └────────────── Fetch Responses ───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transitions
//! - [`state`]: Central state container, validation and view model computation
//! - [`workflow`]: Driver executing actions and feeding completions back

pub mod actions;
pub mod handler;
pub mod state;
pub mod workflow;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::{AppState, ErrorBanner, ErrorSource};
pub use workflow::Workflow;
