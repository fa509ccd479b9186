//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! fetch completions, translating them into state changes and actions.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the front end or the fetch coordinator
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Fetch requests are collected and returned as actions
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mounted`
//! - **Input**: `FileSelected`, `ModeSelected`, `JobRoleSelected`,
//!   `JobDescriptionChanged`, `Submit`
//! - **Completion**: `FetchCompleted` with a typed response
//!
//! # Example
//!
//! ```rust
//! use resume_analyzer::app::{handle_event, AppState, Event};
//! use resume_analyzer::domain::AnalysisMode;
//! use resume_analyzer::ui::Theme;
//!
//! let mut state = AppState::new(AnalysisMode::KeywordMatch, Theme::default());
//! let (needs_render, actions) = handle_event(&mut state, Event::Mounted);
//! assert!(needs_render);
//! assert_eq!(actions.len(), 1); // job roles request
//! ```

use crate::app::state::ErrorSource;
use crate::app::{Action, AppState};
use crate::domain::error::JOB_ROLES_FAILED_MESSAGE;
use crate::domain::{AnalysisMode, UploadedFile};
use crate::fetch::{FetchRequest, FetchResponse};

/// Events triggered by user input or request completions.
///
/// Events are processed one at a time, so every transition sees a
/// consistent state.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The form became visible. Loads the catalog in keyword mode.
    Mounted,

    /// The user picked a resume file.
    FileSelected(UploadedFile),

    /// The user switched the comparison method.
    ///
    /// Selecting keyword matching always requests the catalog again, even
    /// when it is already the active mode.
    ModeSelected(AnalysisMode),

    /// The user chose a job role. Stored as is.
    JobRoleSelected(String),

    /// The user edited the job description. Stored as is.
    JobDescriptionChanged(String),

    /// The user asked for an analysis.
    ///
    /// Ignored while an analysis is already in flight.
    Submit,

    /// A request issued earlier has completed.
    FetchCompleted(FetchResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A `(needs_render, actions)` pair. `needs_render` is `false` when the
/// event left the visible state untouched; `actions` lists the requests to
/// start, in order.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(&event)).entered();

    match event {
        Event::Mounted => {
            tracing::debug!(mode = %state.mode, "form mounted");
            let actions = if state.mode == AnalysisMode::KeywordMatch {
                vec![start_job_roles_request(state)]
            } else {
                vec![]
            };
            (true, actions)
        }
        Event::FileSelected(file) => {
            // Rejection is recorded in the error banner by `set_file`.
            let _ = state.set_file(file);
            (true, vec![])
        }
        Event::ModeSelected(mode) => {
            tracing::debug!(from = %state.mode, to = %mode, "mode selected");
            state.mode = mode;

            let actions = if mode == AnalysisMode::KeywordMatch {
                vec![start_job_roles_request(state)]
            } else {
                vec![]
            };
            (true, actions)
        }
        Event::JobRoleSelected(role) => {
            tracing::debug!(role = %role, in_catalog = state.job_roles.contains(&role), "job role selected");
            state.selected_job_role = role;
            (true, vec![])
        }
        Event::JobDescriptionChanged(text) => {
            tracing::trace!(chars = text.chars().count(), "job description changed");
            state.job_description = text;
            (true, vec![])
        }
        Event::Submit => handle_submit(state),
        Event::FetchCompleted(response) => handle_completion(state, response),
    }
}

fn handle_submit(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.is_analyzing() {
        tracing::debug!("analysis already in flight, submit ignored");
        return (false, vec![]);
    }

    match state.validate_submission() {
        Ok(submission) => {
            let id = state.next_request_id();
            state.analysis_request.begin(id);
            state.clear_error();

            tracing::debug!(
                request_id = %id,
                method = submission.mode().wire_id(),
                file_name = %submission.file.name,
                "analysis submitted"
            );
            (true, vec![Action::Fetch(FetchRequest::Analyze { id, submission })])
        }
        Err(err) => {
            tracing::debug!(error = %err, "submission rejected");
            state.set_error(ErrorSource::Input, err.to_string());
            (true, vec![])
        }
    }
}

fn handle_completion(state: &mut AppState, response: FetchResponse) -> (bool, Vec<Action>) {
    match response {
        FetchResponse::JobRoles { id, outcome } => {
            if !state.roles_request.finish(id) {
                tracing::debug!(request_id = %id, "stale job roles response dropped");
                return (false, vec![]);
            }

            match outcome {
                Ok(roles) => {
                    tracing::debug!(request_id = %id, role_count = roles.len(), "job roles loaded");
                    state.job_roles.replace(roles);
                    state.clear_error_from(ErrorSource::JobRoles);
                }
                Err(e) => {
                    tracing::warn!(request_id = %id, error = %e, "failed to load job roles");
                    state.set_error(ErrorSource::JobRoles, JOB_ROLES_FAILED_MESSAGE);
                }
            }
            (true, vec![])
        }
        FetchResponse::Analysis { id, outcome } => {
            if !state.analysis_request.finish(id) {
                tracing::debug!(request_id = %id, "stale analysis response dropped");
                return (false, vec![]);
            }

            match outcome {
                Ok(result) => {
                    tracing::info!(
                        request_id = %id,
                        method = result.mode().wire_id(),
                        score = result.score(),
                        "analysis completed"
                    );
                    state.result = Some(result);
                    state.clear_error();
                }
                Err(e) => {
                    tracing::warn!(request_id = %id, error = %e, "analysis failed");
                    state.set_error(ErrorSource::Analysis, e.user_message());
                }
            }
            (true, vec![])
        }
    }
}

fn start_job_roles_request(state: &mut AppState) -> Action {
    let id = state.next_request_id();
    state.roles_request.begin(id);
    tracing::debug!(request_id = %id, "requesting job roles");
    Action::Fetch(FetchRequest::JobRoles { id })
}

/// Event name for span fields; avoids dumping file bytes into logs.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Mounted => "mounted",
        Event::FileSelected(_) => "file_selected",
        Event::ModeSelected(_) => "mode_selected",
        Event::JobRoleSelected(_) => "job_role_selected",
        Event::JobDescriptionChanged(_) => "job_description_changed",
        Event::Submit => "submit",
        Event::FetchCompleted(FetchResponse::JobRoles { .. }) => "job_roles_completed",
        Event::FetchCompleted(FetchResponse::Analysis { .. }) => "analysis_completed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnalysisResult, AnalysisTarget, FetchError, KeywordMatch, SemanticMatch};
    use crate::fetch::RequestId;
    use crate::ui::Theme;

    fn keyword_state() -> AppState {
        AppState::new(AnalysisMode::KeywordMatch, Theme::default())
    }

    fn pdf() -> UploadedFile {
        UploadedFile::new("cv.pdf", "application/pdf", b"%PDF".to_vec())
    }

    fn request_id(actions: &[Action]) -> RequestId {
        match actions {
            [Action::Fetch(request)] => request.id(),
            other => panic!("expected one fetch action, got {other:?}"),
        }
    }

    fn semantic_result(score: f64) -> AnalysisResult {
        AnalysisResult::SemanticMatch(SemanticMatch {
            score,
            remark: "Reasonable alignment".into(),
        })
    }

    #[test]
    fn mount_requests_roles_only_in_keyword_mode() {
        let mut state = keyword_state();
        let (_, actions) = handle_event(&mut state, Event::Mounted);
        assert!(matches!(actions.as_slice(), [Action::Fetch(FetchRequest::JobRoles { .. })]));
        assert!(state.is_loading_roles());

        let mut state = AppState::new(AnalysisMode::SemanticMatch, Theme::default());
        let (_, actions) = handle_event(&mut state, Event::Mounted);
        assert!(actions.is_empty());
        assert!(!state.is_loading_roles());
    }

    #[test]
    fn reselecting_keyword_mode_fetches_again() {
        let mut state = keyword_state();
        let (_, first) = handle_event(&mut state, Event::ModeSelected(AnalysisMode::KeywordMatch));
        let (_, second) = handle_event(&mut state, Event::ModeSelected(AnalysisMode::KeywordMatch));
        assert_ne!(request_id(&first), request_id(&second));

        let (_, none) = handle_event(&mut state, Event::ModeSelected(AnalysisMode::SemanticMatch));
        assert!(none.is_empty());
    }

    #[test]
    fn invalid_submission_sets_error_without_request() {
        let mut state = keyword_state();
        let (render, actions) = handle_event(&mut state, Event::Submit);
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.error_message(), Some("Please upload a PDF resume."));
        assert!(!state.is_analyzing());
    }

    #[test]
    fn valid_submission_clears_error_and_sets_flag() {
        let mut state = keyword_state();
        handle_event(&mut state, Event::FileSelected(pdf()));
        handle_event(&mut state, Event::Submit);
        assert_eq!(state.error_message(), Some("Please select a job role."));

        handle_event(&mut state, Event::JobRoleSelected("data_scientist".into()));
        let (_, actions) = handle_event(&mut state, Event::Submit);

        let [Action::Fetch(FetchRequest::Analyze { submission, .. })] = actions.as_slice() else {
            panic!("expected analyze request");
        };
        assert_eq!(submission.target, AnalysisTarget::JobRole("data_scientist".into()));
        assert!(state.error.is_none());
        assert!(state.is_analyzing());
    }

    #[test]
    fn submit_is_ignored_while_analyzing() {
        let mut state = AppState::new(AnalysisMode::SemanticMatch, Theme::default());
        handle_event(&mut state, Event::FileSelected(pdf()));
        handle_event(&mut state, Event::JobDescriptionChanged("Rust engineer".into()));

        let (_, first) = handle_event(&mut state, Event::Submit);
        assert_eq!(first.len(), 1);

        let (render, second) = handle_event(&mut state, Event::Submit);
        assert!(!render);
        assert!(second.is_empty());
    }

    #[test]
    fn analysis_failure_keeps_previous_result() {
        let mut state = AppState::new(AnalysisMode::SemanticMatch, Theme::default());
        handle_event(&mut state, Event::FileSelected(pdf()));
        handle_event(&mut state, Event::JobDescriptionChanged("Rust engineer".into()));

        let (_, actions) = handle_event(&mut state, Event::Submit);
        let id = request_id(&actions);
        handle_event(
            &mut state,
            Event::FetchCompleted(FetchResponse::Analysis { id, outcome: Ok(semantic_result(71.0)) }),
        );

        let (_, actions) = handle_event(&mut state, Event::Submit);
        let id = request_id(&actions);
        handle_event(
            &mut state,
            Event::FetchCompleted(FetchResponse::Analysis {
                id,
                outcome: Err(FetchError::Status { status: 500, message: None }),
            }),
        );

        assert!(!state.is_analyzing());
        assert_eq!(state.error_message(), Some("Failed to analyze resume."));
        assert_eq!(state.result, Some(semantic_result(71.0)));
    }

    #[test]
    fn server_message_reaches_the_banner() {
        let mut state = AppState::new(AnalysisMode::SemanticMatch, Theme::default());
        handle_event(&mut state, Event::FileSelected(pdf()));
        handle_event(&mut state, Event::JobDescriptionChanged("Rust engineer".into()));
        let (_, actions) = handle_event(&mut state, Event::Submit);

        handle_event(
            &mut state,
            Event::FetchCompleted(FetchResponse::Analysis {
                id: request_id(&actions),
                outcome: Err(FetchError::Rejected("Could not extract text from PDF".into())),
            }),
        );
        assert_eq!(state.error_message(), Some("Could not extract text from PDF"));
    }

    #[test]
    fn role_failure_keeps_catalog_and_flags_error() {
        let mut state = keyword_state();
        state.job_roles.replace(vec!["data_scientist".into()]);

        let (_, actions) = handle_event(&mut state, Event::Mounted);
        handle_event(
            &mut state,
            Event::FetchCompleted(FetchResponse::JobRoles {
                id: request_id(&actions),
                outcome: Err(FetchError::Transport("connection refused".into())),
            }),
        );

        assert!(!state.is_loading_roles());
        assert_eq!(state.error_message(), Some("Unable to load job roles."));
        assert_eq!(state.job_roles.roles(), ["data_scientist".to_string()]);
    }

    #[test]
    fn role_success_does_not_clear_input_errors() {
        let mut state = keyword_state();
        let (_, actions) = handle_event(&mut state, Event::Mounted);
        handle_event(&mut state, Event::Submit);

        handle_event(
            &mut state,
            Event::FetchCompleted(FetchResponse::JobRoles {
                id: request_id(&actions),
                outcome: Ok(vec!["data_scientist".into(), "web_developer".into()]),
            }),
        );

        assert_eq!(state.job_roles.len(), 2);
        assert_eq!(state.error_message(), Some("Please upload a PDF resume."));
    }

    #[test]
    fn stale_role_response_is_dropped() {
        let mut state = keyword_state();
        let (_, first) = handle_event(&mut state, Event::Mounted);
        let (_, second) = handle_event(&mut state, Event::ModeSelected(AnalysisMode::KeywordMatch));

        let (render, _) = handle_event(
            &mut state,
            Event::FetchCompleted(FetchResponse::JobRoles {
                id: request_id(&first),
                outcome: Ok(vec!["old".into()]),
            }),
        );
        assert!(!render);
        assert!(state.is_loading_roles());
        assert!(state.job_roles.is_empty());

        handle_event(
            &mut state,
            Event::FetchCompleted(FetchResponse::JobRoles {
                id: request_id(&second),
                outcome: Ok(vec!["new".into()]),
            }),
        );
        assert!(!state.is_loading_roles());
        assert_eq!(state.job_roles.roles(), ["new".to_string()]);
    }

    #[test]
    fn keyword_result_replaces_semantic_result() {
        let mut state = keyword_state();
        state.result = Some(semantic_result(40.0));
        handle_event(&mut state, Event::FileSelected(pdf()));
        handle_event(&mut state, Event::JobRoleSelected("data_scientist".into()));
        let (_, actions) = handle_event(&mut state, Event::Submit);

        let keyword = AnalysisResult::KeywordMatch(KeywordMatch {
            score: 82.456,
            remark: "Good fit".into(),
            matched_keywords: vec!["python".into()],
            missing_keywords: vec![],
        });
        handle_event(
            &mut state,
            Event::FetchCompleted(FetchResponse::Analysis {
                id: request_id(&actions),
                outcome: Ok(keyword.clone()),
            }),
        );
        assert_eq!(state.result, Some(keyword));
    }
}
