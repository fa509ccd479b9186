//! Driver that connects the event handler with the fetch coordinator.
//!
//! [`Workflow`] owns the [`AppState`] and a [`FetchCoordinator`]. Events go
//! through [`handle_event`] and any resulting actions are executed right
//! away. Completions are pulled with [`Workflow::next_completion`] and fed
//! back as [`Event::FetchCompleted`], so every state transition happens on
//! the caller's task, one at a time.
//!
//! # Example
//!
//! ```rust,no_run
//! use resume_analyzer::app::{AppState, Event, Workflow};
//! use resume_analyzer::domain::AnalysisMode;
//! use resume_analyzer::service::HttpAnalysisService;
//! use resume_analyzer::ui::Theme;
//! use std::sync::Arc;
//!
//! # async fn run() -> resume_analyzer::Result<()> {
//! let service = Arc::new(HttpAnalysisService::new("http://localhost:8000")?);
//! let state = AppState::new(AnalysisMode::KeywordMatch, Theme::default());
//! let mut workflow = Workflow::new(state, service);
//!
//! workflow.dispatch(Event::Mounted);
//! workflow.settle().await;
//! println!("{} roles", workflow.state().job_roles.len());
//! # Ok(())
//! # }
//! ```

use crate::app::{handle_event, Action, AppState, Event};
use crate::fetch::FetchCoordinator;
use crate::service::AnalysisService;
use std::sync::Arc;

/// Owns the workflow state and its in-flight requests.
#[derive(Debug)]
pub struct Workflow {
    state: AppState,
    coordinator: FetchCoordinator,
}

impl Workflow {
    /// Creates a workflow over `state` issuing requests against `service`.
    #[must_use]
    pub fn new(state: AppState, service: Arc<dyn AnalysisService>) -> Self {
        Self {
            state,
            coordinator: FetchCoordinator::new(service),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Processes one event and starts the requests it produced.
    ///
    /// Returns `true` if the view needs to be redrawn.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let (needs_render, actions) = handle_event(&mut self.state, event);
        self.execute(actions);
        needs_render
    }

    fn execute(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::Fetch(request) => self.coordinator.execute(request),
            }
        }
    }

    /// Waits for the next request to complete and applies it.
    ///
    /// Returns `None` when nothing is in flight, otherwise whether the view
    /// needs to be redrawn.
    pub async fn next_completion(&mut self) -> Option<bool> {
        let response = self.coordinator.next_response().await?;
        Some(self.dispatch(Event::FetchCompleted(response)))
    }

    /// Applies completions until no request is in flight.
    pub async fn settle(&mut self) {
        while self.next_completion().await.is_some() {}
    }

    /// Number of requests still in flight.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.coordinator.in_flight()
    }

    /// Returns `true` if no request is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.coordinator.is_idle()
    }

    /// Consumes the workflow and returns its final state.
    #[must_use]
    pub fn into_state(self) -> AppState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AnalysisMode, AnalysisResult, AnalysisSubmission, FetchError, KeywordMatch, SemanticMatch,
        UploadedFile,
    };
    use crate::service::{AnalysisOutcome, JobRolesOutcome};
    use crate::ui::{render, Theme};
    use futures_util::future::{BoxFuture, FutureExt};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    type Gate<T> = Mutex<VecDeque<oneshot::Receiver<Result<T, FetchError>>>>;

    /// Service whose responses are released by the test, in any order.
    #[derive(Default)]
    struct GatedService {
        roles: Gate<Vec<String>>,
        analyses: Gate<AnalysisResult>,
    }

    impl GatedService {
        fn gate_roles(&self) -> oneshot::Sender<JobRolesOutcome> {
            let (tx, rx) = oneshot::channel();
            self.roles.lock().unwrap().push_back(rx);
            tx
        }

        fn gate_analysis(&self) -> oneshot::Sender<AnalysisOutcome> {
            let (tx, rx) = oneshot::channel();
            self.analyses.lock().unwrap().push_back(rx);
            tx
        }
    }

    fn open_gate<T: Send + 'static>(gate: &Gate<T>) -> BoxFuture<'static, Result<T, FetchError>> {
        let rx = gate.lock().unwrap().pop_front();
        async move {
            match rx {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(FetchError::Transport("gate dropped".into()))),
                None => Err(FetchError::Transport("no gate".into())),
            }
        }
        .boxed()
    }

    impl AnalysisService for GatedService {
        fn fetch_job_roles(&self) -> BoxFuture<'static, JobRolesOutcome> {
            open_gate(&self.roles)
        }

        fn submit_analysis(&self, _submission: AnalysisSubmission) -> BoxFuture<'static, AnalysisOutcome> {
            open_gate(&self.analyses)
        }
    }

    fn workflow(mode: AnalysisMode, service: &Arc<GatedService>) -> Workflow {
        Workflow::new(AppState::new(mode, Theme::default()), service.clone())
    }

    fn pdf() -> UploadedFile {
        UploadedFile::new("cv.pdf", "application/pdf", b"%PDF-1.7".to_vec())
    }

    fn roles(names: &[&str]) -> JobRolesOutcome {
        Ok(names.iter().map(|s| (*s).to_string()).collect())
    }

    #[tokio::test]
    async fn keyword_analysis_end_to_end() {
        let service = Arc::new(GatedService::default());
        let catalog = service.gate_roles();
        let mut workflow = workflow(AnalysisMode::KeywordMatch, &service);

        workflow.dispatch(Event::Mounted);
        assert!(workflow.state().is_loading_roles());
        assert!(render(workflow.state(), 80, false).contains("Loading job roles..."));

        catalog.send(roles(&["data_scientist", "backend_engineer"])).unwrap();
        assert_eq!(workflow.next_completion().await, Some(true));
        assert!(!workflow.state().is_loading_roles());
        assert_eq!(workflow.state().job_roles.len(), 2);

        let analysis = service.gate_analysis();
        workflow.dispatch(Event::FileSelected(pdf()));
        workflow.dispatch(Event::JobRoleSelected("data_scientist".into()));
        workflow.dispatch(Event::Submit);
        assert!(workflow.state().is_analyzing());
        assert!(render(workflow.state(), 80, false).contains("Analyzing..."));

        analysis
            .send(Ok(AnalysisResult::KeywordMatch(KeywordMatch {
                score: 82.456,
                remark: "Strong overlap with the role".into(),
                matched_keywords: vec!["python".into(), "sql".into()],
                missing_keywords: vec!["spark".into()],
            })))
            .unwrap();
        workflow.settle().await;

        let state = workflow.into_state();
        assert!(!state.is_analyzing());
        assert_eq!(state.error_message(), None);

        let screen = render(&state, 80, false);
        assert!(screen.contains("Score: 82.46%"));
        assert!(screen.contains("Strong overlap with the role"));
        assert!(screen.find(" python ").unwrap() < screen.find(" sql ").unwrap());
        assert!(screen.contains(" spark "));
    }

    #[tokio::test]
    async fn roles_stay_loading_until_the_latest_request_completes() {
        let service = Arc::new(GatedService::default());
        let first = service.gate_roles();
        let second = service.gate_roles();
        let mut workflow = workflow(AnalysisMode::KeywordMatch, &service);

        workflow.dispatch(Event::Mounted);
        workflow.dispatch(Event::ModeSelected(AnalysisMode::KeywordMatch));
        assert_eq!(workflow.in_flight(), 2);

        first.send(roles(&["old_role"])).unwrap();
        assert_eq!(workflow.next_completion().await, Some(false));
        assert!(workflow.state().is_loading_roles());
        assert!(workflow.state().job_roles.is_empty());

        second.send(roles(&["data_scientist"])).unwrap();
        assert_eq!(workflow.next_completion().await, Some(true));
        assert!(!workflow.state().is_loading_roles());
        assert_eq!(workflow.state().job_roles.roles(), ["data_scientist".to_string()]);
        assert!(workflow.is_idle());
    }

    #[tokio::test]
    async fn late_stale_roles_do_not_overwrite_newer_catalog() {
        let service = Arc::new(GatedService::default());
        let first = service.gate_roles();
        let second = service.gate_roles();
        let mut workflow = workflow(AnalysisMode::KeywordMatch, &service);

        workflow.dispatch(Event::Mounted);
        workflow.dispatch(Event::ModeSelected(AnalysisMode::KeywordMatch));

        second.send(roles(&["backend_engineer"])).unwrap();
        assert_eq!(workflow.next_completion().await, Some(true));

        first.send(Err(FetchError::Transport("connection reset".into()))).unwrap();
        assert_eq!(workflow.next_completion().await, Some(false));

        let state = workflow.state();
        assert_eq!(state.job_roles.roles(), ["backend_engineer".to_string()]);
        assert_eq!(state.error_message(), None);
    }

    #[tokio::test]
    async fn input_stays_live_while_analysis_is_in_flight() {
        let service = Arc::new(GatedService::default());
        let analysis = service.gate_analysis();
        let mut workflow = workflow(AnalysisMode::SemanticMatch, &service);

        workflow.dispatch(Event::Mounted);
        assert!(workflow.is_idle());

        workflow.dispatch(Event::FileSelected(pdf()));
        workflow.dispatch(Event::JobDescriptionChanged("Senior Rust engineer".into()));
        workflow.dispatch(Event::Submit);
        assert_eq!(workflow.in_flight(), 1);

        // A second submit while analysing is ignored.
        assert!(!workflow.dispatch(Event::Submit));
        assert_eq!(workflow.in_flight(), 1);

        let catalog = service.gate_roles();
        workflow.dispatch(Event::ModeSelected(AnalysisMode::KeywordMatch));
        assert_eq!(workflow.in_flight(), 2);
        assert!(workflow.state().is_loading_roles());
        assert!(workflow.state().is_analyzing());

        catalog.send(roles(&["data_scientist"])).unwrap();
        assert_eq!(workflow.next_completion().await, Some(true));
        assert!(!workflow.state().is_loading_roles());
        assert!(workflow.state().is_analyzing());

        analysis
            .send(Ok(AnalysisResult::SemanticMatch(SemanticMatch {
                score: 71.0,
                remark: "Reasonable alignment".into(),
            })))
            .unwrap();
        assert_eq!(workflow.next_completion().await, Some(true));

        let state = workflow.state();
        assert!(!state.is_analyzing());
        assert!(render(state, 80, false).contains("Score: 71.00%"));
    }

    #[tokio::test]
    async fn failed_analysis_shows_server_message_and_reenables_submit() {
        let service = Arc::new(GatedService::default());
        let analysis = service.gate_analysis();
        let mut workflow = workflow(AnalysisMode::SemanticMatch, &service);

        workflow.dispatch(Event::FileSelected(pdf()));
        workflow.dispatch(Event::JobDescriptionChanged("Data engineer".into()));
        workflow.dispatch(Event::Submit);

        analysis
            .send(Err(FetchError::Rejected("Could not extract text from PDF".into())))
            .unwrap();
        workflow.settle().await;

        let state = workflow.state();
        assert!(!state.is_analyzing());
        assert_eq!(state.error_message(), Some("Could not extract text from PDF"));

        let screen = render(state, 80, false);
        assert!(screen.contains("Could not extract text from PDF"));
        assert!(screen.contains("Analyze Resume"));
    }

    #[tokio::test]
    async fn rejected_submit_sends_nothing() {
        let service = Arc::new(GatedService::default());
        let mut workflow = workflow(AnalysisMode::SemanticMatch, &service);

        workflow.dispatch(Event::FileSelected(pdf()));
        workflow.dispatch(Event::JobDescriptionChanged("   ".into()));
        workflow.dispatch(Event::Submit);

        assert!(workflow.is_idle());
        assert_eq!(workflow.next_completion().await, None);
        assert_eq!(workflow.state().error_message(), Some("Please enter job description."));
    }
}
