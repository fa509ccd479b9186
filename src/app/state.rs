//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for the
//! analysis form: the uploaded resume, the chosen mode and its secondary
//! input, the job-role catalog, the latest result, the error banner and the
//! two loading flags.
//!
//! # State Components
//!
//! - **Inputs**: file, mode, selected role, job description
//! - **Catalog**: job roles fetched from the backend
//! - **Outputs**: latest successful result and the error banner
//! - **Loading flags**: one per operation, tied to the latest request id
//!
//! # Validation Policy
//!
//! [`AppState::set_file`] rejects non-PDF files before they reach the state.
//! [`AppState::validate_submission`] checks, in order, that a file is
//! present, that keyword mode has a role and that semantic mode has a
//! non-blank description. The first failing check wins.
//!
//! # Example
//!
//! ```rust
//! use resume_analyzer::app::AppState;
//! use resume_analyzer::domain::{UploadedFile, ValidationError};
//! use resume_analyzer::ui::Theme;
//!
//! let mut state = AppState::new(Default::default(), Theme::default());
//! assert_eq!(state.validate_submission(), Err(ValidationError::MissingFile));
//!
//! state.set_file(UploadedFile::new("cv.pdf", "application/pdf", vec![1])).unwrap();
//! assert_eq!(state.validate_submission(), Err(ValidationError::MissingJobRole));
//! ```

use crate::domain::{
    AnalysisMode, AnalysisResult, AnalysisSubmission, AnalysisTarget, JobRoleCatalog, UploadedFile,
    ValidationError,
};
use crate::fetch::{LoadingFlag, RequestId};
use crate::ui::helpers::strip_control;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DescriptionField, ErrorBannerInfo, FileField, FooterInfo, FormViewModel, HeaderInfo, ModeOption,
    ResultView, RoleOption, RolePicker, SubmitButton, TargetField,
};

/// Title shown in the header.
pub const APP_TITLE: &str = "Resume Analyzer";

/// Submit caption while idle.
pub const SUBMIT_LABEL: &str = "Analyze Resume";

/// Submit caption while an analysis is in flight.
pub const SUBMITTING_LABEL: &str = "Analyzing...";

const MAX_VISIBLE_ROLES: usize = 12;
const DESCRIPTION_PREVIEW_CHARS: usize = 60;

/// Operation that set the current error banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSource {
    /// File or submission validation.
    Input,
    /// Job-role catalog request.
    JobRoles,
    /// Analysis request.
    Analysis,
}

/// The single error slot shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    /// Message to display.
    pub message: String,
    /// Operation that produced it.
    pub source: ErrorSource,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Accepted resume, `None` until a PDF is selected.
    pub file: Option<UploadedFile>,

    /// Active comparison method.
    pub mode: AnalysisMode,

    /// Job roles fetched from the backend.
    pub job_roles: JobRoleCatalog,

    /// Selected role; empty means none. Not checked against the catalog.
    pub selected_job_role: String,

    /// Pasted job description; may be blank.
    pub job_description: String,

    /// Latest successful analysis.
    pub result: Option<AnalysisResult>,

    /// Current error banner.
    pub error: Option<ErrorBanner>,

    /// In-flight marker for the job-role catalog request.
    pub roles_request: LoadingFlag,

    /// In-flight marker for the analysis request.
    pub analysis_request: LoadingFlag,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    next_request_id: u64,
}

impl AppState {
    /// Creates an empty form in the given mode.
    #[must_use]
    pub fn new(mode: AnalysisMode, theme: Theme) -> Self {
        Self {
            file: None,
            mode,
            job_roles: JobRoleCatalog::default(),
            selected_job_role: String::new(),
            job_description: String::new(),
            result: None,
            error: None,
            roles_request: LoadingFlag::default(),
            analysis_request: LoadingFlag::default(),
            theme,
            next_request_id: 0,
        }
    }

    /// Accepts a candidate resume.
    ///
    /// A file whose media type is not exactly `application/pdf` is rejected:
    /// the error banner is set and the previously accepted file stays. An
    /// accepted file replaces the previous one and clears the banner.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotPdf`] for non-PDF candidates.
    pub fn set_file(&mut self, candidate: UploadedFile) -> Result<(), ValidationError> {
        if !candidate.is_pdf() {
            let err = ValidationError::NotPdf {
                media_type: candidate.media_type.clone(),
            };
            tracing::debug!(file_name = %candidate.name, media_type = %candidate.media_type, "file rejected");
            self.set_error(ErrorSource::Input, err.to_string());
            return Err(err);
        }

        tracing::debug!(file_name = %candidate.name, size = candidate.size(), "file accepted");
        self.file = Some(candidate);
        self.clear_error();
        Ok(())
    }

    /// Checks the inputs and builds a submission.
    ///
    /// The result is only inspected, never stored; the caller decides what to
    /// do with a failure.
    ///
    /// # Errors
    ///
    /// Returns the first failing check: [`ValidationError::MissingFile`],
    /// [`ValidationError::MissingJobRole`] or
    /// [`ValidationError::MissingJobDescription`].
    pub fn validate_submission(&self) -> Result<AnalysisSubmission, ValidationError> {
        let file = self.file.as_ref().ok_or(ValidationError::MissingFile)?;

        let target = match self.mode {
            AnalysisMode::KeywordMatch => {
                if self.selected_job_role.trim().is_empty() {
                    return Err(ValidationError::MissingJobRole);
                }
                AnalysisTarget::JobRole(self.selected_job_role.clone())
            }
            AnalysisMode::SemanticMatch => {
                if self.job_description.trim().is_empty() {
                    return Err(ValidationError::MissingJobDescription);
                }
                AnalysisTarget::JobDescription(self.job_description.clone())
            }
        };

        Ok(AnalysisSubmission {
            file: file.clone(),
            target,
        })
    }

    /// Sets the error banner, replacing any previous message.
    pub fn set_error(&mut self, source: ErrorSource, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(source = ?source, message = %message, "error banner set");
        self.error = Some(ErrorBanner { message, source });
    }

    /// Clears the error banner whatever set it.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Clears the error banner only if `source` set it.
    pub fn clear_error_from(&mut self, source: ErrorSource) {
        if self.error.as_ref().is_some_and(|e| e.source == source) {
            self.error = None;
        }
    }

    /// Current error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }

    /// Returns `true` while the latest job-role request is outstanding.
    #[must_use]
    pub const fn is_loading_roles(&self) -> bool {
        self.roles_request.is_loading()
    }

    /// Returns `true` while the latest analysis request is outstanding.
    #[must_use]
    pub const fn is_analyzing(&self) -> bool {
        self.analysis_request.is_loading()
    }

    /// Allocates the next request identifier.
    pub fn next_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        RequestId(self.next_request_id)
    }

    /// Computes a renderable view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> FormViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", mode = %self.mode).entered();

        FormViewModel {
            header: HeaderInfo {
                title: APP_TITLE.to_string(),
            },
            file: self.compute_file_field(),
            modes: AnalysisMode::ALL
                .iter()
                .map(|&mode| ModeOption {
                    label: mode.label(),
                    wire_id: mode.wire_id(),
                    active: mode == self.mode,
                })
                .collect(),
            target: match self.mode {
                AnalysisMode::KeywordMatch => TargetField::RolePicker(self.compute_role_picker()),
                AnalysisMode::SemanticMatch => TargetField::Description(self.compute_description()),
            },
            error: self.error.as_ref().map(|e| ErrorBannerInfo {
                message: strip_control(&e.message),
            }),
            submit: if self.is_analyzing() {
                SubmitButton {
                    label: SUBMITTING_LABEL,
                    enabled: false,
                }
            } else {
                SubmitButton {
                    label: SUBMIT_LABEL,
                    enabled: true,
                }
            },
            result: self.result.as_ref().map(ResultView::from_result),
            footer: self.compute_footer(),
        }
    }

    fn compute_file_field(&self) -> FileField {
        FileField {
            file_name: self.file.as_ref().map(|f| f.name.clone()),
            size: self
                .file
                .as_ref()
                .map(|f| crate::ui::viewmodel::format_size(f.size())),
        }
    }

    /// Shows the catalog around the selected entry, cut to a fixed height.
    fn compute_role_picker(&self) -> RolePicker {
        let roles = self.job_roles.roles();
        let selected_index = roles.iter().position(|r| *r == self.selected_job_role);

        let visible_start = selected_index
            .map_or(0, |i| i.saturating_sub(MAX_VISIBLE_ROLES / 2))
            .min(roles.len().saturating_sub(MAX_VISIBLE_ROLES));
        let visible_end = (visible_start + MAX_VISIBLE_ROLES).min(roles.len());

        let options = roles[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, name)| RoleOption {
                index: visible_start + relative_idx + 1,
                name: strip_control(name),
                is_selected: *name == self.selected_job_role,
            })
            .collect();

        RolePicker {
            loading: self.is_loading_roles(),
            selected: (!self.selected_job_role.is_empty())
                .then(|| strip_control(&self.selected_job_role)),
            options,
            hidden_count: roles.len() - (visible_end - visible_start),
        }
    }

    fn compute_description(&self) -> DescriptionField {
        let trimmed = self.job_description.trim();
        let preview = trimmed.lines().next().filter(|line| !line.is_empty()).map(|line| {
            if line.chars().count() > DESCRIPTION_PREVIEW_CHARS {
                let cut: String = line.chars().take(DESCRIPTION_PREVIEW_CHARS - 3).collect();
                format!("{cut}...")
            } else {
                line.to_string()
            }
        });

        DescriptionField {
            preview,
            char_count: self.job_description.chars().count(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.mode {
            AnalysisMode::KeywordMatch => {
                "file <path>  role <n|name>  roles [filter]  mode semantic  submit  help  quit"
            }
            AnalysisMode::SemanticMatch => {
                "file <path>  jd <text>  jd-file <path>  mode tfidf  submit  help  quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
