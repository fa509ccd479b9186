//! View model types representing renderable UI state.
//!
//! View models are computed from application state and contain display-ready
//! data only: labels are resolved, scores are formatted and empty sections are
//! already dropped. The renderer never looks at domain types.
//!
//! [`ResultView::from_result`] is the pure projection of an
//! [`AnalysisResult`] into its displayable form.
//!
//! # Example
//!
//! ```rust
//! use resume_analyzer::domain::{AnalysisResult, SemanticMatch};
//! use resume_analyzer::ui::viewmodel::ResultView;
//!
//! let result = AnalysisResult::SemanticMatch(SemanticMatch {
//!     score: 71.0,
//!     remark: "Reasonable alignment".to_string(),
//! });
//! let view = ResultView::from_result(&result);
//! assert_eq!(view.score, "71.00%");
//! assert!(view.matched.is_none());
//! ```

use crate::domain::AnalysisResult;
use crate::ui::helpers::strip_control;

/// Complete UI view model for rendering the analysis form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Resume upload field.
    pub file: FileField,

    /// Method selector, one entry per mode.
    pub modes: Vec<ModeOption>,

    /// Role picker or job description, depending on the active mode.
    pub target: TargetField,

    /// Error banner, shown only while an error is set.
    pub error: Option<ErrorBannerInfo>,

    /// Submit button.
    pub submit: SubmitButton,

    /// Latest successful result, if any.
    pub result: Option<ResultView>,

    /// Command hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Resume upload field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileField {
    /// Name of the selected file, `None` until a PDF is accepted.
    pub file_name: Option<String>,

    /// Human-readable file size.
    pub size: Option<String>,
}

/// One entry of the method selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeOption {
    /// Method label (`TF-IDF`, `Semantic`).
    pub label: &'static str,

    /// Identifier accepted by the `mode` command.
    pub wire_id: &'static str,

    /// Whether this is the active mode.
    pub active: bool,
}

/// Mode-dependent secondary input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetField {
    /// Job-role selection (keyword matching).
    RolePicker(RolePicker),

    /// Job description entry (semantic matching).
    Description(DescriptionField),
}

/// Job-role picker state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePicker {
    /// Whether a catalog request is in flight.
    pub loading: bool,

    /// Currently selected role, `None` while nothing is chosen.
    pub selected: Option<String>,

    /// Visible catalog entries.
    pub options: Vec<RoleOption>,

    /// Catalog entries not shown because the list was cut short.
    pub hidden_count: usize,
}

/// One catalog entry in the role picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleOption {
    /// 1-based position, accepted by the `role` command.
    pub index: usize,

    /// Role identifier.
    pub name: String,

    /// Whether this entry is the current selection.
    pub is_selected: bool,
}

/// Job description field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionField {
    /// First line of the description, shortened, `None` when blank.
    pub preview: Option<String>,

    /// Length of the full description in characters.
    pub char_count: usize,
}

/// Error banner contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBannerInfo {
    /// Message to display.
    pub message: String,
}

/// Submit button state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    /// Button caption.
    pub label: &'static str,

    /// `false` while an analysis is in flight.
    pub enabled: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command hints for the active mode.
    pub keybindings: String,
}

/// Displayable form of an analysis result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// Method label (`TF-IDF` or `Semantic`).
    pub method_label: &'static str,

    /// Score with exactly two decimals and a percent suffix.
    pub score: String,

    /// Remark text with control characters removed.
    pub remark: String,

    /// Matched keyword badges, only for non-empty keyword results.
    pub matched: Option<KeywordSection>,

    /// Missing keyword badges, only for non-empty keyword results.
    pub missing: Option<KeywordSection>,
}

/// A titled set of keyword badges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSection {
    /// Section title.
    pub title: &'static str,

    /// Keywords in server order, one badge each.
    pub keywords: Vec<String>,
}

/// Caption of the score line.
pub const SCORE_LABEL: &str = "Score";

/// Caption of the remark line.
pub const REMARK_LABEL: &str = "AI Remark";

/// Title of the matched keyword section.
pub const MATCHED_TITLE: &str = "Matched Keywords";

/// Title of the missing keyword section.
pub const MISSING_TITLE: &str = "Missing Keywords";

impl ResultView {
    /// Projects an analysis result into its display form.
    ///
    /// Keyword sections are produced only for keyword results and only when
    /// the respective list is non-empty. Semantic results never carry them.
    /// Server text is passed through [`strip_control`] so it cannot emit
    /// terminal escapes.
    #[must_use]
    pub fn from_result(result: &AnalysisResult) -> Self {
        let (matched, missing) = match result {
            AnalysisResult::KeywordMatch(m) => (
                KeywordSection::non_empty(MATCHED_TITLE, &m.matched_keywords),
                KeywordSection::non_empty(MISSING_TITLE, &m.missing_keywords),
            ),
            AnalysisResult::SemanticMatch(_) => (None, None),
        };

        Self {
            method_label: result.mode().label(),
            score: format_score(result.score()),
            remark: strip_control(result.remark()),
            matched,
            missing,
        }
    }
}

impl KeywordSection {
    fn non_empty(title: &'static str, keywords: &[String]) -> Option<Self> {
        (!keywords.is_empty()).then(|| Self {
            title,
            keywords: keywords.iter().map(|k| strip_control(k)).collect(),
        })
    }
}

/// Formats a score with exactly two decimal places and a percent suffix.
///
/// Exact binary ties round to even, so `0.125` gives `0.12%`. Scores that
/// are not exact ties round to nearest.
///
/// ```
/// use resume_analyzer::ui::viewmodel::format_score;
///
/// assert_eq!(format_score(82.456), "82.46%");
/// assert_eq!(format_score(71.0), "71.00%");
/// ```
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.2}%")
}

/// Formats a byte count for the upload field.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let value = bytes as f64;
    if value >= MB {
        format!("{:.1} MB", value / MB)
    } else if value >= KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{KeywordMatch, SemanticMatch};

    #[test]
    fn keyword_result_keeps_badge_order() {
        let result = AnalysisResult::KeywordMatch(KeywordMatch {
            score: 82.456,
            remark: "Good fit".into(),
            matched_keywords: vec!["python".into()],
            missing_keywords: vec!["docker".into(), "kubernetes".into()],
        });

        let view = ResultView::from_result(&result);
        assert_eq!(view.method_label, "TF-IDF");
        assert_eq!(view.score, "82.46%");
        assert_eq!(view.remark, "Good fit");
        assert_eq!(view.matched.unwrap().keywords, vec!["python".to_string()]);
        assert_eq!(
            view.missing.unwrap().keywords,
            vec!["docker".to_string(), "kubernetes".to_string()]
        );
    }

    #[test]
    fn empty_keyword_lists_have_no_section() {
        let result = AnalysisResult::KeywordMatch(KeywordMatch {
            score: 100.0,
            remark: "Perfect".into(),
            matched_keywords: vec!["rust".into()],
            missing_keywords: vec![],
        });

        let view = ResultView::from_result(&result);
        assert!(view.matched.is_some());
        assert!(view.missing.is_none());
    }

    #[test]
    fn semantic_result_has_no_keyword_sections() {
        let result = AnalysisResult::SemanticMatch(SemanticMatch {
            score: 71.0,
            remark: "Reasonable alignment".into(),
        });

        let view = ResultView::from_result(&result);
        assert_eq!(view.method_label, "Semantic");
        assert_eq!(view.score, "71.00%");
        assert!(view.matched.is_none());
        assert!(view.missing.is_none());
    }

    #[test]
    fn server_text_loses_control_characters() {
        let result = AnalysisResult::KeywordMatch(KeywordMatch {
            score: 50.0,
            remark: "ok\u{1b}]0;pwned\u{7}\u{1b}[2J".into(),
            matched_keywords: vec!["py\u{1b}[31mthon".into()],
            missing_keywords: vec!["dock\u{9b}er".into()],
        });

        let view = ResultView::from_result(&result);
        assert_eq!(view.remark, "ok]0;pwned[2J");
        assert_eq!(view.matched.unwrap().keywords, vec!["py[31mthon".to_string()]);
        assert_eq!(view.missing.unwrap().keywords, vec!["docker".to_string()]);
    }

    #[test]
    fn scores_round_ties_to_even() {
        assert_eq!(format_score(0.125), "0.12%");
        assert_eq!(format_score(0.375), "0.38%");
        assert_eq!(format_score(82.456), "82.46%");
        assert_eq!(format_score(100.0), "100.00%");
    }

    #[test]
    fn sizes_are_human_readable() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
