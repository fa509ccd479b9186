//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `FormViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! The output is a string rather than direct terminal writes, so the front
//! end decides where it goes and tests can inspect it.
//!
//! # Example
//!
//! ```rust
//! use resume_analyzer::app::AppState;
//! use resume_analyzer::domain::AnalysisMode;
//! use resume_analyzer::ui::{render, Theme};
//!
//! let state = AppState::new(AnalysisMode::SemanticMatch, Theme::default());
//! let screen = render(&state, 80, false);
//! assert!(screen.contains("Analyze Resume"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::strip_ansi;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormViewModel, ResultView};

/// Narrowest layout the components are laid out for.
pub const MIN_COLS: usize = 40;

/// Renders the form for `state` at `cols` columns.
///
/// With `color` off, every escape sequence is stripped from the output.
#[must_use]
pub fn render(state: &AppState, cols: usize, color: bool) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.theme, cols, color)
}

/// Renders a precomputed view model.
#[must_use]
pub fn render_viewmodel(vm: &FormViewModel, theme: &Theme, cols: usize, color: bool) -> String {
    let lines = components::render_form_layout(vm, theme, cols.max(MIN_COLS));
    finish(&lines, color)
}

/// Renders only the results panel, for one-shot output.
#[must_use]
pub fn render_result(result: &ResultView, theme: &Theme, cols: usize, color: bool) -> String {
    let mut lines = Vec::new();
    components::results::render_results(&mut lines, result, theme, cols.max(MIN_COLS));
    finish(&lines, color)
}

fn finish(lines: &[String], color: bool) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    if color {
        out
    } else {
        strip_ansi(&out)
    }
}
