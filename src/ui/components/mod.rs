//! Composable UI component renderers.
//!
//! Each component appends the lines for one part of the form to a shared
//! buffer. Widths are measured on visible characters; escape sequences are
//! free.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`form`]: Upload, method, role picker or job description, submit button
//! - [`banner`]: Error banner
//! - [`results`]: Score, remark and keyword badges
//! - [`footer`]: Command hints
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Form fields]
//! [Error banner, if any]
//! [Submit button]
//! [Border + Results, if any]
//! [Border]
//! [Footer]
//! ```

pub mod banner;
pub mod footer;
pub mod form;
pub mod header;
pub mod results;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormViewModel, TargetField};

/// Appends a horizontal border line.
fn render_border(lines: &mut Vec<String>, color: &str, cols: usize) {
    lines.push(format!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset()));
}

/// Renders the whole form layout.
pub fn render_form_layout(vm: &FormViewModel, theme: &Theme, cols: usize) -> Vec<String> {
    let mut lines = Vec::new();

    header::render_header(&mut lines, &vm.header, theme, cols);
    render_border(&mut lines, &theme.colors.border, cols);

    form::render_file_field(&mut lines, &vm.file, theme, cols);
    form::render_mode_selector(&mut lines, &vm.modes, theme);
    match &vm.target {
        TargetField::RolePicker(picker) => form::render_role_picker(&mut lines, picker, theme, cols),
        TargetField::Description(field) => form::render_description(&mut lines, field, theme, cols),
    }

    lines.push(String::new());
    if let Some(error) = &vm.error {
        banner::render_error_banner(&mut lines, error, theme);
    }
    form::render_submit(&mut lines, &vm.submit, theme);

    if let Some(result) = &vm.result {
        render_border(&mut lines, &theme.colors.border, cols);
        results::render_results(&mut lines, result, theme, cols);
    }

    render_border(&mut lines, &theme.colors.border, cols);
    footer::render_footer(&mut lines, &vm.footer, theme, cols);

    lines
}
