//! Form field renderers: resume upload, method selector, role picker, job
//! description and submit button.
//!
//! Every field is a label column followed by its value:
//!
//! ```text
//!  Upload Resume (PDF)      ✔ cv.pdf (12.0 KB)
//!  Select Analysis Method   (•) TF-IDF   ( ) Semantic
//!  Select Job Role          Loading job roles...
//! ```

use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DescriptionField, FileField, ModeOption, RolePicker, SubmitButton};

const LABEL_WIDTH: usize = 24;

/// Label of the upload field.
pub const FILE_LABEL: &str = "Upload Resume (PDF)";
/// Label of the method selector.
pub const MODE_LABEL: &str = "Select Analysis Method";
/// Label of the role picker.
pub const ROLE_LABEL: &str = "Select Job Role";
/// Label of the job description field.
pub const DESCRIPTION_LABEL: &str = "Paste Job Description";
/// Shown in the role picker while the catalog loads.
pub const LOADING_ROLES_TEXT: &str = "Loading job roles...";

fn label(text: &str, theme: &Theme) -> String {
    format!(
        " {}{}{text:<LABEL_WIDTH$}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.label_fg),
        Theme::reset()
    )
}

fn dim(text: &str, theme: &Theme) -> String {
    format!("{}{text}{}", Theme::fg(&theme.colors.text_dim), Theme::reset())
}

/// Renders the upload field.
pub fn render_file_field(lines: &mut Vec<String>, file: &FileField, theme: &Theme, cols: usize) {
    let value_width = cols.saturating_sub(LABEL_WIDTH + 4);

    let value = match (&file.file_name, &file.size) {
        (Some(name), size) => {
            let size = size.as_ref().map(|s| format!(" ({s})")).unwrap_or_default();
            format!(
                "{}✔ {}{}{}",
                Theme::fg(&theme.colors.matched_bg),
                truncate(name, value_width.saturating_sub(size.len() + 2)),
                Theme::reset(),
                dim(&size, theme)
            )
        }
        (None, _) => dim("No file selected (file <path>)", theme),
    };

    lines.push(format!("{}{value}", label(FILE_LABEL, theme)));
}

/// Renders the method selector as radio buttons.
pub fn render_mode_selector(lines: &mut Vec<String>, modes: &[ModeOption], theme: &Theme) {
    let options: Vec<String> = modes
        .iter()
        .map(|mode| {
            if mode.active {
                format!(
                    "{}{}(•) {}{}",
                    Theme::bold(),
                    Theme::fg(&theme.colors.accent_fg),
                    mode.label,
                    Theme::reset()
                )
            } else {
                format!("{}( ) {}{}", Theme::fg(&theme.colors.text_normal), mode.label, Theme::reset())
            }
        })
        .collect();

    lines.push(format!("{}{}", label(MODE_LABEL, theme), options.join("   ")));
}

/// Renders the role picker.
///
/// While the catalog loads only the loading text is shown. Otherwise the
/// current choice comes first, followed by the numbered catalog entries.
pub fn render_role_picker(lines: &mut Vec<String>, picker: &RolePicker, theme: &Theme, cols: usize) {
    if picker.loading {
        lines.push(format!("{}{}", label(ROLE_LABEL, theme), dim(LOADING_ROLES_TEXT, theme)));
        return;
    }

    let current = picker.selected.as_deref().map_or_else(
        || dim("-- Choose Role --", theme),
        |role| {
            format!(
                "{}{}{role}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.accent_fg),
                Theme::reset()
            )
        },
    );
    lines.push(format!("{}{current}", label(ROLE_LABEL, theme)));

    let indent = " ".repeat(LABEL_WIDTH + 1);
    let name_width = cols.saturating_sub(LABEL_WIDTH + 8);

    for option in &picker.options {
        let name = truncate(&option.name, name_width);
        if option.is_selected {
            lines.push(format!(
                "{indent}{}{}{:>3}. {name}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.accent_fg),
                option.index,
                Theme::reset()
            ));
        } else {
            lines.push(format!(
                "{indent}{}{:>3}.{} {name}",
                Theme::fg(&theme.colors.text_dim),
                option.index,
                Theme::reset()
            ));
        }
    }

    if picker.hidden_count > 0 {
        lines.push(format!(
            "{indent}{}",
            dim(&format!("     ... {} more (roles <filter>)", picker.hidden_count), theme)
        ));
    }
}

/// Renders the job description preview.
pub fn render_description(lines: &mut Vec<String>, field: &DescriptionField, theme: &Theme, cols: usize) {
    let value = match &field.preview {
        Some(preview) => {
            let count = format!(" ({} chars)", field.char_count);
            let preview = truncate(preview, cols.saturating_sub(LABEL_WIDTH + 4 + count.len()));
            format!(
                "{}{preview}{}{}",
                Theme::fg(&theme.colors.text_normal),
                Theme::reset(),
                dim(&count, theme)
            )
        }
        None => dim("Paste the job description here... (jd <text>)", theme),
    };

    lines.push(format!("{}{value}", label(DESCRIPTION_LABEL, theme)));
}

/// Renders the submit button.
pub fn render_submit(lines: &mut Vec<String>, submit: &SubmitButton, theme: &Theme) {
    let bg = if submit.enabled {
        &theme.colors.button_bg
    } else {
        &theme.colors.button_busy_bg
    };

    lines.push(format!(
        " {}{}{}  {}  {}",
        Theme::bold(),
        Theme::fg(&theme.colors.button_fg),
        Theme::bg(bg),
        submit.label,
        Theme::reset()
    ));
}
