//! Footer component renderer.
//!
//! Renders the command hints centered and dimmed.

use crate::ui::helpers::{centered_padding, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar.
///
/// Hints wider than the terminal are truncated so the line never wraps.
pub fn render_footer(lines: &mut Vec<String>, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let help_text = truncate(&footer.keybindings, cols);
    let (left, _) = centered_padding(help_text.chars().count(), cols);

    lines.push(format!(
        "{}{}{help_text}{}",
        Theme::fg(&theme.colors.text_dim),
        " ".repeat(left),
        Theme::reset()
    ));
}
