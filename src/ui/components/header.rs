//! Header component renderer.
//!
//! Renders the title bar with centered bold text and theme colors.

use crate::ui::helpers::centered_padding;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar.
///
/// The title is centered and the line is padded to the full terminal width
/// so an optional background fills the row.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding]
/// ```
pub fn render_header(lines: &mut Vec<String>, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let title_len = header.title.chars().count();
    let (left, right) = centered_padding(title_len, cols);

    let mut line = String::new();
    line.push_str(Theme::bold());
    line.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        line.push_str(&Theme::bg(bg));
    }
    line.push_str(&" ".repeat(left));
    line.push_str(&header.title);
    line.push_str(&" ".repeat(right));
    line.push_str(Theme::reset());

    lines.push(line);
}
