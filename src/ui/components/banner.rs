//! Error banner renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::ErrorBannerInfo;

/// Marker printed before the error message.
pub const ERROR_MARKER: &str = "✖";

/// Renders the error banner.
///
/// The message is never shortened; server detail can be long and the
/// terminal wraps it.
pub fn render_error_banner(lines: &mut Vec<String>, banner: &ErrorBannerInfo, theme: &Theme) {
    let message = &banner.message;

    let mut line = String::new();
    if let Some(bg) = &theme.colors.error_bg {
        line.push_str(&Theme::bg(bg));
    }
    line.push_str(&Theme::fg(&theme.colors.error_fg));
    line.push_str(Theme::bold());
    line.push_str(&format!(" {ERROR_MARKER} {message}"));
    line.push_str(Theme::reset());

    lines.push(line);
}
