//! Results panel renderer.
//!
//! Shows the method label, the formatted score and the remark, followed by
//! the keyword badge sections when the view model carries them.

use crate::ui::helpers::wrap_chips;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{KeywordSection, ResultView, REMARK_LABEL, SCORE_LABEL};

/// Title of the results panel.
pub const RESULTS_TITLE: &str = "Results";

/// Renders the results panel.
pub fn render_results(lines: &mut Vec<String>, result: &ResultView, theme: &Theme, cols: usize) {
    lines.push(format!(
        " {}{}{RESULTS_TITLE}{} {}({}){}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        Theme::reset(),
        Theme::fg(&theme.colors.text_dim),
        result.method_label,
        Theme::reset()
    ));
    lines.push(format!(
        " {}{SCORE_LABEL}:{} {}{}{}{}",
        Theme::bold(),
        Theme::reset(),
        Theme::bold(),
        Theme::fg(&theme.colors.score_fg),
        result.score,
        Theme::reset()
    ));
    lines.push(format!(
        " {}{REMARK_LABEL}:{} {}{}{}",
        Theme::bold(),
        Theme::reset(),
        Theme::fg(&theme.colors.text_normal),
        result.remark,
        Theme::reset()
    ));

    if let Some(section) = &result.matched {
        render_badges(lines, section, &theme.colors.matched_fg, &theme.colors.matched_bg, cols);
    }
    if let Some(section) = &result.missing {
        render_badges(lines, section, &theme.colors.missing_fg, &theme.colors.missing_bg, cols);
    }
}

/// Renders one keyword section, one chip per keyword, wrapped to width.
fn render_badges(lines: &mut Vec<String>, section: &KeywordSection, fg: &str, bg: &str, cols: usize) {
    lines.push(format!(" {}{}:{}", Theme::bold(), section.title, Theme::reset()));

    let chips: Vec<(String, usize)> = section
        .keywords
        .iter()
        .map(|keyword| {
            let styled = format!("{}{} {keyword} {}", Theme::fg(fg), Theme::bg(bg), Theme::reset());
            (styled, keyword.chars().count() + 2)
        })
        .collect();

    lines.extend(wrap_chips(&chips, 2, cols));
}
