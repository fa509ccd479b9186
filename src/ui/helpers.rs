//! Shared rendering utilities.
//!
//! Components build lines that mix text with ANSI escape sequences, so width
//! calculations must skip the escapes. These helpers measure, strip, pad and
//! wrap such lines. All widths are counted in characters.

/// Removes ANSI CSI escape sequences from `text`.
///
/// ```rust
/// use resume_analyzer::ui::helpers::strip_ansi;
///
/// assert_eq!(strip_ansi("\u{1b}[1mScore\u{1b}[0m: 71.00%"), "Score: 71.00%");
/// ```
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters run until the final byte in '@'..='~'.
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Removes C0 and C1 control characters from untrusted `text`.
///
/// Line breaks and tabs become single spaces so the text stays on one row.
/// Printable parts of a dropped escape sequence are kept as plain text.
///
/// ```rust
/// use resume_analyzer::ui::helpers::strip_control;
///
/// assert_eq!(strip_control("ok\u{1b}[2J\u{7}"), "ok[2J");
/// ```
#[must_use]
pub fn strip_control(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Number of visible characters in `text`, ignoring escape sequences.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    strip_ansi(text).chars().count()
}

/// Shortens plain `text` to at most `max` characters, marking the cut with `...`.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return ".".repeat(max);
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Left and right padding that centers `width` visible characters in `cols`.
///
/// When the space cannot be split evenly the right side gets the extra column.
#[must_use]
pub const fn centered_padding(width: usize, cols: usize) -> (usize, usize) {
    let free = cols.saturating_sub(width);
    let left = free / 2;
    (left, free - left)
}

/// Packs styled chips into lines no wider than `cols`.
///
/// Each item is `(styled, visible_width)`. Lines start with `indent` spaces
/// and chips are separated by one space. A chip wider than a line gets a
/// line of its own.
#[must_use]
pub fn wrap_chips(items: &[(String, usize)], indent: usize, cols: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = " ".repeat(indent);
    let mut width = indent;

    for (chip, chip_width) in items {
        let needed = if width > indent { chip_width + 1 } else { *chip_width };
        if width > indent && width + needed > cols {
            lines.push(std::mem::replace(&mut line, " ".repeat(indent)));
            width = indent;
        }
        if width > indent {
            line.push(' ');
            width += 1;
        }
        line.push_str(chip);
        width += chip_width;
    }

    if width > indent {
        lines.push(line);
    }
    lines
}
