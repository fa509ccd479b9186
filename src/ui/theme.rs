//! Color themes for the analysis form and the 24-bit ANSI escapes built
//! from them.
//!
//! Two Catppuccin palettes ship with the binary: `catppuccin-mocha` (dark,
//! the default) and `catppuccin-latte` (light). A custom theme is a TOML
//! file with a name and a `[colors]` table; `header_bg` and `error_bg` are
//! optional:
//!
//! ```toml
//! name = "office"
//!
//! [colors]
//! header_fg = "#cba6f7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! label_fg = "#89b4fa"
//! border = "#45475a"
//! accent_fg = "#f5c2e7"
//! button_fg = "#1e1e2e"
//! button_bg = "#89b4fa"
//! button_busy_bg = "#6c7086"
//! error_fg = "#f38ba8"
//! score_fg = "#f9e2af"
//! matched_fg = "#1e1e2e"
//! matched_bg = "#a6e3a1"
//! missing_fg = "#1e1e2e"
//! missing_bg = "#f38ba8"
//! ```
//!
//! # Example
//!
//! ```rust
//! use resume_analyzer::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}Score{}", Theme::fg(&theme.colors.score_fg), Theme::reset());
//! ```

use crate::domain::error::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// A named color palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Colors of every form element, as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title bar text.
    pub header_fg: String,
    /// Title bar background, if any.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Body text.
    pub text_normal: String,
    /// Dimmed text color (footer, placeholders).
    pub text_dim: String,
    /// Field label color.
    pub label_fg: String,

    /// Rules above and below the form.
    pub border: String,
    /// Active mode and selected role marker color.
    pub accent_fg: String,

    /// Submit button text color.
    pub button_fg: String,
    /// Submit button background while idle.
    pub button_bg: String,
    /// Submit button background while an analysis is in flight.
    pub button_busy_bg: String,

    /// Error banner text color.
    pub error_fg: String,
    /// Optional error banner background color.
    #[serde(default)]
    pub error_bg: Option<String>,

    /// Score value color.
    pub score_fg: String,

    /// Matched keyword badge foreground.
    pub matched_fg: String,
    /// Matched keyword badge background.
    pub matched_bg: String,
    /// Missing keyword badge foreground.
    pub missing_fg: String,
    /// Missing keyword badge background.
    pub missing_bg: String,
}

/// Built-in themes, compiled into the binary.
const BUILTIN_THEMES: [(&str, &str); 2] = [
    ("catppuccin-mocha", include_str!("../../themes/catppuccin-mocha.toml")),
    ("catppuccin-latte", include_str!("../../themes/catppuccin-latte.toml")),
];

impl Theme {
    /// Looks up a built-in theme. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTIN_THEMES
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .and_then(|(_, source)| toml::from_str(source).ok())
    }

    /// Reads a custom theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Theme`] if the file is unreadable or does not
    /// define every required color.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| AnalyzerError::Theme(format!("cannot read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| AnalyzerError::Theme(format!("invalid theme {}: {e}", path.display())))
    }

    /// Resolves the configured theme.
    ///
    /// A theme file wins over a theme name; with neither, the default theme
    /// is used.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Theme`] if the file cannot be loaded or the
    /// name is not a built-in theme.
    pub fn resolve(name: Option<&str>, file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            return Self::from_file(path);
        }

        match name {
            Some(name) => Self::from_name(name).ok_or_else(|| {
                let known: Vec<&str> = BUILTIN_THEMES.iter().map(|(n, _)| *n).collect();
                AnalyzerError::Theme(format!("unknown theme `{name}` (built-in: {})", known.join(", ")))
            }),
            None => Ok(Self::default()),
        }
    }

    fn rgb(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim();
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return None;
        }

        let channel = |at: usize| {
            digits
                .get(at..at + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };
        Some((channel(0)?, channel(2)?, channel(4)?))
    }

    /// 24-bit color escape; `layer` is 38 for foreground, 48 for background.
    fn color_escape(layer: u8, hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex).unwrap_or((255, 255, 255));
        format!("\u{1b}[{layer};2;{r};{g};{b}m")
    }

    /// Foreground escape for a `#rrggbb` color. Unparseable colors render white.
    ///
    /// ```rust
    /// use resume_analyzer::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        Self::color_escape(38, hex)
    }

    /// Background escape for a `#rrggbb` color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        Self::color_escape(48, hex)
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    /// Clears every attribute set by the other escapes.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the theme tests
    /// rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in ["catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#12345g"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("00ff00"), "\u{1b}[48;2;0;255;0m");
    }

    #[test]
    fn theme_file_overrides_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = include_str!("../../themes/catppuccin-latte.toml").replace("catppuccin-latte", "custom");
        file.write_all(custom.as_bytes()).unwrap();

        let theme = Theme::resolve(Some("catppuccin-mocha"), Some(file.path())).unwrap();
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn unknown_theme_name_is_an_error() {
        assert!(matches!(Theme::resolve(Some("nope"), None), Err(AnalyzerError::Theme(_))));
        assert_eq!(Theme::resolve(None, None).unwrap().name, DEFAULT_THEME);
    }
}
