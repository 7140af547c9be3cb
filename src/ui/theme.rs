//! Light and dark terminal themes.

use serde::Deserialize;

/// Which palette is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label of the toggle, naming the mode it switches to.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Light => "🌙 Dark Mode",
            Self::Dark => "☀️ Light Mode",
        }
    }

    pub fn theme(self) -> CalcTheme {
        match self {
            Self::Light => CalcTheme::light(),
            Self::Dark => CalcTheme::dark(),
        }
    }
}

/// ANSI styles used when rendering the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalcTheme {
    /// Submitted expression and history text.
    pub expression: &'static str,
    /// Results.
    pub result: &'static str,
    /// Live preview, shown muted.
    pub preview: &'static str,
    /// Errors.
    pub error: &'static str,
    /// Prompt and labels.
    pub accent: &'static str,
}

pub const RESET: &str = "\x1b[0m";

impl CalcTheme {
    pub fn dark() -> Self {
        Self {
            expression: "\x1b[37m",
            result: "\x1b[1;97m",
            preview: "\x1b[90m",
            error: "\x1b[38;5;209m",
            accent: "\x1b[38;5;75m",
        }
    }

    pub fn light() -> Self {
        Self {
            expression: "\x1b[30m",
            result: "\x1b[1;30m",
            preview: "\x1b[38;5;244m",
            error: "\x1b[38;5;160m",
            accent: "\x1b[38;5;25m",
        }
    }

    /// Wrap `text` in `style`, resetting afterwards.
    pub fn paint(style: &str, text: &str) -> String {
        format!("{style}{text}{RESET}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_button_label_names_the_other_mode() {
        assert!(ThemeMode::Light.button_label().contains("Dark Mode"));
        assert!(ThemeMode::Dark.button_label().contains("Light Mode"));
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(ThemeMode::Light.theme(), ThemeMode::Dark.theme());
        assert_eq!(CalcTheme::paint("\x1b[1m", "5"), "\x1b[1m5\x1b[0m");
    }
}
