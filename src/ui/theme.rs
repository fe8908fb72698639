use std::io::{self, IsTerminal};

use crossterm::style::{style, Color, Stylize};

/// Controls whether output is decorated with ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub fn colored() -> Self {
        Self { color: true }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Colored when stdout is a terminal, unless the user opted out.
    pub fn detect(no_color: bool) -> Self {
        if no_color || !io::stdout().is_terminal() {
            Self::plain()
        } else {
            Self::colored()
        }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.color {
            style(text).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_leaves_text_untouched() {
        let theme = Theme::plain();
        assert_eq!(theme.paint("ok", Color::Green), "ok");
        assert_eq!(theme.bold("ok"), "ok");
    }

    #[test]
    fn test_colored_theme_keeps_text() {
        let theme = Theme::colored();
        assert_ne!(theme, Theme::plain());
        assert!(theme.paint("ok", Color::Green).contains("ok"));
    }

    #[test]
    fn test_opt_out_wins() {
        assert_eq!(Theme::detect(true), Theme::plain());
    }
}
