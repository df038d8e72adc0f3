use inksac::prelude::*;

use crate::core::commands::is_builtin;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    /// Colors only when the output stream is a terminal.
    pub fn for_terminal(is_terminal: bool) -> Self {
        if is_terminal {
            Self::new()
        } else {
            Self::plain()
        }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Built-ins in green, other commands in cyan, flags in yellow.
    ///
    /// Whitespace is preserved so the cursor position stays valid.
    pub fn highlight_command(&self, input: &str) -> String {
        if !self.enabled() || input.trim().is_empty() {
            return input.to_string();
        }

        let mut out = String::with_capacity(input.len());
        let mut seen_command = false;
        let mut rest = input;

        while !rest.is_empty() {
            let split = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
            out.push_str(&rest[..split]);
            rest = &rest[split..];

            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..end];
            rest = &rest[end..];
            if word.is_empty() {
                continue;
            }

            if !seen_command {
                seen_command = true;
                let color = if is_builtin(word) { Color::Green } else { Color::Cyan };
                let style = Style::builder().foreground(color).bold().build();
                out.push_str(&word.style(style).to_string());
            } else if word.starts_with('-') {
                let flag_style = Style::builder().foreground(Color::Yellow).build();
                out.push_str(&word.style(flag_style).to_string());
            } else {
                out.push_str(word);
            }
        }

        out
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.enabled() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }

    pub fn highlight_warning(&self, warning: &str) -> String {
        if !self.enabled() {
            return warning.to_string();
        }

        let warning_style = Style::builder().foreground(Color::Yellow).build();
        warning.style(warning_style).to_string()
    }
}
