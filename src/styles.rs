//! Colors for messages on stderr.
use once_cell::sync::Lazy;

use crate::args::ColorChoice;

/// Escape sequences to wrap around the parts of a message.
#[derive(Debug, Clone, Copy)]
pub struct StyleSheet {
    app_start: &'static str,
    error_start: &'static str,
    end: &'static str,
}

impl StyleSheet {
    /// `s` styled as the program's name
    #[must_use]
    pub fn app_name(&self, s: &str) -> String {
        format!("{}{}{}", self.app_start, s, self.end)
    }
    /// `s` styled as an error label
    #[must_use]
    pub fn error(&self, s: &str) -> String {
        format!("{}{}{}", self.error_start, s, self.end)
    }
}

const BOLD_GREEN: &str = "\x1B[32;1m";
const BOLD_RED: &str = "\x1B[31;1m";
const RESET: &str = "\x1B[m";
const ALWAYS: StyleSheet = StyleSheet { app_start: BOLD_GREEN, error_start: BOLD_RED, end: RESET };
const NEVER: StyleSheet = StyleSheet { app_start: "", error_start: "", end: "" };
static AUTO: Lazy<StyleSheet> = Lazy::new(|| {
    use enable_ansi_support::enable_ansi_support;
    use supports_color::Stream;
    let use_color = enable_ansi_support().is_ok() && supports_color::on(Stream::Stderr).is_some();
    if use_color {
        ALWAYS
    } else {
        NEVER
    }
});

/// Decide once whether `ColorChoice::Auto` means color.
pub fn init() {
    Lazy::force(&AUTO);
}

/// The style sheet for `cc`
#[must_use]
pub fn colored(cc: ColorChoice) -> &'static StyleSheet {
    match cc {
        ColorChoice::Always => &ALWAYS,
        ColorChoice::Never => &NEVER,
        ColorChoice::Auto => Lazy::<StyleSheet>::get(&AUTO).unwrap_or(&NEVER),
    }
}
