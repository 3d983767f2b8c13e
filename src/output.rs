//! # Progress Output
//!
//! Progress lines printed by the commands. Colours and emoji are used only
//! when the terminal supports them and the user has not opted out.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;

use console::style;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `always` and `never` are taken at face value; anything else detects
    /// support from the environment and the terminal.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Prints the start of a step, e.g. "Cloning <url>".
    pub fn step(&self, message: &str) {
        println!("{} {}", emoji(self, "📦", "[..]"), message);
    }

    /// Prints a completed step.
    pub fn done(&self, message: &str) {
        let marker = emoji(self, "✅", "[ok]");
        if self.use_color {
            println!("{} {}", marker, style(message).green());
        } else {
            println!("{} {}", marker, message);
        }
    }

    /// Prints a line that deserves attention but is not an error.
    pub fn note(&self, message: &str) {
        let marker = emoji(self, "⚠️ ", "[!!]");
        if self.use_color {
            println!("{} {}", marker, style(message).yellow());
        } else {
            println!("{} {}", marker, message);
        }
    }

    /// Prints an indented detail line under the current step.
    pub fn detail(&self, message: &str) {
        if self.use_color {
            println!("    {}", style(message).dim());
        } else {
            println!("    {}", message);
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the emoji when colors are enabled and the plain text otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}
