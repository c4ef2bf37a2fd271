//! The typed settings record pushed into the terminal.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Number of ANSI palette slots.
pub const PALETTE_SIZE: usize = 16;

/// Terminal configuration.
///
/// Created once from [`Config::default`] and then updated in place by each
/// load pass: every field keeps its last known good value until a script
/// supplies a valid replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Font description, e.g. `"Monospace 12"`.
    #[serde(default = "crate::defaults::font")]
    pub font: String,

    #[serde(default = "crate::defaults::foreground")]
    pub foreground: Rgba,

    #[serde(default = "crate::defaults::background")]
    pub background: Rgba,

    #[serde(default = "crate::defaults::cursor")]
    pub cursor: Rgba,

    /// Selection highlight color.
    #[serde(default = "crate::defaults::highlight")]
    pub highlight: Rgba,

    /// ANSI colors 0-15.
    #[serde(default = "crate::defaults::palette")]
    pub palette: [Rgba; PALETTE_SIZE],

    /// Lines of scrollback kept by the terminal (0 is passed through as-is).
    #[serde(default = "crate::defaults::scrollback_lines")]
    pub scrollback_lines: u32,

    /// Render bold text in the bright palette variant.
    #[serde(default = "crate::defaults::bold_is_bright")]
    pub bold_is_bright: bool,

    #[serde(default = "crate::defaults::cursor_blink")]
    pub cursor_blink: bool,

    /// Seconds between config file checks; zero or negative disables polling.
    ///
    /// Only the value present when polling is first scheduled sets the
    /// cadence. Later changes can pause the checks but never reschedule them.
    #[serde(default = "crate::defaults::reload_interval_seconds")]
    pub reload_interval_seconds: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font: crate::defaults::font(),
            foreground: crate::defaults::foreground(),
            background: crate::defaults::background(),
            cursor: crate::defaults::cursor(),
            highlight: crate::defaults::highlight(),
            palette: crate::defaults::palette(),
            scrollback_lines: crate::defaults::scrollback_lines(),
            bold_is_bright: crate::defaults::bold_is_bright(),
            cursor_blink: crate::defaults::cursor_blink(),
            reload_interval_seconds: crate::defaults::reload_interval_seconds(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether file polling is enabled by the current interval.
    pub fn reload_enabled(&self) -> bool {
        self.reload_interval_seconds > 0
    }
}
