//! The terminal capability consumed by the config applier.
//!
//! The real implementation is a terminal widget (PTY, rendering, input) that
//! lives outside this repository. The config core only ever talks to it
//! through this trait and only hands it copies of config values.

use quiltt_config::{PALETTE_SIZE, Rgba};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::font::FontDescription;

/// Cursor blink setting as understood by the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CursorBlinkMode {
    #[default]
    On,
    Off,
}

impl From<bool> for CursorBlinkMode {
    fn from(blink: bool) -> Self {
        if blink {
            CursorBlinkMode::On
        } else {
            CursorBlinkMode::Off
        }
    }
}

/// Failure reported by the terminal collaborator.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// The terminal refused a value.
    #[error("terminal rejected {setting}: {reason}")]
    Rejected {
        setting: &'static str,
        reason: String,
    },

    /// The terminal has gone away (window closed, widget destroyed).
    #[error("terminal is no longer available")]
    Closed,
}

/// Settings a terminal accepts from the config pipeline.
pub trait Terminal {
    fn set_font(&mut self, font: &FontDescription) -> Result<(), TerminalError>;

    fn set_foreground(&mut self, color: Rgba) -> Result<(), TerminalError>;

    fn set_background(&mut self, color: Rgba) -> Result<(), TerminalError>;

    fn set_cursor_color(&mut self, color: Rgba) -> Result<(), TerminalError>;

    fn set_highlight_color(&mut self, color: Rgba) -> Result<(), TerminalError>;

    /// Replace all 16 ANSI colors at once.
    fn set_palette(&mut self, palette: &[Rgba; PALETTE_SIZE]) -> Result<(), TerminalError>;

    fn set_scrollback_lines(&mut self, lines: u32) -> Result<(), TerminalError>;

    fn set_bold_is_bright(&mut self, bold_is_bright: bool) -> Result<(), TerminalError>;

    fn set_cursor_blink_mode(&mut self, mode: CursorBlinkMode) -> Result<(), TerminalError>;
}
