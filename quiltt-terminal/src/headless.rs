//! A terminal with no window behind it.
//!
//! `HeadlessTerminal` keeps the last value received for every setting and
//! counts how many times the full config has been pushed. The `quiltt` binary
//! drives one so the config pipeline can run without a widget toolkit.

use quiltt_config::{PALETTE_SIZE, Rgba};
use serde::Serialize;

use crate::capability::{CursorBlinkMode, Terminal, TerminalError};
use crate::font::FontDescription;

/// Everything the terminal has been told so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TerminalSettings {
    pub font: Option<FontDescription>,
    pub foreground: Option<Rgba>,
    pub background: Option<Rgba>,
    pub cursor_color: Option<Rgba>,
    pub highlight_color: Option<Rgba>,
    pub palette: Option<[Rgba; PALETTE_SIZE]>,
    pub scrollback_lines: Option<u32>,
    pub bold_is_bright: Option<bool>,
    pub cursor_blink_mode: Option<CursorBlinkMode>,
}

#[derive(Debug, Default)]
pub struct HeadlessTerminal {
    settings: TerminalSettings,
    font_changes: usize,
}

impl HeadlessTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &TerminalSettings {
        &self.settings
    }

    /// Number of `set_font` calls, i.e. full config pushes.
    pub fn font_changes(&self) -> usize {
        self.font_changes
    }
}

impl Terminal for HeadlessTerminal {
    fn set_font(&mut self, font: &FontDescription) -> Result<(), TerminalError> {
        log::debug!("Terminal font: {font}");
        self.settings.font = Some(font.clone());
        self.font_changes += 1;
        Ok(())
    }

    fn set_foreground(&mut self, color: Rgba) -> Result<(), TerminalError> {
        log::debug!("Terminal foreground: {color}");
        self.settings.foreground = Some(color);
        Ok(())
    }

    fn set_background(&mut self, color: Rgba) -> Result<(), TerminalError> {
        log::debug!("Terminal background: {color}");
        self.settings.background = Some(color);
        Ok(())
    }

    fn set_cursor_color(&mut self, color: Rgba) -> Result<(), TerminalError> {
        log::debug!("Terminal cursor color: {color}");
        self.settings.cursor_color = Some(color);
        Ok(())
    }

    fn set_highlight_color(&mut self, color: Rgba) -> Result<(), TerminalError> {
        log::debug!("Terminal highlight color: {color}");
        self.settings.highlight_color = Some(color);
        Ok(())
    }

    fn set_palette(&mut self, palette: &[Rgba; PALETTE_SIZE]) -> Result<(), TerminalError> {
        log::trace!(
            "Terminal palette: {}",
            palette
                .iter()
                .map(|color| color.to_hex())
                .collect::<Vec<_>>()
                .join(" ")
        );
        self.settings.palette = Some(*palette);
        Ok(())
    }

    fn set_scrollback_lines(&mut self, lines: u32) -> Result<(), TerminalError> {
        log::debug!("Terminal scrollback: {lines} lines");
        self.settings.scrollback_lines = Some(lines);
        Ok(())
    }

    fn set_bold_is_bright(&mut self, bold_is_bright: bool) -> Result<(), TerminalError> {
        self.settings.bold_is_bright = Some(bold_is_bright);
        Ok(())
    }

    fn set_cursor_blink_mode(&mut self, mode: CursorBlinkMode) -> Result<(), TerminalError> {
        self.settings.cursor_blink_mode = Some(mode);
        Ok(())
    }
}
