//! Shared integration test helpers for quiltt.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{TestHome, RecordingTerminal};
//! ```
//!
//! Every helper works inside a `TempDir` and hands the directory to the code
//! under test through `ConfigPaths::with_home`, so no test reads or changes
//! `HOME`.

#![allow(dead_code)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use quiltt_config::{ConfigPaths, PALETTE_SIZE, Rgba};
use quiltt_terminal::{CursorBlinkMode, FontDescription, Terminal, TerminalError};
use tempfile::TempDir;

/// A temporary home directory with an optional `.config/quiltt/config.lua`.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn paths(&self) -> ConfigPaths {
        ConfigPaths::with_home(self.dir.path())
    }

    pub fn script_path(&self) -> PathBuf {
        self.paths().config_path().expect("Fixed home always resolves")
    }

    /// Write `script` and stamp it with `mtime`.
    pub fn write_script(&self, script: &str, mtime: SystemTime) -> PathBuf {
        let path = self.script_path();
        fs::create_dir_all(path.parent().expect("parent")).expect("Failed to create config dir");
        fs::write(&path, script).expect("Failed to write config");
        set_mtime(&path, mtime);
        path
    }

    /// Change the script's mtime without touching its contents.
    pub fn touch(&self, mtime: SystemTime) {
        set_mtime(&self.script_path(), mtime);
    }
}

pub fn set_mtime(path: &Path, mtime: SystemTime) {
    let file = File::options()
        .write(true)
        .open(path)
        .expect("Failed to open config");
    file.set_modified(mtime).expect("Failed to set mtime");
}

/// A fixed timestamp `secs` seconds after the epoch.
pub fn at(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}

/// One setter call seen by [`RecordingTerminal`].
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalCall {
    Font(FontDescription),
    Foreground(Rgba),
    Background(Rgba),
    CursorColor(Rgba),
    HighlightColor(Rgba),
    Palette([Rgba; PALETTE_SIZE]),
    ScrollbackLines(u32),
    BoldIsBright(bool),
    CursorBlinkMode(CursorBlinkMode),
}

/// Terminal that records every setter call in order.
#[derive(Debug, Default)]
pub struct RecordingTerminal {
    pub calls: Vec<TerminalCall>,
}

impl RecordingTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of full config pushes, counted by font calls.
    pub fn pushes(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, TerminalCall::Font(_)))
            .count()
    }

    pub fn last_foreground(&self) -> Option<Rgba> {
        self.calls.iter().rev().find_map(|call| match call {
            TerminalCall::Foreground(color) => Some(*color),
            _ => None,
        })
    }

    pub fn last_font(&self) -> Option<&FontDescription> {
        self.calls.iter().rev().find_map(|call| match call {
            TerminalCall::Font(font) => Some(font),
            _ => None,
        })
    }
}

impl Terminal for RecordingTerminal {
    fn set_font(&mut self, font: &FontDescription) -> Result<(), TerminalError> {
        self.calls.push(TerminalCall::Font(font.clone()));
        Ok(())
    }
    fn set_foreground(&mut self, color: Rgba) -> Result<(), TerminalError> {
        self.calls.push(TerminalCall::Foreground(color));
        Ok(())
    }
    fn set_background(&mut self, color: Rgba) -> Result<(), TerminalError> {
        self.calls.push(TerminalCall::Background(color));
        Ok(())
    }
    fn set_cursor_color(&mut self, color: Rgba) -> Result<(), TerminalError> {
        self.calls.push(TerminalCall::CursorColor(color));
        Ok(())
    }
    fn set_highlight_color(&mut self, color: Rgba) -> Result<(), TerminalError> {
        self.calls.push(TerminalCall::HighlightColor(color));
        Ok(())
    }
    fn set_palette(&mut self, palette: &[Rgba; PALETTE_SIZE]) -> Result<(), TerminalError> {
        self.calls.push(TerminalCall::Palette(*palette));
        Ok(())
    }
    fn set_scrollback_lines(&mut self, lines: u32) -> Result<(), TerminalError> {
        self.calls.push(TerminalCall::ScrollbackLines(lines));
        Ok(())
    }
    fn set_bold_is_bright(&mut self, bold_is_bright: bool) -> Result<(), TerminalError> {
        self.calls.push(TerminalCall::BoldIsBright(bold_is_bright));
        Ok(())
    }
    fn set_cursor_blink_mode(&mut self, mode: CursorBlinkMode) -> Result<(), TerminalError> {
        self.calls.push(TerminalCall::CursorBlinkMode(mode));
        Ok(())
    }
}
