//! Terminal side of the quiltt configuration pipeline.
//!
//! This crate defines what the config core needs from a terminal widget and
//! how a [`Config`](quiltt_config::Config) is pushed into one:
//!
//! - The [`Terminal`] capability trait and [`CursorBlinkMode`]
//! - Pango-style font description parsing
//! - [`apply_config`], the ordered config push
//! - [`HeadlessTerminal`], an in-process terminal that records what it receives

pub mod apply;
pub mod capability;
pub mod font;
pub mod headless;

// Re-export main types for convenience
pub use apply::apply_config;
pub use capability::{CursorBlinkMode, Terminal, TerminalError};
pub use font::{FontDescription, FontSize, FontStyle, FontWeight};
pub use headless::{HeadlessTerminal, TerminalSettings};
