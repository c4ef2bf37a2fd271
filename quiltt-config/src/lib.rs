//! Configuration system for the quiltt terminal.
//!
//! This crate provides the settings model and everything needed to keep it
//! in sync with the user's `~/.config/quiltt/config.lua`:
//!
//! - Hex color parsing into normalized RGBA
//! - The `Config` record and its compiled-in defaults
//! - Home/config path resolution
//! - A per-call sandboxed Lua evaluator and the field-by-field merge
//! - Modification-time polling for live reload

pub mod color;
pub mod config;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod merge;
pub mod paths;
pub mod script;
pub mod watcher;

// Re-export main types for convenience
pub use color::{ColorParseError, Rgba, parse_hex_into};
pub use config::{Config, PALETTE_SIZE};
pub use error::ConfigError;
pub use loader::{ConfigLoader, LoadOutcome};
pub use merge::{ConfigDiagnostic, MergeReport, merge_bindings};
pub use paths::{APP_NAME, CONFIG_FILE_NAME, ConfigPaths, HomeSource};
pub use script::{Bindings, RECOGNIZED_GLOBALS, ScriptValue};
pub use watcher::{ConfigReloadEvent, ReloadWatcher};
