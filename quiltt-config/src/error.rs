//! Typed error variants for the quiltt-config crate.
//!
//! None of these are fatal. The loader and the watcher log them and carry on
//! with the last known good configuration; they are exposed so callers and
//! tests can match on the specific failure mode.

use std::fmt;
use std::path::PathBuf;

use crate::color::ColorParseError;

/// Errors that can occur while locating, reading or evaluating the config
/// script.
#[derive(Debug)]
pub enum ConfigError {
    /// A color binding held a string that is not `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// `field` names the binding, with a 1-based index for palette entries
    /// (`palette[6]`).
    InvalidColorFormat {
        field: String,
        source: ColorParseError,
    },

    /// There is no config script at the expected path.
    ///
    /// Informational: a missing script means "keep the current values".
    ConfigFileAbsent(PathBuf),

    /// The script could not be read, parsed, or it raised at runtime.
    ScriptExecution { path: PathBuf, message: String },

    /// The watcher could not read the script's metadata.
    StatFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Neither `HOME` nor the user account database yielded a home directory.
    HomeDirectoryUnresolved,

    /// The script exists but reading it failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidColorFormat { field, source } => write!(f, "{field}: {source}"),
            ConfigError::ConfigFileAbsent(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            ConfigError::ScriptExecution { path, message } => {
                write!(f, "Error loading config {}: {message}", path.display())
            }
            ConfigError::StatFailure { path, source } => {
                write!(
                    f,
                    "Error checking config file {}: {source}",
                    path.display()
                )
            }
            ConfigError::HomeDirectoryUnresolved => {
                write!(f, "Could not determine the home directory")
            }
            ConfigError::Io { path, source } => {
                write!(f, "I/O error reading config {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidColorFormat { source, .. } => Some(source),
            ConfigError::StatFailure { source, .. } | ConfigError::Io { source, .. } => {
                Some(source)
            }
            ConfigError::ConfigFileAbsent(_)
            | ConfigError::ScriptExecution { .. }
            | ConfigError::HomeDirectoryUnresolved => None,
        }
    }
}
