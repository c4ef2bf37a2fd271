//! Config file polling for automatic reload.
//!
//! The watcher is driven by a timer owned by the caller. Each tick stats the
//! config script and reports a [`ConfigReloadEvent`] when its modification
//! time has moved strictly forward since the last reported change.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::config::Config;
use crate::error::ConfigError;
use crate::paths::ConfigPaths;

/// Event indicating the config file has changed and needs reloading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigReloadEvent {
    /// Path to the config file that changed.
    pub path: PathBuf,
    /// Its new modification time.
    pub modified: SystemTime,
}

/// Polling state for the config script.
///
/// Built once and kept for the life of the timer. The first successful stat
/// of an existing script always counts as a change, because the last seen
/// time starts at the Unix epoch.
#[derive(Debug, Clone)]
pub struct ReloadWatcher {
    paths: ConfigPaths,
    last_seen_mtime: SystemTime,
}

impl ReloadWatcher {
    pub fn new(paths: ConfigPaths) -> Self {
        Self {
            paths,
            last_seen_mtime: UNIX_EPOCH,
        }
    }

    /// Timer period to schedule for `config`, or `None` when polling is
    /// disabled. Read once, when the timer is created.
    pub fn schedule_period(config: &Config) -> Option<Duration> {
        u64::try_from(config.reload_interval_seconds)
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn last_seen_mtime(&self) -> SystemTime {
        self.last_seen_mtime
    }

    /// One timer tick.
    ///
    /// Does nothing while the configured interval is zero or negative. Home
    /// lookup and stat failures are logged; the next tick simply tries again.
    pub fn check(&mut self, config: &Config) -> Option<ConfigReloadEvent> {
        if !config.reload_enabled() {
            log::trace!("Config reload paused (interval {})", config.reload_interval_seconds);
            return None;
        }

        let result = self
            .paths
            .config_path()
            .and_then(|path| self.check_path(&path));

        match result {
            Ok(event) => event,
            Err(e) => {
                log::error!("{e}");
                None
            }
        }
    }

    fn check_path(&mut self, path: &Path) -> Result<Option<ConfigReloadEvent>, ConfigError> {
        let modified = fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .map_err(|source| ConfigError::StatFailure {
                path: path.to_path_buf(),
                source,
            })?;

        if modified <= self.last_seen_mtime {
            return Ok(None);
        }

        self.last_seen_mtime = modified;
        log::info!("Config file changed: {}", path.display());
        Ok(Some(ConfigReloadEvent {
            path: path.to_path_buf(),
            modified,
        }))
    }
}
