//! Home directory resolution and the fixed config script location.
//!
//! The script always lives at `<home>/.config/quiltt/config.lua`. The home
//! directory is looked up again on every call, so a changed `HOME` is picked
//! up by the next load or watcher tick.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Directory name under `~/.config`.
pub const APP_NAME: &str = "quiltt";

/// File name of the config script.
pub const CONFIG_FILE_NAME: &str = "config.lua";

/// Where the home directory comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HomeSource {
    /// `HOME` first, then the user account database for the current user.
    #[default]
    Environment,
    /// A pinned directory, used by tests and embedders.
    Fixed(PathBuf),
}

impl HomeSource {
    /// Resolve the home directory for this source.
    pub fn resolve(&self) -> Result<PathBuf, ConfigError> {
        match self {
            HomeSource::Environment => home_from(std::env::var_os("HOME"), dirs::home_dir),
            HomeSource::Fixed(path) => Ok(path.clone()),
        }
    }
}

/// Pick the home directory from the environment value, falling back to the
/// account database lookup. An empty `HOME` counts as unset.
fn home_from(
    env_home: Option<OsString>,
    account_home: impl FnOnce() -> Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(home) = env_home.filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    log::debug!("HOME is not set; falling back to the user account database");
    account_home().ok_or(ConfigError::HomeDirectoryUnresolved)
}

/// Config directory for a given home: `<home>/.config/quiltt`.
pub fn config_dir_for(home: &Path) -> PathBuf {
    home.join(".config").join(APP_NAME)
}

/// Config script path for a given home: `<home>/.config/quiltt/config.lua`.
pub fn config_path_for(home: &Path) -> PathBuf {
    config_dir_for(home).join(CONFIG_FILE_NAME)
}

/// Resolves the config script location on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigPaths {
    home: HomeSource,
}

impl ConfigPaths {
    pub fn new(home: HomeSource) -> Self {
        Self { home }
    }

    /// Paths rooted at a fixed home directory.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self::new(HomeSource::Fixed(home.into()))
    }

    pub fn home_source(&self) -> &HomeSource {
        &self.home
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> Result<PathBuf, ConfigError> {
        Ok(config_dir_for(&self.home.resolve()?))
    }

    /// Get the config script path.
    pub fn config_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(config_path_for(&self.home.resolve()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_layout() {
        let path = config_path_for(Path::new("/home/alice"));
        assert_eq!(path, PathBuf::from("/home/alice/.config/quiltt/config.lua"));
    }

    #[test]
    fn test_env_home_wins() {
        let home = home_from(Some(OsString::from("/env/home")), || {
            Some(PathBuf::from("/passwd/home"))
        })
        .expect("home should resolve");
        assert_eq!(home, PathBuf::from("/env/home"));
    }

    #[test]
    fn test_falls_back_to_account_database() {
        let home = home_from(None, || Some(PathBuf::from("/passwd/home")))
            .expect("home should resolve");
        assert_eq!(home, PathBuf::from("/passwd/home"));

        let home = home_from(Some(OsString::new()), || Some(PathBuf::from("/passwd/home")))
            .expect("empty HOME should fall back");
        assert_eq!(home, PathBuf::from("/passwd/home"));
    }

    #[test]
    fn test_unresolved_home() {
        let result = home_from(None, || None);
        assert!(matches!(result, Err(ConfigError::HomeDirectoryUnresolved)));
    }

    #[test]
    fn test_fixed_home_source() {
        let paths = ConfigPaths::with_home("/tmp/fixed");
        assert_eq!(
            paths.config_dir().expect("fixed home"),
            PathBuf::from("/tmp/fixed/.config/quiltt")
        );
        assert_eq!(
            paths.config_path().expect("fixed home"),
            PathBuf::from("/tmp/fixed/.config/quiltt/config.lua")
        );
    }
}
