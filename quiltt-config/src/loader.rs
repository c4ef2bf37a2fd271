//! Loading `config.lua` into a [`Config`].
//!
//! The loader never fails from the caller's point of view. Every problem is
//! logged and summarized in a [`LoadOutcome`], and the config keeps whatever
//! values it had for the fields the script did not validly set.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::ConfigError;
use crate::merge::{MergeReport, merge_bindings};
use crate::paths::ConfigPaths;
use crate::script;

/// Result of one load pass.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The script ran and its bindings were merged.
    Loaded(MergeReport),
    /// No script at the path; nothing changed.
    FileAbsent(PathBuf),
    /// Home lookup, reading or evaluation failed; nothing changed.
    Failed(ConfigError),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }

    pub fn report(&self) -> Option<&MergeReport> {
        match self {
            LoadOutcome::Loaded(report) => Some(report),
            _ => None,
        }
    }
}

/// Locates, evaluates and merges the config script.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    paths: ConfigPaths,
}

impl ConfigLoader {
    pub fn new(paths: ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// Run the script and merge its bindings into `config` in place.
    pub fn load(&self, config: &mut Config) -> LoadOutcome {
        match self.try_load(config) {
            Ok(report) => {
                for diagnostic in &report.diagnostics {
                    log::error!("{}", diagnostic.to_error());
                }
                log::debug!("Config fields updated: {:?}", report.updated);
                LoadOutcome::Loaded(report)
            }
            Err(ConfigError::ConfigFileAbsent(path)) => {
                log::info!(
                    "Config file not found, keeping current settings: {}",
                    path.display()
                );
                LoadOutcome::FileAbsent(path)
            }
            Err(e) => {
                log::error!("{e}");
                LoadOutcome::Failed(e)
            }
        }
    }

    fn try_load(&self, config: &mut Config) -> Result<MergeReport, ConfigError> {
        let config_path = self.paths.config_path()?;
        log::info!("Config path: {:?}", config_path);

        let source = read_script(&config_path)?;
        let bindings = script::evaluate(&config_path, &source)?;
        Ok(merge_bindings(config, &bindings))
    }
}

fn read_script(path: &Path) -> Result<Vec<u8>, ConfigError> {
    fs::read(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ConfigError::ConfigFileAbsent(path.to_path_buf())
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::paths::config_path_for;
    use tempfile::TempDir;

    fn loader_with_script(script: Option<&str>) -> (ConfigLoader, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        if let Some(script) = script {
            let path = config_path_for(temp_dir.path());
            fs::create_dir_all(path.parent().expect("parent")).expect("Failed to create dir");
            fs::write(&path, script).expect("Failed to write config");
        }
        let loader = ConfigLoader::new(ConfigPaths::with_home(temp_dir.path()));
        (loader, temp_dir)
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let (loader, _temp_dir) = loader_with_script(None);
        let mut config = Config::default();

        let outcome = loader.load(&mut config);

        assert!(matches!(outcome, LoadOutcome::FileAbsent(_)));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_loads_script_values() {
        let (loader, _temp_dir) = loader_with_script(Some(
            r##"
            font = "JetBrains Mono 13"
            background = "#1e1e2e"
            cursor_blink = false
            "##,
        ));
        let mut config = Config::default();

        let outcome = loader.load(&mut config);

        assert!(outcome.is_loaded());
        assert_eq!(config.font, "JetBrains Mono 13");
        assert_eq!(config.background, Rgba::from_hex("#1e1e2e").expect("valid"));
        assert!(!config.cursor_blink);
        assert_eq!(config.scrollback_lines, 10000);
    }

    #[test]
    fn test_script_error_changes_nothing() {
        let (loader, _temp_dir) = loader_with_script(Some(
            r#"
            font = "Should Not Apply 10"
            error("broken config")
            "#,
        ));
        let mut config = Config::default();
        config.font = "Kept 11".to_string();
        let before = config.clone();

        let outcome = loader.load(&mut config);

        assert!(matches!(
            outcome,
            LoadOutcome::Failed(ConfigError::ScriptExecution { .. })
        ));
        assert_eq!(config, before);
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        // A directory where the script should be.
        fs::create_dir_all(config_path_for(temp_dir.path())).expect("Failed to create dir");
        let loader = ConfigLoader::new(ConfigPaths::with_home(temp_dir.path()));
        let mut config = Config::default();

        let outcome = loader.load(&mut config);

        assert!(matches!(outcome, LoadOutcome::Failed(ConfigError::Io { .. })));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_report_is_exposed() {
        let (loader, _temp_dir) =
            loader_with_script(Some(r##"palette = { "#000000", "bad" }"##));
        let mut config = Config::default();

        let outcome = loader.load(&mut config);

        let report = outcome.report().expect("loaded");
        assert_eq!(report.updated, vec!["palette"]);
        assert_eq!(report.diagnostics.len(), 1);
    }
}
