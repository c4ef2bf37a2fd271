//! Application state and the config reload timer.
//!
//! `App` owns the live [`Config`], the loader and watcher built from one
//! [`ConfigPaths`], and the terminal that receives every applied config.
//! [`App::startup`] performs the initial load; [`App::run`] then drives the
//! watcher on a fixed timer until the shutdown future resolves.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use quiltt_config::{Config, ConfigLoader, ConfigPaths, ReloadWatcher};
use quiltt_terminal::{Terminal, apply_config};
use tokio::time::{Instant, MissedTickBehavior};

pub struct App<T: Terminal> {
    config: Config,
    loader: ConfigLoader,
    watcher: ReloadWatcher,
    terminal: T,
    /// Reloads triggered by the watcher, not counting the startup load.
    reloads: usize,
}

impl<T: Terminal> App<T> {
    pub fn new(paths: ConfigPaths, terminal: T) -> Self {
        Self {
            config: Config::new(),
            loader: ConfigLoader::new(paths.clone()),
            watcher: ReloadWatcher::new(paths),
            terminal,
            reloads: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn reload_count(&self) -> usize {
        self.reloads
    }

    /// Load the config script once and push the result to the terminal.
    ///
    /// Returns the reload timer period, or `None` when the loaded interval
    /// disables hot reload. The period is fixed from here on.
    pub fn startup(&mut self) -> Option<Duration> {
        self.loader.load(&mut self.config);
        self.push_config();

        let period = ReloadWatcher::schedule_period(&self.config);
        match period {
            Some(period) => log::info!("Config hot reload every {}s", period.as_secs()),
            None => log::info!(
                "Config hot reload disabled (interval {})",
                self.config.reload_interval_seconds
            ),
        }
        period
    }

    /// One timer tick: reload and re-apply when the script changed.
    ///
    /// Always continues; the timer is only torn down at shutdown.
    pub fn check_config_file(&mut self) -> ControlFlow<()> {
        if let Some(event) = self.watcher.check(&self.config) {
            log::info!("Reloading config...");
            log::debug!("Config changed at {:?}: {}", event.modified, event.path.display());
            self.loader.load(&mut self.config);
            self.reloads += 1;
            self.push_config();
        }
        ControlFlow::Continue(())
    }

    fn push_config(&mut self) {
        if let Err(e) = apply_config(&self.config, &mut self.terminal) {
            log::error!("Failed to apply config to terminal: {e}");
        }

        if log::log_enabled!(log::Level::Debug) {
            match serde_yaml_ng::to_string(&self.config) {
                Ok(yaml) => log::debug!("Active config:\n{yaml}"),
                Err(e) => log::warn!("Failed to serialize config snapshot: {e}"),
            }
        }
    }

    /// Run startup, then tick the watcher until `shutdown` resolves.
    ///
    /// Ticks that fall behind are delayed rather than bunched, so at most one
    /// check is ever in flight.
    pub async fn run<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let period = self.startup();
        tokio::pin!(shutdown);

        let Some(period) = period else {
            shutdown.await;
            log::info!("Shutting down");
            return;
        };

        let Some(start) = first_tick_at(Instant::now(), period) else {
            log::warn!(
                "Config reload interval of {}s is too large to schedule; hot reload disabled",
                period.as_secs()
            );
            shutdown.await;
            log::info!("Shutting down");
            return;
        };

        let mut interval = tokio::time::interval_at(start, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = interval.tick() => {
                    if self.check_config_file().is_break() {
                        break;
                    }
                }
            }
        }
        log::info!("Shutting down");
    }
}

/// When the first tick fires, or `None` if `period` cannot be represented
/// from `now`. Every later tick must fit too, so two periods are checked.
fn first_tick_at(now: Instant, period: Duration) -> Option<Instant> {
    let start = now.checked_add(period)?;
    start.checked_add(period)?;
    Some(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiltt_terminal::HeadlessTerminal;
    use tempfile::TempDir;

    #[test]
    fn test_startup_without_script_pushes_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut app = App::new(
            ConfigPaths::with_home(temp_dir.path()),
            HeadlessTerminal::new(),
        );

        let period = app.startup();

        assert_eq!(period, Some(Duration::from_secs(1)));
        assert_eq!(app.config(), &Config::default());
        assert_eq!(app.terminal().font_changes(), 1);
        assert_eq!(app.reload_count(), 0);
    }

    #[test]
    fn test_first_tick_at() {
        let now = Instant::now();
        assert_eq!(
            first_tick_at(now, Duration::from_secs(5)),
            Some(now + Duration::from_secs(5))
        );
        assert_eq!(first_tick_at(now, Duration::from_secs(i64::MAX as u64)), None);
        assert_eq!(first_tick_at(now, Duration::MAX), None);
    }

    #[test]
    fn test_tick_without_script_keeps_going() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut app = App::new(
            ConfigPaths::with_home(temp_dir.path()),
            HeadlessTerminal::new(),
        );
        app.startup();

        assert!(app.check_config_file().is_continue());
        assert_eq!(app.reload_count(), 0);
        assert_eq!(app.terminal().font_changes(), 1);
    }
}
