/// Log bridge for quiltt.
///
/// Routes every `log::error!()` / `warn!()` / `info!()` / `debug!()` /
/// `trace!()` record from all workspace crates to stderr, one line per record:
///
/// ```text
/// [1718000000.123456] [ERROR] [quiltt_config::loader] palette[6]: invalid color format ...
/// ```
///
/// The level is taken from `RUST_LOG` when it holds a plain level name
/// (`error`, `warn`, `info`, `debug`, `trace`, `off`), otherwise from
/// `DEBUG_LEVEL`:
/// - 0: Errors only
/// - 1: Errors only
/// - 2: Info level
/// - 3: Debug level
/// - 4: Trace level
///
/// With neither set the level is Info.
use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// Level used when the environment does not choose one.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Pick the log level from the raw `RUST_LOG` and `DEBUG_LEVEL` values.
pub fn resolve_level(rust_log: Option<&str>, debug_level: Option<&str>) -> LevelFilter {
    if let Some(level) = rust_log.and_then(|v| LevelFilter::from_str(v.trim()).ok()) {
        return level;
    }

    match debug_level.map(|v| v.trim().parse::<u8>()) {
        // Errors always reach stderr; 0 does not silence them.
        Some(Ok(0 | 1)) => LevelFilter::Error,
        Some(Ok(2)) => LevelFilter::Info,
        Some(Ok(3)) => LevelFilter::Debug,
        Some(Ok(4..)) => LevelFilter::Trace,
        _ => DEFAULT_LEVEL,
    }
}

fn level_from_env() -> LevelFilter {
    let rust_log = std::env::var("RUST_LOG").ok();
    let debug_level = std::env::var("DEBUG_LEVEL").ok();
    resolve_level(rust_log.as_deref(), debug_level.as_deref())
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Format one record the way the bridge writes it.
pub fn format_record(timestamp: &str, record: &Record<'_>) -> String {
    format!(
        "[{}] [{:<5}] [{}] {}",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(&get_timestamp(), record);
        // A closed stderr is not worth failing over.
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the stderr bridge as the global logger.
///
/// Returns the active level. Calling it again keeps the first logger.
pub fn init_log_bridge() -> LevelFilter {
    let level = level_from_env();
    match log::set_boxed_logger(Box::new(StderrLogger { level })) {
        Ok(()) => {
            log::set_max_level(level);
            level
        }
        Err(_) => log::max_level(),
    }
}
