// Library exports for testing and potential library use
//
// The binary is a thin wrapper around `app::App`: it installs the log bridge,
// builds a single-threaded Tokio runtime and runs the reload timer until a
// shutdown signal arrives. Everything the timer touches lives on that one
// thread, so `App` needs no locking.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod debug;

pub use quiltt_config::{Config, ConfigPaths, HomeSource};
pub use quiltt_terminal::{HeadlessTerminal, Terminal};
