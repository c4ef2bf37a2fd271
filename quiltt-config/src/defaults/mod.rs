//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*`-style free functions used by
//! `Config::default()` and as `#[serde(default = "...")]` attributes on
//! `Config` fields.

mod colors;
mod font;
mod terminal;

// ── Font ───────────────────────────────────────────────────────────────────
pub use font::font;

// ── Colors ─────────────────────────────────────────────────────────────────
pub use colors::{ANSI_PALETTE_HEX, background, cursor, foreground, highlight, palette};

// ── Terminal behaviour ─────────────────────────────────────────────────────
pub use terminal::{bold_is_bright, cursor_blink, reload_interval_seconds, scrollback_lines};
