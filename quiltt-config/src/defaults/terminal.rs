//! Default values for terminal-behaviour settings.

pub fn scrollback_lines() -> u32 {
    10000
}

pub fn bold_is_bright() -> bool {
    true
}

pub fn cursor_blink() -> bool {
    true
}

pub fn reload_interval_seconds() -> i64 {
    1 // Poll the config script once per second
}
