//! Default values for the terminal colors and the 16-slot ANSI palette.

use crate::color::Rgba;

/// The standard 16-color ANSI table in slot order: black, maroon, green,
/// olive, navy, purple, teal, silver, gray, red, lime, yellow, blue, fuchsia,
/// aqua, white.
pub const ANSI_PALETTE_HEX: [&str; 16] = [
    "#000000", "#800000", "#008000", "#808000", "#000080", "#800080", "#008080", "#c0c0c0",
    "#808080", "#ff0000", "#00ff00", "#ffff00", "#0000ff", "#ff00ff", "#00ffff", "#ffffff",
];

pub fn foreground() -> Rgba {
    Rgba::rgb(0.8, 0.8, 0.8) // Light gray text
}

pub fn background() -> Rgba {
    Rgba::rgb(0.0, 0.0, 0.0) // Black
}

pub fn cursor() -> Rgba {
    Rgba::rgb(0.8, 0.8, 0.8) // Same as foreground
}

pub fn highlight() -> Rgba {
    Rgba::rgb(0.2, 0.2, 0.4) // Muted blue selection
}

/// The ANSI table run through the hex parser.
pub fn palette() -> [Rgba; 16] {
    let mut palette = [Rgba::rgb(0.0, 0.0, 0.0); 16];
    for (slot, hex) in palette.iter_mut().zip(ANSI_PALETTE_HEX) {
        match Rgba::from_hex(hex) {
            Ok(color) => *slot = color,
            Err(e) => log::error!("Built-in palette entry rejected: {e}"),
        }
    }
    palette
}
