//! Default values for font settings.

/// Pango-style description: family followed by point size.
pub fn font() -> String {
    "Monospace 12".to_string()
}
