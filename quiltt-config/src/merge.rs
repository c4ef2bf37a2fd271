//! Field-by-field merge of script bindings into a [`Config`].
//!
//! This is where "last known good per field" lives. Each recognized binding
//! is checked on its own: a well-typed, valid value overwrites the field, and
//! anything else leaves the field as it was. Wrong types are skipped
//! silently; malformed colors are reported as diagnostics.

use std::fmt;

use crate::color::{ColorParseError, Rgba};
use crate::config::{Config, PALETTE_SIZE};
use crate::error::ConfigError;
use crate::script::{Bindings, ScriptValue};

/// A binding that had the right type but an unusable value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDiagnostic {
    /// Script global the value came from.
    pub field: &'static str,
    /// Palette slot (0-based) when `field` is `"palette"`.
    pub slot: Option<usize>,
    pub error: ColorParseError,
}

impl ConfigDiagnostic {
    /// Binding name as the script spells it, e.g. `palette[6]`.
    pub fn location(&self) -> String {
        match self.slot {
            // Shown with the script's 1-based index.
            Some(slot) => format!("{}[{}]", self.field, slot + 1),
            None => self.field.to_string(),
        }
    }

    pub fn to_error(&self) -> ConfigError {
        ConfigError::InvalidColorFormat {
            field: self.location(),
            source: self.error.clone(),
        }
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location(), self.error)
    }
}

/// What a merge changed and what it rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeReport {
    /// Script globals that updated at least one field, in merge order.
    pub updated: Vec<&'static str>,
    pub diagnostics: Vec<ConfigDiagnostic>,
}

impl MergeReport {
    pub fn is_unchanged(&self) -> bool {
        self.updated.is_empty()
    }

    fn touched(&mut self, field: &'static str) {
        if !self.updated.contains(&field) {
            self.updated.push(field);
        }
    }
}

/// Apply `bindings` onto `config` in place.
pub fn merge_bindings(config: &mut Config, bindings: &Bindings) -> MergeReport {
    let mut report = MergeReport::default();

    if let Some(interval) = integer(bindings, "config_reload_interval") {
        config.reload_interval_seconds = interval;
        report.touched("config_reload_interval");
    }

    if let Some(font) = string(bindings, "font") {
        config.font = font.to_string();
        report.touched("font");
    }

    merge_color(bindings, "foreground", &mut config.foreground, &mut report);
    merge_color(bindings, "background", &mut config.background, &mut report);
    merge_color(bindings, "cursor", &mut config.cursor, &mut report);
    merge_color(bindings, "highlight", &mut config.highlight, &mut report);

    merge_palette(bindings, &mut config.palette, &mut report);

    if let Some(lines) = integer(bindings, "scrollback_lines") {
        match u32::try_from(lines) {
            Ok(lines) => {
                config.scrollback_lines = lines;
                report.touched("scrollback_lines");
            }
            Err(_) => log::trace!("Ignoring out-of-range scrollback_lines = {lines}"),
        }
    }

    if let Some(bold) = boolean(bindings, "bold_is_bright") {
        config.bold_is_bright = bold;
        report.touched("bold_is_bright");
    }

    if let Some(blink) = boolean(bindings, "cursor_blink") {
        config.cursor_blink = blink;
        report.touched("cursor_blink");
    }

    report
}

fn skipped(name: &str, value: &ScriptValue, expected: &str) {
    if *value != ScriptValue::Nil {
        log::trace!(
            "Ignoring config global '{name}': expected {expected}, got {}",
            value.type_name()
        );
    }
}

fn string<'a>(bindings: &'a Bindings, name: &str) -> Option<&'a str> {
    let value = bindings.get(name);
    let s = value.as_str();
    if s.is_none() {
        skipped(name, value, "string");
    }
    s
}

fn integer(bindings: &Bindings, name: &str) -> Option<i64> {
    let value = bindings.get(name);
    let i = value.as_integer();
    if i.is_none() {
        skipped(name, value, "integer");
    }
    i
}

fn boolean(bindings: &Bindings, name: &str) -> Option<bool> {
    let value = bindings.get(name);
    let b = value.as_bool();
    if b.is_none() {
        skipped(name, value, "boolean");
    }
    b
}

fn merge_color(
    bindings: &Bindings,
    name: &'static str,
    dest: &mut Rgba,
    report: &mut MergeReport,
) {
    let Some(hex) = string(bindings, name) else {
        return;
    };
    match Rgba::from_hex(hex) {
        Ok(color) => {
            *dest = color;
            report.touched(name);
        }
        Err(error) => report.diagnostics.push(ConfigDiagnostic {
            field: name,
            slot: None,
            error,
        }),
    }
}

fn merge_palette(
    bindings: &Bindings,
    palette: &mut [Rgba; PALETTE_SIZE],
    report: &mut MergeReport,
) {
    let value = bindings.get("palette");
    let Some(entries) = value.as_sequence() else {
        skipped("palette", value, "table");
        return;
    };

    for (slot, (entry, dest)) in entries.iter().zip(palette.iter_mut()).enumerate() {
        let Some(hex) = entry.as_str() else {
            continue;
        };
        match Rgba::from_hex(hex) {
            Ok(color) => {
                *dest = color;
                report.touched("palette");
            }
            Err(error) => report.diagnostics.push(ConfigDiagnostic {
                field: "palette",
                slot: Some(slot),
                error,
            }),
        }
    }
}
