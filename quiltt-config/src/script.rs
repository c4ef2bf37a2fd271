//! Sandboxed Lua evaluation of the config script.
//!
//! Every call builds a brand new Lua state with only the `string`, `table`,
//! `math` and `utf8` libraries, runs the script, copies the recognized
//! globals out as plain [`ScriptValue`]s and drops the state again. Nothing
//! survives from one evaluation to the next.

use std::collections::HashMap;
use std::path::Path;

use mlua::{Lua, LuaOptions, StdLib, Table, Value};

use crate::config::PALETTE_SIZE;
use crate::error::ConfigError;

/// Script globals the loader looks at.
pub const RECOGNIZED_GLOBALS: [&str; 10] = [
    "font",
    "foreground",
    "background",
    "cursor",
    "highlight",
    "palette",
    "scrollback_lines",
    "bold_is_bright",
    "cursor_blink",
    "config_reload_interval",
];

/// A script global copied out of the interpreter.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
    Nil,
    Boolean(bool),
    Integer(i64),
    Number(f64),
    String(String),
    /// Array part of a table, indices `1..=16`. Missing entries are `Nil`.
    Sequence(Vec<ScriptValue>),
    /// Any other Lua type, by name (`"function"`, `"userdata"`, ...).
    Other(&'static str),
}

impl ScriptValue {
    /// Lua-style type name, for trace logging.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScriptValue::Nil => "nil",
            ScriptValue::Boolean(_) => "boolean",
            ScriptValue::Integer(_) | ScriptValue::Number(_) => "number",
            ScriptValue::String(_) => "string",
            ScriptValue::Sequence(_) => "table",
            ScriptValue::Other(name) => *name,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScriptValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScriptValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Integral numeric value. Floats count only when they have no fractional
    /// part and fit in an `i64`.
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            ScriptValue::Integer(i) => Some(i),
            ScriptValue::Number(n)
                if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 =>
            {
                Some(n as i64)
            }
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ScriptValue]> {
        match self {
            ScriptValue::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl From<&str> for ScriptValue {
    fn from(s: &str) -> Self {
        ScriptValue::String(s.to_string())
    }
}

impl From<bool> for ScriptValue {
    fn from(b: bool) -> Self {
        ScriptValue::Boolean(b)
    }
}

impl From<i64> for ScriptValue {
    fn from(i: i64) -> Self {
        ScriptValue::Integer(i)
    }
}

impl From<f64> for ScriptValue {
    fn from(n: f64) -> Self {
        ScriptValue::Number(n)
    }
}

impl<T: Into<ScriptValue>> From<Vec<T>> for ScriptValue {
    fn from(items: Vec<T>) -> Self {
        ScriptValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

static NIL: ScriptValue = ScriptValue::Nil;

/// Named globals captured from one script run.
///
/// Absent names read as [`ScriptValue::Nil`], the same as an unset Lua global.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    values: HashMap<String, ScriptValue>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, value: impl Into<ScriptValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<ScriptValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> &ScriptValue {
        self.values.get(name).unwrap_or(&NIL)
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| *v == ScriptValue::Nil)
    }
}

/// Create a fresh interpreter with the safe subset of the standard library.
fn new_sandbox() -> mlua::Result<Lua> {
    Lua::new_with(
        StdLib::STRING | StdLib::TABLE | StdLib::MATH | StdLib::UTF8,
        LuaOptions::default(),
    )
}

/// Run `source` (read from `path`) and capture the recognized globals.
///
/// `path` is only used for the chunk name so Lua error messages point at
/// the user's file.
pub fn evaluate(path: &Path, source: &[u8]) -> Result<Bindings, ConfigError> {
    let script_error = |e: mlua::Error| ConfigError::ScriptExecution {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let lua = new_sandbox().map_err(script_error)?;
    lua.load(source)
        .set_name(format!("@{}", path.display()))
        .exec()
        .map_err(script_error)?;

    let globals = lua.globals();
    let mut bindings = Bindings::new();
    for name in RECOGNIZED_GLOBALS {
        // A global with a throwing __index metamethod is treated as absent.
        match globals.get::<Value>(name) {
            Ok(value) => bindings.insert(name, capture(&value)),
            Err(e) => log::debug!("Could not read config global '{name}': {e}"),
        }
    }

    Ok(bindings)
}

fn capture(value: &Value) -> ScriptValue {
    match value {
        Value::Table(table) => ScriptValue::Sequence(capture_sequence(table)),
        other => capture_scalar(other),
    }
}

fn capture_scalar(value: &Value) -> ScriptValue {
    match value {
        Value::Nil => ScriptValue::Nil,
        Value::Boolean(b) => ScriptValue::Boolean(*b),
        Value::Integer(i) => ScriptValue::Integer(*i),
        Value::Number(n) => ScriptValue::Number(*n),
        Value::String(s) => ScriptValue::String(s.to_string_lossy().to_string()),
        other => ScriptValue::Other(other.type_name()),
    }
}

/// Copy entries `1..=16` with raw access; nested tables are not followed.
fn capture_sequence(table: &Table) -> Vec<ScriptValue> {
    (1..=PALETTE_SIZE as i64)
        .map(|index| match table.raw_get::<Value>(index) {
            Ok(value) => capture_scalar(&value),
            Err(_) => ScriptValue::Nil,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn run(source: &str) -> Result<Bindings, ConfigError> {
        evaluate(&PathBuf::from("config.lua"), source.as_bytes())
    }

    #[test]
    fn test_captures_scalars() {
        let bindings = run(r#"
            font = "Fira Code 11"
            scrollback_lines = 5000
            bold_is_bright = false
            config_reload_interval = 2.0
        "#)
        .expect("script should run");

        assert_eq!(bindings.get("font").as_str(), Some("Fira Code 11"));
        assert_eq!(bindings.get("scrollback_lines").as_integer(), Some(5000));
        assert_eq!(bindings.get("bold_is_bright").as_bool(), Some(false));
        assert_eq!(bindings.get("config_reload_interval").as_integer(), Some(2));
        assert_eq!(*bindings.get("cursor_blink"), ScriptValue::Nil);
    }

    #[test]
    fn test_captures_palette_with_holes() {
        let bindings = run(r##"
            palette = { "#000000", 42, nil, "#ffffff" }
        "##)
        .expect("script should run");

        let palette = bindings.get("palette").as_sequence().expect("sequence");
        assert_eq!(palette.len(), PALETTE_SIZE);
        assert_eq!(palette[0], ScriptValue::from("#000000"));
        assert_eq!(palette[1], ScriptValue::Integer(42));
        assert_eq!(palette[2], ScriptValue::Nil);
        assert_eq!(palette[3], ScriptValue::from("#ffffff"));
        assert_eq!(palette[15], ScriptValue::Nil);
    }

    #[test]
    fn test_script_can_compute_values() {
        let bindings = run(r##"
            local base = { "#101010", "#202020" }
            palette = {}
            for i = 1, 16 do palette[i] = base[(i - 1) % 2 + 1] end
            foreground = string.format("#%02x%02x%02x", 255, 128, 0)
            scrollback_lines = math.floor(2500 * 2)
        "##)
        .expect("script should run");

        assert_eq!(bindings.get("foreground").as_str(), Some("#ff8000"));
        assert_eq!(bindings.get("scrollback_lines").as_integer(), Some(5000));
        let palette = bindings.get("palette").as_sequence().expect("sequence");
        assert_eq!(palette[15], ScriptValue::from("#202020"));
    }

    #[test]
    fn test_other_types_are_named() {
        let bindings = run("font = function() return 'x' end").expect("script should run");
        assert_eq!(*bindings.get("font"), ScriptValue::Other("function"));
        assert_eq!(bindings.get("font").type_name(), "function");
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let result = run("font = ");
        assert!(matches!(result, Err(ConfigError::ScriptExecution { .. })));
    }

    #[test]
    fn test_runtime_error_is_reported() {
        let err = run(r#"font = "a"; error("boom")"#).expect_err("script raises");
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_unsafe_libraries_are_absent() {
        assert!(run("os.execute('true')").is_err());
        assert!(run("io.open('/etc/passwd')").is_err());
        assert!(run("require('socket')").is_err());
    }

    #[test]
    fn test_each_evaluation_is_isolated() {
        run("font = 'first'; leftover = true").expect("script should run");
        let bindings = run("if leftover then font = 'leaked' end").expect("script should run");
        assert_eq!(*bindings.get("font"), ScriptValue::Nil);
    }

    #[test]
    fn test_as_integer_rejects_fractions() {
        assert_eq!(ScriptValue::Number(2.5).as_integer(), None);
        assert_eq!(ScriptValue::Number(-3.0).as_integer(), Some(-3));
        assert_eq!(ScriptValue::from("10").as_integer(), None);
    }

    #[test]
    fn test_bindings_builder() {
        let bindings = Bindings::new()
            .with("font", "Mono 9")
            .with("cursor_blink", false);
        assert_eq!(bindings.get("font").as_str(), Some("Mono 9"));
        assert_eq!(bindings.get("cursor_blink").as_bool(), Some(false));
        assert!(!bindings.is_empty());
        assert!(Bindings::new().is_empty());
    }
}
