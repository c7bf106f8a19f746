//! Scalar values stored under a key.

use std::fmt;

/// Marker that truncates a raw value at its first occurrence.
pub const VALUE_DELIMITER: char = ';';

/// A single INI value after coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IniValue {
    Bool(bool),
    Text(String),
}

impl IniValue {
    /// Coerce a raw value as written after the `=` of a key line.
    ///
    /// The raw text is cut at the first `;` and trimmed. A value wrapped in
    /// double quotes loses the quotes and stays text, as does a value whose
    /// closing quote was cut off by the `;`; otherwise `1`, `true`,
    /// `yes`, `on` become `Bool(true)` and `0`, `false`, `no`, `off` become
    /// `Bool(false)`, ignoring ASCII case.
    pub fn coerce(raw: &str) -> Self {
        let value = match raw.find(VALUE_DELIMITER) {
            Some(idx) => &raw[..idx],
            None => raw,
        }
        .trim();

        if let Some(inner) = strip_quotes(value) {
            return IniValue::Text(inner.to_string());
        }

        match parse_bool_token(value) {
            Some(b) => IniValue::Bool(b),
            None => IniValue::Text(value.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            IniValue::Text(s) => Some(s),
            IniValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            IniValue::Bool(b) => Some(*b),
            IniValue::Text(_) => None,
        }
    }

    /// Integer view: booleans count as 1/0, text must parse as `i64`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            IniValue::Bool(b) => Some(i64::from(*b)),
            IniValue::Text(s) => s.parse().ok(),
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            IniValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            IniValue::Text(s) => s.parse().ok(),
        }
    }
}

fn strip_quotes(value: &str) -> Option<&str> {
    let rest = value.strip_prefix('"')?;
    match rest.strip_suffix('"') {
        Some(inner) => Some(inner),
        // Opening quote whose partner was truncated away.
        None if !rest.contains('"') => Some(rest.trim_start()),
        None => None,
    }
}

fn parse_bool_token(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl fmt::Display for IniValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IniValue::Bool(true) => f.write_str("1"),
            IniValue::Bool(false) => f.write_str("0"),
            IniValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for IniValue {
    fn from(b: bool) -> Self {
        IniValue::Bool(b)
    }
}

impl From<&str> for IniValue {
    fn from(s: &str) -> Self {
        IniValue::Text(s.to_string())
    }
}

impl PartialEq<str> for IniValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for IniValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
