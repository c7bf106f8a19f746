//! Section-addressed configuration access port trait.

use crate::domain::value::IniValue;

/// Typed lookups addressed by `(section, key)`, independent of any selected
/// section. Implementors only supply [`value`](Self::value).
pub trait ConfigPort {
    fn value(&self, section: &str, key: &str) -> Option<&IniValue>;

    /// Flags render as `1` / `0`.
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.value(section, key).map(IniValue::to_string)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.value(section, key)
            .and_then(IniValue::as_int)
            .unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.value(section, key)
            .and_then(IniValue::as_double)
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.value(section, key)
            .and_then(IniValue::as_bool)
            .unwrap_or(default)
    }
}
