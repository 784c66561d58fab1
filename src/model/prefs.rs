//! Persistence backend abstraction for user preferences.
//!
//! The config store talks to a `PrefsStore` instead of NSUserDefaults
//! directly so the whole config layer can be exercised in plain tests.
//! The macOS implementation lives in `platform::macos::storage`.

use std::collections::HashMap;

/// Typed key/value backend for persisted preferences.
///
/// Writes are fire-and-forget: the indicator does not depend on successful
/// persistence, so implementations absorb failures silently.
pub trait PrefsStore {
    /// Read a float, `None` if the key was never written.
    fn get_f64(&self, key: &str) -> Option<f64>;

    /// Persist a float.
    fn set_f64(&mut self, key: &str, val: f64);

    /// Read a bool, `None` if the key was never written.
    fn get_bool(&self, key: &str) -> Option<bool>;

    /// Persist a bool.
    fn set_bool(&mut self, key: &str, val: bool);

    /// Read a string, `None` if the key was never written.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Persist a string.
    fn set_string(&mut self, key: &str, val: &str);
}

/// A persisted value in the in-memory backend.
#[derive(Debug, Clone, PartialEq)]
enum PrefValue {
    Float(f64),
    Bool(bool),
    Text(String),
}

/// In-memory `PrefsStore` used by tests and as a fallback when the
/// platform backend is unavailable.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    values: HashMap<String, PrefValue>,
}

impl MemoryPrefs {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys written so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PrefsStore for MemoryPrefs {
    fn get_f64(&self, key: &str) -> Option<f64> {
        match self.values.get(key) {
            Some(PrefValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    fn set_f64(&mut self, key: &str, val: f64) {
        self.values.insert(key.to_string(), PrefValue::Float(val));
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(PrefValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    fn set_bool(&mut self, key: &str, val: bool) {
        self.values.insert(key.to_string(), PrefValue::Bool(val));
    }

    fn get_string(&self, key: &str) -> Option<String> {
        match self.values.get(key) {
            Some(PrefValue::Text(v)) => Some(v.clone()),
            _ => None,
        }
    }

    fn set_string(&mut self, key: &str, val: &str) {
        self.values
            .insert(key.to_string(), PrefValue::Text(val.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_prefs_round_trips_each_type() {
        let mut prefs = MemoryPrefs::new();
        prefs.set_f64("size", 18.0);
        prefs.set_bool("flag", true);
        prefs.set_string("color", "#FFFFFF");

        assert_eq!(prefs.get_f64("size"), Some(18.0));
        assert_eq!(prefs.get_bool("flag"), Some(true));
        assert_eq!(prefs.get_string("color").as_deref(), Some("#FFFFFF"));
    }

    #[test]
    fn memory_prefs_missing_keys_are_none() {
        let prefs = MemoryPrefs::new();
        assert_eq!(prefs.get_f64("size"), None);
        assert_eq!(prefs.get_bool("flag"), None);
        assert_eq!(prefs.get_string("color"), None);
    }

    #[test]
    fn memory_prefs_type_mismatch_is_none() {
        let mut prefs = MemoryPrefs::new();
        prefs.set_string("size", "18");
        assert_eq!(prefs.get_f64("size"), None);
    }
}
