//! Persisted user preferences.
//!
//! The only preference is the dark-mode flag. It is stored as the string
//! `"true"` or `"false"` under [`DARK_MODE_KEY`]; anything else reads as
//! light mode.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::PreferenceError;

/// Storage key for the dark-mode flag.
pub const DARK_MODE_KEY: &str = "dark-mode";

/// Toggle glyph shown while dark mode is on (click to go light).
pub const LIGHT_GLYPH: &str = "☀️";

/// Toggle glyph shown while dark mode is off.
pub const DARK_GLYPH: &str = "🌙";

/// String key/value persistence (browser localStorage in the app).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Process-local store. Clones share the same map, which lets tests
/// simulate a page reload by building a second [`Preferences`] over a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Typed access to the persisted preferences.
#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored dark-mode flag; `false` if absent or unparseable.
    pub fn load_dark_mode(&self) -> bool {
        self.store
            .get(DARK_MODE_KEY)
            .is_some_and(|value| value == "true")
    }

    pub fn save_dark_mode(&self, dark: bool) -> Result<(), PreferenceError> {
        self.store
            .set(DARK_MODE_KEY, if dark { "true" } else { "false" })
    }
}

/// Glyph for the theme toggle button.
pub fn theme_glyph(dark: bool) -> &'static str {
    if dark { LIGHT_GLYPH } else { DARK_GLYPH }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::WriteFailed(key.to_string()))
        }
    }

    #[test]
    fn test_default_is_light() {
        let prefs = Preferences::new(MemoryStore::new());
        assert!(!prefs.load_dark_mode());
    }

    #[test]
    fn test_unparseable_is_light() {
        let store = MemoryStore::new();
        store.set(DARK_MODE_KEY, "yes please").unwrap();
        assert!(!Preferences::new(store).load_dark_mode());
    }

    #[test]
    fn test_persists_across_reload() {
        let store = MemoryStore::new();
        Preferences::new(store.clone()).save_dark_mode(true).unwrap();

        // Fresh Preferences over the same backing store, as after a reload
        let reloaded = Preferences::new(store.clone());
        assert!(reloaded.load_dark_mode());

        reloaded.save_dark_mode(false).unwrap();
        assert!(!Preferences::new(store).load_dark_mode());
    }

    #[test]
    fn test_write_failure_reported() {
        let prefs = Preferences::new(ReadOnlyStore);
        assert_eq!(
            prefs.save_dark_mode(true),
            Err(PreferenceError::WriteFailed(DARK_MODE_KEY.to_string()))
        );
        assert!(!prefs.load_dark_mode());
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(theme_glyph(true), "☀️");
        assert_eq!(theme_glyph(false), "🌙");
    }
}
