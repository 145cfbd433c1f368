//! localStorage adapter for the preference store.

use ceamap_core::{KeyValueStore, PreferenceError};

use super::dom;

/// [`KeyValueStore`] over `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let storage = dom::local_storage().ok_or(PreferenceError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| PreferenceError::WriteFailed(key.to_string()))
    }
}
