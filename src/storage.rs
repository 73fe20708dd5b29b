//! Profile Storage
//!
//! Key-value store abstraction over browser local storage, and the profile
//! store built on top of it.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use crate::error::{AppError, AppResult};
use crate::models::Profile;

/// Minimal string key-value capability
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> AppResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| AppError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AppError::Storage("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Profile persistence: JSON blob under a single key
pub struct ProfileStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored profile, `None` if nothing was saved yet
    pub fn load(&self) -> AppResult<Option<Profile>> {
        match self.store.get(&self.key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn save(&self, profile: &Profile) -> AppResult<()> {
        let raw = serde_json::to_string(profile)?;
        self.store.set(&self.key, &raw)?;
        log::debug!("[STORAGE] saved profile for {}", profile.name);
        Ok(())
    }

    pub fn clear(&self) -> AppResult<()> {
        self.store.remove(&self.key)?;
        log::debug!("[STORAGE] cleared profile");
        Ok(())
    }

    /// Load, dropping an unreadable blob instead of failing
    pub fn load_or_reset(&self) -> Option<Profile> {
        match self.load() {
            Ok(profile) => profile,
            Err(AppError::Corrupt(msg)) => {
                log::warn!("[STORAGE] discarding corrupt profile: {}", msg);
                if let Err(e) = self.clear() {
                    log::error!("[STORAGE] failed to clear profile: {}", e);
                }
                None
            }
            Err(e) => {
                log::error!("[STORAGE] failed to load profile: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileType;

    const KEY: &str = "test.profile";

    fn make_profile() -> Profile {
        Profile {
            name: "Ada".to_string(),
            profile_type: ProfileType::Professional,
            target_role: "Backend Engineer".to_string(),
            skills: vec!["rust".to_string(), "sql".to_string()],
            location: Some("Berlin".to_string()),
            coordinates: None,
            years_experience: 4,
            remote_ok: true,
            previous_field: None,
            graduation_year: None,
            wants_internship: false,
            language: "en".to_string(),
        }
    }

    #[test]
    fn test_load_empty_store() {
        let store = ProfileStore::new(MemoryStore::default(), KEY);
        assert_eq!(store.load(), Ok(None));
    }

    #[test]
    fn test_save_then_load() {
        let store = ProfileStore::new(MemoryStore::default(), KEY);
        let profile = make_profile();
        store.save(&profile).unwrap();
        assert_eq!(store.load().unwrap(), Some(profile));
    }

    #[test]
    fn test_clear_removes_profile() {
        let store = ProfileStore::new(MemoryStore::default(), KEY);
        store.save(&make_profile()).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_blob() {
        let kv = MemoryStore::default();
        kv.set(KEY, "{not json").unwrap();
        let store = ProfileStore::new(kv, KEY);
        assert!(matches!(store.load(), Err(AppError::Corrupt(_))));
        assert_eq!(store.load_or_reset(), None);
        // the bad blob is gone afterwards
        assert_eq!(store.load(), Ok(None));
    }
}
