use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use crate::error::StorageError;

pub const SELECTED_THEME_KEY: &str = "selectedTheme";
pub const DARK_MODE_KEY: &str = "darkMode";
pub const INTRO_SHOWN_KEY: &str = "introShown";

/// Synchronous key-value preference storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Reads a key, treating any storage failure as "not set".
pub fn read_pref<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Ignoring failed read of '{}': {}", key, e);
            None
        }
    }
}

/// Writes a key, swallowing failures.
pub fn write_pref<S: PreferenceStore + ?Sized>(store: &mut S, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::debug!("Ignoring failed write of '{}': {}", key, e);
    }
}

/// Stored dark-mode flag, if present and parseable.
pub fn read_dark_mode<S: PreferenceStore + ?Sized>(store: &S) -> Option<bool> {
    read_pref(store, DARK_MODE_KEY).and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
}

pub fn write_dark_mode<S: PreferenceStore + ?Sized>(store: &mut S, is_dark: bool) {
    let raw = serde_json::to_string(&is_dark).unwrap_or_else(|_| "false".to_string());
    write_pref(store, DARK_MODE_KEY, &raw);
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::PreferenceStore;
    use crate::error::StorageError;

    #[derive(Clone, Copy, Debug, PartialEq)]
    pub enum StorageArea {
        Local,
        Session,
    }

    /// `window.localStorage` / `window.sessionStorage`.
    #[derive(Clone, Copy, Debug)]
    pub struct BrowserStore {
        area: StorageArea,
    }

    impl BrowserStore {
        pub fn local() -> Self {
            Self { area: StorageArea::Local }
        }

        pub fn session() -> Self {
            Self { area: StorageArea::Session }
        }

        fn storage(&self) -> Result<web_sys::Storage, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
            let storage = match self.area {
                StorageArea::Local => window.local_storage(),
                StorageArea::Session => window.session_storage(),
            };
            storage
                .map_err(|e| StorageError::Access(format!("{:?}", e)))?
                .ok_or_else(|| StorageError::Unavailable(format!("{:?} storage disabled", self.area)))
        }
    }

    impl PreferenceStore for BrowserStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage()?
                .get_item(key)
                .map_err(|e| StorageError::Access(format!("{:?}", e)))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Access(format!("{:?}", e)))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

/// Store backing durable preferences on this platform.
#[cfg(target_arch = "wasm32")]
pub type AppStore = BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub type AppStore = MemoryStore;

#[cfg(target_arch = "wasm32")]
pub fn local_store() -> AppStore {
    BrowserStore::local()
}

#[cfg(target_arch = "wasm32")]
pub fn session_store() -> AppStore {
    BrowserStore::session()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_store() -> AppStore {
    thread_local! {
        static LOCAL: MemoryStore = MemoryStore::new();
    }
    LOCAL.with(|store| store.clone())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn session_store() -> AppStore {
    thread_local! {
        static SESSION: MemoryStore = MemoryStore::new();
    }
    SESSION.with(|store| store.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let mut writer = store.clone();
        write_pref(&mut writer, SELECTED_THEME_KEY, "theme3");
        assert_eq!(read_pref(&store, SELECTED_THEME_KEY).as_deref(), Some("theme3"));
    }

    #[test]
    fn test_dark_mode_round_trips_as_json_bool() {
        let mut store = MemoryStore::new();
        assert_eq!(read_dark_mode(&store), None);
        write_dark_mode(&mut store, true);
        assert_eq!(store.snapshot().get(DARK_MODE_KEY).map(String::as_str), Some("true"));
        assert_eq!(read_dark_mode(&store), Some(true));
    }

    #[test]
    fn test_unparseable_dark_mode_is_ignored() {
        let store = MemoryStore::new().with_entry(DARK_MODE_KEY, "yes please");
        assert_eq!(read_dark_mode(&store), None);
    }
}
