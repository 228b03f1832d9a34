//! Browser Storage
//!
//! `localStorage` behind the core's key-value port.

use lost_found_core::repository::{KeyValueStorage, MemoryStorage, StorageError};

/// `window.localStorage`, or process memory when the browser refuses it
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn open() -> Self {
        let local = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        match local {
            Some(storage) => BrowserStorage::Local(storage),
            None => {
                log::warn!("localStorage unavailable, session will not survive reloads");
                BrowserStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStorage::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStorage::Local(storage) => storage.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            }),
            BrowserStorage::Memory(memory) => memory.set(key, value),
        }
    }

    fn remove(&self, key: &str) {
        match self {
            BrowserStorage::Local(storage) => {
                if let Err(e) = storage.remove_item(key) {
                    log::warn!("could not remove {}: {:?}", key, e);
                }
            }
            BrowserStorage::Memory(memory) => memory.remove(key),
        }
    }
}
