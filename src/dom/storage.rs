//! `localStorage`-backed preference store.

use web_sys::{Storage, Window};

use crate::error::Error;
use crate::preference::{MemoryStore, PreferenceStore};

/// The browser's storage when reachable, an in-memory map when not
/// (private browsing, storage disabled, sandboxed frames).
pub enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    #[must_use]
    pub fn open(window: &Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => Self::Local(storage),
            Ok(None) => {
                log::warn!("localStorage unavailable; theme preference will not persist");
                Self::Memory(MemoryStore::new())
            }
            Err(err) => {
                log::warn!("localStorage blocked: {}", Error::from(err));
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => match storage.get_item(key) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("failed to read {key}: {}", Error::from(err));
                    None
                }
            },
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match self {
            Self::Local(storage) => {
                if let Err(err) = storage.set_item(key, value) {
                    log::warn!("failed to write {key}: {}", Error::from(err));
                }
            }
            Self::Memory(store) => store.set(key, value),
        }
    }
}
