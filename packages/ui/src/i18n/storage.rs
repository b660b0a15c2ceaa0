use std::cell::{Cell, RefCell};
use std::rc::Rc;

use thiserror::Error;

/// The single slot the selected language is persisted under.
pub const STORAGE_KEY: &str = "shrine_lang";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("persistent storage is unavailable")]
    Unavailable,
    #[error("storage rejected the operation: {0}")]
    Rejected(String),
}

/// Get/set access to the one persisted language slot.
///
/// Values are plain language codes. Implementations do not validate them;
/// the session decides what a stored value means.
pub trait LanguageStorage {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, code: &str) -> Result<(), StorageError>;
}

/// In-process slot. Used where there is no browser storage (server-side
/// rendering) and in tests, where a shared `Rc` stands in for storage that
/// outlives a session.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    value: RefCell<Option<String>>,
    fail_loads: Cell<bool>,
    fail_saves: Cell<bool>,
}

impl MemoryStorage {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(value.into())),
            ..Self::default()
        }
    }

    /// Current raw contents of the slot.
    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.set(fail);
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl LanguageStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if self.fail_loads.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(self.value())
    }

    fn save(&self, code: &str) -> Result<(), StorageError> {
        if self.fail_saves.get() {
            return Err(StorageError::Rejected("quota exceeded".to_string()));
        }
        *self.value.borrow_mut() = Some(code.to_string());
        Ok(())
    }
}

/// `window.localStorage`, keyed by [`STORAGE_KEY`].
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    key: &'static str,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl LanguageStorage for BrowserStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(self.key)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }

    fn save(&self, code: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(self.key, code)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
}

/// Storage for the current platform: the browser's local storage on wasm,
/// a throw-away in-memory slot elsewhere.
pub fn platform_storage() -> Rc<dyn LanguageStorage> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStorage::new(STORAGE_KEY))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryStorage::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_keeps_last_write() {
        let storage = MemoryStorage::default();
        assert_eq!(storage.load(), Ok(None));
        storage.save("ta").unwrap();
        storage.save("en").unwrap();
        assert_eq!(storage.load(), Ok(Some("en".to_string())));
    }

    #[test]
    fn memory_storage_can_fail_on_demand() {
        let storage = MemoryStorage::with_value("ta");
        storage.set_fail_loads(true);
        storage.set_fail_saves(true);
        assert_eq!(storage.load(), Err(StorageError::Unavailable));
        assert!(storage.save("en").is_err());
        assert_eq!(storage.value().as_deref(), Some("ta"));
    }
}
