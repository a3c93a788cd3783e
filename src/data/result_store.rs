use std::sync::RwLock;

use crate::error::StorageError;

/// Session-storage key holding the latest search response.
pub const RESULTS_KEY: &str = "bookingResults";

/// Holder of the single outstanding search payload. A save replaces whatever
/// was there before.
pub trait ResultStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, payload: &str) -> Result<(), StorageError>;
}

/// The browser tab's `sessionStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionResultStore;

impl SessionResultStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .session_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl ResultStore for SessionResultStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(RESULTS_KEY)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(RESULTS_KEY, payload)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

#[derive(Debug, Default)]
pub struct MemoryResultStore {
    slot: RwLock<Option<String>>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(payload.into())),
        }
    }
}

impl ResultStore for MemoryResultStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        self.slot
            .read()
            .map(|slot| slot.clone())
            .map_err(|e| StorageError::Access(e.to_string()))
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| StorageError::Access(e.to_string()))?;
        *slot = Some(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_last_write_wins() {
        let store = MemoryResultStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save(r#"{"resultId":"first"}"#).unwrap();
        store.save(r#"{"resultId":"second"}"#).unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some(r#"{"resultId":"second"}"#));
    }
}
