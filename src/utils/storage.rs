//! localStorage-backed preference backend.

use super::dom;
use crate::core::PreferenceBackend;
use crate::core::error::StorageError;

/// Reads and writes `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

impl PreferenceBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|_| StorageError::ReadFailed)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }
}
