use crate::error::StorageError;
use crate::utils::PreferenceStore;

/// Storage that is disabled outright, as in a locked-down browser profile.
#[derive(Debug, Default)]
pub struct DisabledStore {
    pub attempted_writes: usize,
}

impl PreferenceStore for DisabledStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.attempted_writes += 1;
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }
}

/// Reads succeed, writes fail (quota exceeded).
#[derive(Debug, Default)]
pub struct FullStore {
    pub stored_theme: Option<String>,
}

impl PreferenceStore for FullStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.stored_theme.clone())
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("QuotaExceededError".to_string()))
    }
}
