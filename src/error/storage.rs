use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    Unavailable(String),
    Access(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
            StorageError::Access(msg) => write!(f, "Storage Access Error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}
