mod contact;
mod storage;

pub use contact::ContactError;
pub use storage::StorageError;
