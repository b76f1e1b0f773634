mod storage_backend;

pub use storage_backend::{DeleteOutcome, SaveRequest, StorageBackend, StorageError};
