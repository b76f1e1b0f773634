mod media_storage;

pub use media_storage::{MediaStorage, MediaStoreError};
