pub mod cloudinary;
pub mod local_disk;
pub mod storage_selector;

pub use cloudinary::{CloudinaryBackend, HttpCloudinaryClient};
pub use local_disk::LocalDiskBackend;
pub use storage_selector::{select_backend, CloudinaryCredentials, StorageConfig};
