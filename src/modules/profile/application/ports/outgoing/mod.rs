mod profile_repository;

pub use profile_repository::{NewProfile, ProfileChanges, ProfileRepository, ProfileRepositoryError};
