pub mod project_repository;

pub use project_repository::{NewProject, ProjectChanges, ProjectRepository, ProjectRepositoryError};
