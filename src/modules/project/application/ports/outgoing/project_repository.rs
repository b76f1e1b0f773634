use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::domain::entities::ProjectRecord;
use crate::shared::patch::PatchField;

// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────

/// Fully coerced values for a new project. The repository assigns `order`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub featured: bool,
    pub image: String,
    pub image_public_id: Option<String>,
}

/// Partial update. `None` / `Unset` keep the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub github: PatchField<String>,
    pub demo: PatchField<String>,
    pub featured: Option<bool>,
    pub order: Option<i32>,
    pub image: Option<String>,
    pub image_public_id: PatchField<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Display order: `order` ascending, newest first within the same slot.
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProjectRecord>, ProjectRepositoryError>;

    /// Appends the project after the current highest `order`.
    async fn create(&self, data: NewProject) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        changes: ProjectChanges,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    /// Returns the removed record, or `None` when nothing matched.
    async fn delete(&self, id: Uuid) -> Result<Option<ProjectRecord>, ProjectRepositoryError>;
}
