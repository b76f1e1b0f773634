use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::domain::entities::ProfileRecord;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub profile_image: String,
    pub profile_image_public_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub github: PatchField<String>,
    pub linkedin: PatchField<String>,
    pub profile_image: Option<String>,
    pub profile_image_public_id: PatchField<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// The most recently created profile, if any.
    async fn find_current(&self) -> Result<Option<ProfileRecord>, ProfileRepositoryError>;

    async fn create(&self, data: NewProfile) -> Result<ProfileRecord, ProfileRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        changes: ProfileChanges,
    ) -> Result<ProfileRecord, ProfileRepositoryError>;
}
