use async_trait::async_trait;

use crate::skill::domain::entities::SkillRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// `order` ascending, newest first within the same slot.
    async fn list(&self) -> Result<Vec<SkillRecord>, SkillRepositoryError>;

    /// Atomically swaps the whole skill set for `names`, in that order.
    async fn replace_all(&self, names: Vec<String>) -> Result<Vec<SkillRecord>, SkillRepositoryError>;
}
