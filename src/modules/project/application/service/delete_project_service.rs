use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::media::application::services::MediaStorage;
use crate::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::project::application::ports::outgoing::ProjectRepository;

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
    media: MediaStorage,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R, media: MediaStorage) -> Self {
        Self {
            project_repository,
            media,
        }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProjectError> {
        let removed = self
            .project_repository
            .delete(id)
            .await
            .map_err(|e| DeleteProjectError::RepositoryError(e.to_string()))?
            .ok_or(DeleteProjectError::NotFound)?;

        let cleanup = self.media.discard_remote_asset(&removed.image_info()).await;
        info!(project_id = %id, ?cleanup, "Project deleted");

        Ok(())
    }
}
