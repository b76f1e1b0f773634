use async_trait::async_trait;

use crate::project::application::domain::entities::ProjectRecord;
use crate::project::application::domain::media_normalizer::normalize_project_media;
use crate::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::project::application::ports::outgoing::ProjectRepository;

pub struct GetProjectsService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> GetProjectsService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> GetProjectsUseCase for GetProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProjectRecord>, GetProjectsError> {
        let projects = self
            .project_repository
            .list()
            .await
            .map_err(|e| GetProjectsError::RepositoryError(e.to_string()))?;

        Ok(projects.into_iter().map(normalize_project_media).collect())
    }
}
