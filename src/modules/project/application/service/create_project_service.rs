use async_trait::async_trait;
use tracing::{error, info};

use super::non_blank;
use crate::media::application::domain::entities::{AssetFolder, ImageInfo, UploadedFile};
use crate::media::application::services::MediaStorage;
use crate::project::application::domain::entities::{
    parse_featured, parse_technologies, ProjectRecord, DEFAULT_PROJECT_IMAGE,
};
use crate::project::application::domain::media_normalizer::normalize_project_media;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, ProjectForm,
};
use crate::project::application::ports::outgoing::{NewProject, ProjectRepository};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
    media: MediaStorage,
}

impl<R> CreateProjectService<R>
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
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        form: ProjectForm,
        image: Option<UploadedFile>,
    ) -> Result<ProjectRecord, CreateProjectError> {
        let (Some(title), Some(description)) =
            (non_blank(form.title), non_blank(form.description))
        else {
            return Err(CreateProjectError::Validation(
                "Title and description are required".to_string(),
            ));
        };

        let stored = match image {
            Some(file) => Some(self.media.store(&file, AssetFolder::Uploads, None).await?),
            None => None,
        };
        let ImageInfo {
            image_url,
            image_public_id,
        } = stored.clone().unwrap_or_default();

        let data = NewProject {
            title,
            description,
            technologies: form
                .technologies
                .as_deref()
                .map(parse_technologies)
                .unwrap_or_default(),
            github: non_blank(form.github),
            demo: non_blank(form.demo),
            featured: form.featured.as_deref().is_some_and(parse_featured),
            image: image_url.unwrap_or_else(|| DEFAULT_PROJECT_IMAGE.to_string()),
            image_public_id,
        };

        match self.project_repository.create(data).await {
            Ok(project) => {
                info!(project_id = %project.id, order = project.order, "Project created");
                Ok(normalize_project_media(project))
            }
            Err(e) => {
                error!(error = %e, "Failed to persist project");
                if let Some(asset) = stored {
                    self.media.discard(&asset).await;
                }
                Err(CreateProjectError::RepositoryError(e.to_string()))
            }
        }
    }
}
