use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use super::non_blank;
use crate::media::application::domain::entities::{AssetFolder, UploadedFile};
use crate::media::application::services::MediaStorage;
use crate::project::application::domain::entities::{
    parse_featured, parse_technologies, ProjectRecord,
};
use crate::project::application::domain::media_normalizer::normalize_project_media;
use crate::project::application::ports::incoming::use_cases::{
    ProjectForm, UpdateProjectError, UpdateProjectUseCase,
};
use crate::project::application::ports::outgoing::{
    ProjectChanges, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::patch::PatchField;

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
    media: MediaStorage,
}

impl<R> UpdateProjectService<R>
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

/// A submitted but blank title or description is an error, not a no-op.
fn required_change(value: Option<String>, field: &str) -> Result<Option<String>, UpdateProjectError> {
    match value {
        None => Ok(None),
        Some(v) => non_blank(Some(v))
            .map(Some)
            .ok_or_else(|| UpdateProjectError::Validation(format!("{field} cannot be empty"))),
    }
}

fn parse_order(value: Option<String>) -> Result<Option<i32>, UpdateProjectError> {
    match non_blank(value) {
        None => Ok(None),
        Some(v) => v
            .parse::<i32>()
            .map(Some)
            .map_err(|_| UpdateProjectError::Validation("order must be an integer".to_string())),
    }
}

fn changes_from_form(form: ProjectForm) -> Result<ProjectChanges, UpdateProjectError> {
    Ok(ProjectChanges {
        title: required_change(form.title, "title")?,
        description: required_change(form.description, "description")?,
        technologies: form.technologies.as_deref().map(parse_technologies),
        github: PatchField::from_form(form.github),
        demo: PatchField::from_form(form.demo),
        featured: form.featured.as_deref().map(parse_featured),
        order: parse_order(form.order)?,
        ..Default::default()
    })
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        form: ProjectForm,
        image: Option<UploadedFile>,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        let existing = self
            .project_repository
            .find_by_id(id)
            .await
            .map_err(|e| UpdateProjectError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProjectError::NotFound)?;

        let mut changes = changes_from_form(form)?;

        let replacement = match image {
            Some(file) => Some(self.media.store(&file, AssetFolder::Uploads, None).await?),
            None => None,
        };
        if let Some(new_image) = &replacement {
            changes.image = new_image.image_url.clone();
            changes.image_public_id = match &new_image.image_public_id {
                Some(public_id) => PatchField::Value(public_id.clone()),
                None => PatchField::Null,
            };
        }

        let updated = match self.project_repository.update(id, changes).await {
            Ok(project) => project,
            Err(e) => {
                if let Some(new_image) = &replacement {
                    self.media.discard(new_image).await;
                }
                return Err(match e {
                    ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
                    ProjectRepositoryError::DatabaseError(msg) => {
                        error!(project_id = %id, error = %msg, "Failed to update project");
                        UpdateProjectError::RepositoryError(msg)
                    }
                });
            }
        };

        if let Some(new_image) = &replacement {
            self.media
                .discard_replaced(&existing.image_info(), new_image)
                .await;
        }

        info!(project_id = %id, "Project updated");
        Ok(normalize_project_media(updated))
    }
}
