use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::profile::application::ports::outgoing::{
    NewProfile, ProfileChanges, ProfileRepository, ProfileRepositoryError,
};
use crate::profile::domain::entities::{default_profile, ProfileView};
use crate::shared::patch::PatchField;

/// Partial profile body. Omitted keys keep their stored value; `github` and
/// `linkedin` may be cleared with `null` or an empty string.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub github: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub linkedin: PatchField<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpsertProfileError {
    #[error("{0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for UpsertProfileError {
    fn from(e: ProfileRepositoryError) -> Self {
        UpsertProfileError::RepositoryError(e.to_string())
    }
}

#[async_trait]
pub trait IUpsertProfileUseCase: Send + Sync {
    async fn execute(&self, update: ProfileUpdate) -> Result<ProfileView, UpsertProfileError>;
}

#[derive(Debug, Clone)]
pub struct UpsertProfileUseCase<R: ProfileRepository> {
    repository: R,
}

impl<R: ProfileRepository> UpsertProfileUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn required(value: Option<String>, field: &str) -> Result<Option<String>, UpsertProfileError> {
    match value {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Err(UpsertProfileError::Validation(format!(
            "{field} cannot be empty"
        ))),
        Some(v) => Ok(Some(v.trim().to_string())),
    }
}

fn link(patch: PatchField<String>) -> PatchField<String> {
    match patch {
        PatchField::Value(v) => PatchField::from_form(Some(v)),
        other => other,
    }
}

/// Trims and validates every provided field.
fn validated_changes(update: ProfileUpdate) -> Result<ProfileChanges, UpsertProfileError> {
    let email = required(update.email, "email")?
        .map(|e| e.to_lowercase())
        .map(|e| {
            if EmailAddress::is_valid(&e) {
                Ok(e)
            } else {
                Err(UpsertProfileError::Validation("Invalid email address".to_string()))
            }
        })
        .transpose()?;

    Ok(ProfileChanges {
        name: required(update.name, "name")?,
        title: required(update.title, "title")?,
        bio: required(update.bio, "bio")?,
        email,
        github: link(update.github),
        linkedin: link(update.linkedin),
        ..Default::default()
    })
}

pub(crate) fn new_profile_from_defaults(changes: ProfileChanges) -> NewProfile {
    let defaults = default_profile();
    let mut github = defaults.github;
    let mut linkedin = defaults.linkedin;
    let mut profile_image_public_id = None;
    changes.github.apply_to(&mut github);
    changes.linkedin.apply_to(&mut linkedin);
    changes
        .profile_image_public_id
        .apply_to(&mut profile_image_public_id);

    NewProfile {
        name: changes.name.unwrap_or(defaults.name),
        title: changes.title.unwrap_or(defaults.title),
        bio: changes.bio.unwrap_or(defaults.bio),
        email: changes.email.unwrap_or(defaults.email),
        github,
        linkedin,
        profile_image: changes.profile_image.unwrap_or(defaults.profile_image),
        profile_image_public_id,
    }
}

#[async_trait]
impl<R: ProfileRepository + Sync + Send> IUpsertProfileUseCase for UpsertProfileUseCase<R> {
    async fn execute(&self, update: ProfileUpdate) -> Result<ProfileView, UpsertProfileError> {
        let changes = validated_changes(update)?;

        let saved = match self.repository.find_current().await? {
            Some(existing) => self.repository.update(existing.id, changes).await?,
            None => {
                let created = self
                    .repository
                    .create(new_profile_from_defaults(changes))
                    .await?;
                info!(profile_id = %created.id, "Created profile");
                created
            }
        };

        Ok(saved.into())
    }
}
