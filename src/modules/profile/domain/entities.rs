use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::media::application::domain::entities::ImageInfo;

pub const DEFAULT_PROFILE_IMAGE: &str = "/profile.jpg";

/// The stored owner profile. There is at most one meaningful row; the newest
/// one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub profile_image: String,
    pub profile_image_public_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileRecord {
    pub fn image_info(&self) -> ImageInfo {
        ImageInfo::new(self.profile_image.clone(), self.profile_image_public_id.clone())
    }
}

/// Outward shape. `id` and timestamps are absent for the built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[schema(example = "John Doe")]
    pub name: String,
    pub title: String,
    pub bio: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    #[schema(example = "/profile.jpg")]
    pub profile_image: String,
    pub profile_image_public_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ProfileRecord> for ProfileView {
    fn from(p: ProfileRecord) -> Self {
        Self {
            id: Some(p.id),
            name: p.name,
            title: p.title,
            bio: p.bio,
            email: p.email,
            github: p.github,
            linkedin: p.linkedin,
            profile_image: p.profile_image,
            profile_image_public_id: p.profile_image_public_id,
            created_at: Some(p.created_at),
            updated_at: Some(p.updated_at),
        }
    }
}

/// Shown until the owner saves a profile, and the source of any required
/// field missing when the first one is created.
pub fn default_profile() -> ProfileView {
    ProfileView {
        id: None,
        name: "John Doe".to_string(),
        title: "Full-Stack Developer & UI/UX Designer".to_string(),
        bio: "Passionate about creating beautiful, functional, and user-centered digital experiences."
            .to_string(),
        email: "john@example.com".to_string(),
        github: Some("https://github.com".to_string()),
        linkedin: Some("https://linkedin.com".to_string()),
        profile_image: DEFAULT_PROFILE_IMAGE.to_string(),
        profile_image_public_id: None,
        created_at: None,
        updated_at: None,
    }
}
