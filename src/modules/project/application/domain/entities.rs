use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::media::application::domain::entities::ImageInfo;

/// Image shown when a project is created without an upload.
pub const DEFAULT_PROJECT_IMAGE: &str = "/project-default.jpg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub featured: bool,
    #[schema(example = "/uploads/shot-1718000000000-42.png")]
    pub image: String,
    pub image_public_id: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectRecord {
    pub fn image_info(&self) -> ImageInfo {
        ImageInfo::new(self.image.clone(), self.image_public_id.clone())
    }
}

/// "React, Node.js , ,Postgres" -> ["React", "Node.js", "Postgres"]
pub fn parse_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Form checkboxes arrive as strings; only the exact string "true" is true.
pub fn parse_featured(raw: &str) -> bool {
    raw == "true"
}
