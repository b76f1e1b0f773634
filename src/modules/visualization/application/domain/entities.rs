use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::media::application::domain::entities::ImageInfo;

/// Value of the `reportType` query parameter that disables filtering.
pub const ALL_REPORT_TYPES: &str = "all";

/// A rendered chart image, keyed by `(visualization_id, report_type)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizationRecord {
    pub id: Uuid,
    pub visualization_id: String,
    pub report_type: String,
    pub image_url: String,
    pub image_public_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl VisualizationRecord {
    /// Timestamp used to decide which record is the latest.
    pub fn last_touched(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    pub fn image_info(&self) -> ImageInfo {
        ImageInfo::new(self.image_url.clone(), self.image_public_id.clone())
    }
}

/// Outward shape of a visualization. `id` is the visualization id, not the
/// row id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationView {
    #[schema(example = "revenue_by_region")]
    pub id: String,
    pub visualization_id: String,
    #[schema(example = "sales")]
    pub report_type: String,
    pub image_url: String,
    pub image_public_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<VisualizationRecord> for VisualizationView {
    fn from(record: VisualizationRecord) -> Self {
        Self {
            id: record.visualization_id.clone(),
            visualization_id: record.visualization_id,
            report_type: record.report_type,
            image_url: record.image_url,
            image_public_id: record.image_public_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// `None` means every report type.
pub fn report_type_filter(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty() && *v != ALL_REPORT_TYPES)
        .map(str::to_string)
}

/// Base name local files are stored under.
pub fn storage_name_hint(visualization_id: &str, report_type: &str) -> String {
    format!("{report_type}_{visualization_id}")
}
