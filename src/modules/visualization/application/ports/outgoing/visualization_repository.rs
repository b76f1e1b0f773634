use async_trait::async_trait;

use crate::visualization::application::domain::entities::VisualizationRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizationUpsert {
    pub visualization_id: String,
    pub report_type: String,
    pub image_url: String,
    pub image_public_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VisualizationRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VisualizationRepository: Send + Sync {
    async fn find_by_key(
        &self,
        visualization_id: &str,
        report_type: &str,
    ) -> Result<Option<VisualizationRecord>, VisualizationRepositoryError>;

    /// Inserts, or overwrites the image of the row with the same key.
    async fn upsert(
        &self,
        data: VisualizationUpsert,
    ) -> Result<VisualizationRecord, VisualizationRepositoryError>;

    /// Rows newest first, optionally restricted to one report type.
    async fn list(
        &self,
        report_type: Option<&str>,
    ) -> Result<Vec<VisualizationRecord>, VisualizationRepositoryError>;
}
