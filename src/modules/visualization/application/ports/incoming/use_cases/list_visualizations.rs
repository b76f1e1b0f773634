use async_trait::async_trait;

use crate::visualization::application::domain::entities::VisualizationView;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListVisualizationsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListVisualizationsUseCase: Send + Sync {
    /// `report_type` is the raw query value; `"all"` or absent lists everything.
    async fn execute(
        &self,
        report_type: Option<String>,
    ) -> Result<Vec<VisualizationView>, ListVisualizationsError>;
}
