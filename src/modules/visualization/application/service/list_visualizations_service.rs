use async_trait::async_trait;

use crate::visualization::application::domain::dedup::latest_per_visualization;
use crate::visualization::application::domain::entities::{
    report_type_filter, VisualizationView,
};
use crate::visualization::application::ports::incoming::use_cases::{
    ListVisualizationsError, ListVisualizationsUseCase,
};
use crate::visualization::application::ports::outgoing::VisualizationRepository;

pub struct ListVisualizationsService<R>
where
    R: VisualizationRepository,
{
    repository: R,
}

impl<R> ListVisualizationsService<R>
where
    R: VisualizationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListVisualizationsUseCase for ListVisualizationsService<R>
where
    R: VisualizationRepository + Send + Sync,
{
    async fn execute(
        &self,
        report_type: Option<String>,
    ) -> Result<Vec<VisualizationView>, ListVisualizationsError> {
        let filter = report_type_filter(report_type.as_deref());
        let records = self
            .repository
            .list(filter.as_deref())
            .await
            .map_err(|e| ListVisualizationsError::RepositoryError(e.to_string()))?;

        Ok(latest_per_visualization(records)
            .into_iter()
            .map(VisualizationView::from)
            .collect())
    }
}
