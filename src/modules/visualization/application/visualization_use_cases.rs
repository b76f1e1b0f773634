use std::sync::Arc;

use crate::visualization::application::ports::incoming::use_cases::{
    ListVisualizationsUseCase, SaveVisualizationUseCase,
};

#[derive(Clone)]
pub struct VisualizationUseCases {
    pub save: Arc<dyn SaveVisualizationUseCase + Send + Sync>,
    pub list: Arc<dyn ListVisualizationsUseCase + Send + Sync>,
}
