mod list_visualizations_service;
mod save_visualization_service;

pub use list_visualizations_service::ListVisualizationsService;
pub use save_visualization_service::SaveVisualizationService;
