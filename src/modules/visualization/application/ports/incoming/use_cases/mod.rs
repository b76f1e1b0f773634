mod list_visualizations;
mod save_visualization;

pub use list_visualizations::{ListVisualizationsError, ListVisualizationsUseCase};
pub use save_visualization::{SaveVisualizationError, SaveVisualizationUseCase, VisualizationForm};
