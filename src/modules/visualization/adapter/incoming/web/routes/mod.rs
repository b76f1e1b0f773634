mod list_visualizations;
mod save_visualization;

pub use list_visualizations::*;
pub use save_visualization::*;
