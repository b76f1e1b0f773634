pub mod visualizations;
