mod visualization_repository;

pub use visualization_repository::{
    VisualizationRepository, VisualizationRepositoryError, VisualizationUpsert,
};
