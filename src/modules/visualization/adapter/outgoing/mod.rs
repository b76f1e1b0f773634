pub mod sea_orm_entity;
mod visualization_repository_postgres;

pub use visualization_repository_postgres::VisualizationRepositoryPostgres;
