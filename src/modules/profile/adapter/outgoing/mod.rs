mod profile_repo_postgres;
pub mod sea_orm_entity;

pub use profile_repo_postgres::ProfileRepoPostgres;
