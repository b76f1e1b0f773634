mod message_repo_postgres;
pub mod sea_orm_entity;

pub use message_repo_postgres::MessageRepoPostgres;
