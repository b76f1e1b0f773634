pub mod sea_orm_entity;
mod skill_repo_postgres;

pub use skill_repo_postgres::SkillRepoPostgres;
