use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{self as skills, ActiveModel, Column, Entity};
use crate::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};
use crate::skill::domain::entities::{SkillCategory, SkillRecord};

#[derive(Clone)]
pub struct SkillRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepoPostgres {
    async fn list(&self) -> Result<Vec<SkillRecord>, SkillRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Order)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(to_record).collect())
    }

    async fn replace_all(&self, names: Vec<String>) -> Result<Vec<SkillRecord>, SkillRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        Entity::delete_many().exec(&txn).await.map_err(map_db_err)?;

        let now = Utc::now().fixed_offset();
        let mut stored = Vec::with_capacity(names.len());
        for (index, name) in names.into_iter().enumerate() {
            let model = ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(name),
                category: Set(SkillCategory::default().as_str().to_string()),
                order: Set(index as i32),
                created_at: Set(now),
            };
            stored.push(model.insert(&txn).await.map_err(map_db_err)?);
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(stored.into_iter().map(to_record).collect())
    }
}

fn to_record(model: skills::Model) -> SkillRecord {
    SkillRecord {
        id: model.id,
        category: SkillCategory::parse(&model.category),
        name: model.name,
        order: model.order,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}
