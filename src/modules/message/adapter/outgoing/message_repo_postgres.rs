use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{self as messages, ActiveModel, Column, Entity};
use crate::message::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError, NewMessage,
};
use crate::message::domain::entities::MessageRecord;

#[derive(Clone)]
pub struct MessageRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageRepository for MessageRepoPostgres {
    async fn save(&self, message: NewMessage) -> Result<MessageRecord, MessageRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(message.name),
            email: Set(message.email),
            message: Set(message.message),
            ip: Set(message.ip),
            user_agent: Set(message.user_agent),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(to_record(inserted))
    }

    async fn list_newest_first(&self) -> Result<Vec<MessageRecord>, MessageRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(to_record).collect())
    }
}

fn to_record(model: messages::Model) -> MessageRecord {
    MessageRecord {
        id: model.id,
        name: model.name,
        email: model.email,
        message: model.message,
        ip: model.ip,
        user_agent: model.user_agent,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> MessageRepositoryError {
    MessageRepositoryError::DatabaseError(e.to_string())
}
