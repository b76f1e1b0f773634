use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{NullOrdering, OnConflict};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::visualization::adapter::outgoing::sea_orm_entity::visualizations::{
    self, ActiveModel, Column, Entity,
};
use crate::visualization::application::domain::entities::VisualizationRecord;
use crate::visualization::application::ports::outgoing::{
    VisualizationRepository, VisualizationRepositoryError, VisualizationUpsert,
};

#[derive(Clone)]
pub struct VisualizationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VisualizationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VisualizationRepository for VisualizationRepositoryPostgres {
    async fn find_by_key(
        &self,
        visualization_id: &str,
        report_type: &str,
    ) -> Result<Option<VisualizationRecord>, VisualizationRepositoryError> {
        let model = Entity::find()
            .filter(Column::VisualizationId.eq(visualization_id))
            .filter(Column::ReportType.eq(report_type))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_record))
    }

    async fn upsert(
        &self,
        data: VisualizationUpsert,
    ) -> Result<VisualizationRecord, VisualizationRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            visualization_id: Set(data.visualization_id),
            report_type: Set(data.report_type),
            image_url: Set(data.image_url),
            image_public_id: Set(data.image_public_id),
            created_at: Set(now),
            updated_at: Set(Some(now)),
        };

        let saved = Entity::insert(model)
            .on_conflict(
                OnConflict::columns([Column::VisualizationId, Column::ReportType])
                    .update_columns([Column::ImageUrl, Column::ImagePublicId, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model_to_record(saved))
    }

    async fn list(
        &self,
        report_type: Option<&str>,
    ) -> Result<Vec<VisualizationRecord>, VisualizationRepositoryError> {
        let mut query = Entity::find();
        if let Some(report_type) = report_type {
            query = query.filter(Column::ReportType.eq(report_type));
        }

        let models = query
            .order_by_with_nulls(Column::UpdatedAt, Order::Desc, NullOrdering::Last)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }
}

fn model_to_record(model: visualizations::Model) -> VisualizationRecord {
    VisualizationRecord {
        id: model.id,
        visualization_id: model.visualization_id,
        report_type: model.report_type,
        image_url: model.image_url,
        image_public_id: model.image_public_id,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.map(Into::into),
    }
}

fn map_db_err(e: DbErr) -> VisualizationRepositoryError {
    VisualizationRepositoryError::DatabaseError(e.to_string())
}
