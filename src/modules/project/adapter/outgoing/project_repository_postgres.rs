use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::project::application::domain::entities::ProjectRecord;
use crate::project::application::ports::outgoing::{
    NewProject, ProjectChanges, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn next_order(&self) -> Result<i32, ProjectRepositoryError> {
        let last = Entity::find()
            .order_by_desc(Column::Order)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(last.map_or(0, |p| p.order + 1))
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Order)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProjectRecord>, ProjectRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_record))
    }

    async fn create(&self, data: NewProject) -> Result<ProjectRecord, ProjectRepositoryError> {
        let order = self.next_order().await?;
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            technologies: Set(serde_json::json!(data.technologies)),
            github: Set(data.github),
            demo: Set(data.demo),
            featured: Set(data.featured),
            image: Set(data.image),
            image_public_id: Set(data.image_public_id),
            order: Set(order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_record(inserted))
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ProjectChanges,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = changes.title {
            model.title = Set(title);
        }
        if let Some(description) = changes.description {
            model.description = Set(description);
        }
        if let Some(technologies) = changes.technologies {
            model.technologies = Set(serde_json::json!(technologies));
        }
        if let Some(featured) = changes.featured {
            model.featured = Set(featured);
        }
        if let Some(order) = changes.order {
            model.order = Set(order);
        }
        if let Some(image) = changes.image {
            model.image = Set(image);
        }

        apply_patch(&mut model.github, changes.github);
        apply_patch(&mut model.demo, changes.demo);
        apply_patch(&mut model.image_public_id, changes.image_public_id);

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(model_to_record)
            .ok_or(ProjectRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<ProjectRecord>, ProjectRepositoryError> {
        let Some(model) = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            debug!(project_id = %id, "Project vanished before delete");
            return Ok(None);
        }

        Ok(Some(model_to_record(model)))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn apply_patch(column: &mut sea_orm::ActiveValue<Option<String>>, patch: PatchField<String>) {
    match patch {
        PatchField::Unset => {}
        PatchField::Null => *column = Set(None),
        PatchField::Value(v) => *column = Set(Some(v)),
    }
}

fn model_to_record(model: projects::Model) -> ProjectRecord {
    ProjectRecord {
        id: model.id,
        title: model.title,
        description: model.description,
        technologies: serde_json::from_value(model.technologies).unwrap_or_default(),
        github: model.github,
        demo: model.demo,
        featured: model.featured,
        image: model.image,
        image_public_id: model.image_public_id,
        order: model.order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
