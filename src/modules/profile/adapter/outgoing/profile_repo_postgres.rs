use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{self as profiles, ActiveModel, Column, Entity};
use crate::profile::application::ports::outgoing::{
    NewProfile, ProfileChanges, ProfileRepository, ProfileRepositoryError,
};
use crate::profile::domain::entities::ProfileRecord;
use crate::shared::patch::PatchField;

#[derive(Clone)]
pub struct ProfileRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepoPostgres {
    async fn find_current(&self) -> Result<Option<ProfileRecord>, ProfileRepositoryError> {
        let model = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(to_record))
    }

    async fn create(&self, data: NewProfile) -> Result<ProfileRecord, ProfileRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            title: Set(data.title),
            bio: Set(data.bio),
            email: Set(data.email),
            github: Set(data.github),
            linkedin: Set(data.linkedin),
            profile_image: Set(data.profile_image),
            profile_image_public_id: Set(data.profile_image_public_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(to_record(inserted))
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ProfileChanges,
    ) -> Result<ProfileRecord, ProfileRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(name) = changes.name {
            model.name = Set(name);
        }
        if let Some(title) = changes.title {
            model.title = Set(title);
        }
        if let Some(bio) = changes.bio {
            model.bio = Set(bio);
        }
        if let Some(email) = changes.email {
            model.email = Set(email);
        }
        if let Some(image) = changes.profile_image {
            model.profile_image = Set(image);
        }

        match changes.github {
            PatchField::Unset => {}
            PatchField::Null => model.github = Set(None),
            PatchField::Value(v) => model.github = Set(Some(v)),
        }
        match changes.linkedin {
            PatchField::Unset => {}
            PatchField::Null => model.linkedin = Set(None),
            PatchField::Value(v) => model.linkedin = Set(Some(v)),
        }
        match changes.profile_image_public_id {
            PatchField::Unset => {}
            PatchField::Null => model.profile_image_public_id = Set(None),
            PatchField::Value(v) => model.profile_image_public_id = Set(Some(v)),
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .map(to_record)
            .ok_or(ProfileRepositoryError::NotFound)
    }
}

fn to_record(model: profiles::Model) -> ProfileRecord {
    ProfileRecord {
        id: model.id,
        name: model.name,
        title: model.title,
        bio: model.bio,
        email: model.email,
        github: model.github,
        linkedin: model.linkedin,
        profile_image: model.profile_image,
        profile_image_public_id: model.profile_image_public_id,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}
