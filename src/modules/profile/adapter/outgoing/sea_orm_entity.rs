use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub email: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub github: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub linkedin: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub profile_image: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub profile_image_public_id: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
