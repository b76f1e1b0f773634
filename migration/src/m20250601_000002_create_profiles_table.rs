use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Profiles::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Profiles::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Profiles::Bio).text().not_null())
                    .col(ColumnDef::new(Profiles::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Profiles::Github).text())
                    .col(ColumnDef::new(Profiles::Linkedin).text())
                    .col(
                        ColumnDef::new(Profiles::ProfileImage)
                            .text()
                            .not_null()
                            .default("/profile.jpg"),
                    )
                    .col(ColumnDef::new(Profiles::ProfileImagePublicId).text())
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Profiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    Name,
    Title,
    Bio,
    Email,
    Github,
    Linkedin,
    ProfileImage,
    ProfileImagePublicId,
    CreatedAt,
    UpdatedAt,
}
