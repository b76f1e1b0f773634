use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Visualizations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Visualizations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Visualizations::VisualizationId)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Visualizations::ReportType)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Visualizations::ImageUrl).text().not_null())
                    .col(ColumnDef::new(Visualizations::ImagePublicId).text())
                    .col(
                        ColumnDef::new(Visualizations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Nullable: rows imported without an update stamp fall back to created_at
                    .col(ColumnDef::new(Visualizations::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Upsert key
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_visualizations_key_unique
                ON visualizations (visualization_id, report_type);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_visualizations_key_unique;")
            .await?;

        manager
            .drop_table(Table::drop().table(Visualizations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Visualizations {
    Table,
    Id,
    VisualizationId,
    ReportType,
    ImageUrl,
    ImagePublicId,
    CreatedAt,
    UpdatedAt,
}
