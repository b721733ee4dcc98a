use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResetOtps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResetOtps::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ResetOtps::Email).string().not_null())
                    .col(ColumnDef::new(ResetOtps::Code).string().not_null())
                    .col(
                        ColumnDef::new(ResetOtps::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResetOtps::IsUsed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ResetOtps::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(ResetOtps::Table)
                    .col(ResetOtps::Email)
                    .name("idx_reset_otps_email")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResetOtps::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ResetOtps {
    Table,
    Id,
    Email,
    Code,
    ExpiresAt,
    IsUsed,
    CreatedAt,
}
