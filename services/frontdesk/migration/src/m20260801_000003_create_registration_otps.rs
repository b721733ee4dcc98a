use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RegistrationOtps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RegistrationOtps::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // Not unique: at-most-one-active is enforced by
                    // delete-then-insert on issue.
                    .col(ColumnDef::new(RegistrationOtps::Email).string().not_null())
                    .col(ColumnDef::new(RegistrationOtps::Code).string().not_null())
                    .col(
                        ColumnDef::new(RegistrationOtps::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegistrationOtps::IsUsed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(RegistrationOtps::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(RegistrationOtps::Table)
                    .col(RegistrationOtps::Email)
                    .name("idx_registration_otps_email")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RegistrationOtps::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RegistrationOtps {
    Table,
    Id,
    Email,
    Code,
    ExpiresAt,
    IsUsed,
    CreatedAt,
}
