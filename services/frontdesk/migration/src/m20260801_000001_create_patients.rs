use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Patients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Patients::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Patients::SerialNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Patients::PatientName).string().not_null())
                    .col(ColumnDef::new(Patients::PhoneNumber).string().not_null())
                    .col(ColumnDef::new(Patients::Age).integer().not_null())
                    .col(ColumnDef::new(Patients::Sex).string().not_null())
                    .col(ColumnDef::new(Patients::MaritalStatus).string().not_null())
                    .col(ColumnDef::new(Patients::Problem).string().not_null())
                    .col(ColumnDef::new(Patients::TimesOfVisit).integer().not_null())
                    .col(ColumnDef::new(Patients::DateAdded).date().not_null())
                    .col(
                        ColumnDef::new(Patients::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Patients::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Patients::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Patients {
    Table,
    Id,
    SerialNumber,
    PatientName,
    PhoneNumber,
    Age,
    Sex,
    MaritalStatus,
    Problem,
    TimesOfVisit,
    DateAdded,
    CreatedAt,
    UpdatedAt,
}
