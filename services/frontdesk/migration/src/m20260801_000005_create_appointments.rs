use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Appointments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // Points into the patients store (another database);
                    // no foreign key possible.
                    .col(ColumnDef::new(Appointments::PatientId).uuid().not_null())
                    .col(ColumnDef::new(Appointments::PatientName).string().not_null())
                    .col(
                        ColumnDef::new(Appointments::PatientPhone)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Appointments::Date).date().not_null())
                    .col(ColumnDef::new(Appointments::Time).time().not_null())
                    .col(
                        ColumnDef::new(Appointments::DurationMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Appointments::Notes).string().not_null())
                    .col(ColumnDef::new(Appointments::Status).string().not_null())
                    .col(
                        ColumnDef::new(Appointments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Appointments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Appointments::Table)
                    .col(Appointments::PatientId)
                    .name("idx_appointments_patient_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Appointments {
    Table,
    Id,
    PatientId,
    PatientName,
    PatientPhone,
    Date,
    Time,
    DurationMinutes,
    Notes,
    Status,
    CreatedAt,
    UpdatedAt,
}
