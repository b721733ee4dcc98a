use sea_orm_migration::prelude::*;
use uuid::Uuid;

#[derive(DeriveMigrationName)]
pub struct Migration;

const DEFAULT_SYMPTOMS: &[(&str, &str)] = &[
    ("High Blood Pressure", "Cardiovascular"),
    ("Diabetes", "Endocrine"),
    ("Insomnia", "Neurological"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PredefinedSymptoms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PredefinedSymptoms::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PredefinedSymptoms::SymptomName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(PredefinedSymptoms::Category)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PredefinedSymptoms::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PredefinedSymptoms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, category) in DEFAULT_SYMPTOMS {
            let insert = Query::insert()
                .into_table(PredefinedSymptoms::Table)
                .columns([
                    PredefinedSymptoms::Id,
                    PredefinedSymptoms::SymptomName,
                    PredefinedSymptoms::Category,
                    PredefinedSymptoms::IsActive,
                    PredefinedSymptoms::CreatedAt,
                ])
                .values_panic([
                    Uuid::new_v4().into(),
                    (*name).into(),
                    (*category).into(),
                    true.into(),
                    Expr::current_timestamp().into(),
                ])
                .to_owned();
            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PredefinedSymptoms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PredefinedSymptoms {
    Table,
    Id,
    SymptomName,
    Category,
    IsActive,
    CreatedAt,
}
