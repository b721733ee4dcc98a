use sea_orm::entity::prelude::*;

/// Patient record, sole table of the patients store.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "patients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub serial_number: String,
    pub patient_name: String,
    pub phone_number: String,
    pub age: i32,
    pub sex: String,
    pub marital_status: String,
    pub problem: String,
    pub times_of_visit: i32,
    pub date_added: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
