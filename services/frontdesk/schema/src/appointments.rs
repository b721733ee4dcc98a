use sea_orm::entity::prelude::*;

/// Scheduled appointment. `patient_id` points into the patients store, which
/// lives in a different database, so there is no foreign key; patient name
/// and phone are snapshotted here at creation time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub patient_id: Uuid,
    pub patient_name: String,
    pub patient_phone: String,
    pub date: chrono::NaiveDate,
    pub time: chrono::NaiveTime,
    pub duration_minutes: i32,
    pub notes: String,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
