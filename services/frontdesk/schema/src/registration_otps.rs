use sea_orm::entity::prelude::*;

/// One-time code sent to an email address during registration.
/// Expires 10 minutes after issuance; consumed exactly once.
///
/// No foreign key to `users`: registration codes are issued before any
/// account row exists. Email is indexed but not unique; issuance deletes
/// prior rows for the address instead.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "registration_otps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub is_used: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
