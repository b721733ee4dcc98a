use sea_orm_migration::prelude::*;

mod m20260801_000001_create_patients;
mod m20260801_000002_create_users;
mod m20260801_000003_create_registration_otps;
mod m20260801_000004_create_reset_otps;
mod m20260801_000005_create_appointments;
mod m20260801_000006_create_symptoms;

/// Migrator for the patients store.
pub struct PatientsMigrator;

#[async_trait::async_trait]
impl MigratorTrait for PatientsMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260801_000001_create_patients::Migration)]
    }
}

/// Migrator for the records store (accounts, one-time codes, appointments,
/// symptom catalogue).
pub struct RecordsMigrator;

#[async_trait::async_trait]
impl MigratorTrait for RecordsMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000002_create_users::Migration),
            Box::new(m20260801_000003_create_registration_otps::Migration),
            Box::new(m20260801_000004_create_reset_otps::Migration),
            Box::new(m20260801_000005_create_appointments::Migration),
            Box::new(m20260801_000006_create_symptoms::Migration),
        ]
    }
}
