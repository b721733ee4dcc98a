use sea_orm_migration::prelude::*;

use caredesk_frontdesk_migration::{PatientsMigrator, RecordsMigrator};

#[tokio::main]
async fn main() {
    // One binary serves both stores; `MIGRATION_TARGET=patients` selects the
    // patients store, anything else the records store. `DATABASE_URL` must
    // point at the matching database.
    match std::env::var("MIGRATION_TARGET").as_deref() {
        Ok("patients") => cli::run_cli(PatientsMigrator).await,
        _ => cli::run_cli(RecordsMigrator).await,
    }
}
