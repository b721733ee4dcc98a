use std::sync::Arc;

use sea_orm::DatabaseConnection;

use caredesk_core::clock::SystemClock;

use crate::domain::types::AdminCredentials;
use crate::infra::db::{
    DbAccountRepository, DbAppointmentRepository, DbPatientRepository, DbRegistrationOtpRepository,
    DbResetOtpRepository, DbSymptomRepository,
};
use crate::infra::mailer::SmtpMailer;
use crate::password::PasswordHasher;

/// Shared application state passed to every handler via axum `State`.
/// Holds one connection per store; repositories are constructed per request
/// against the store that owns their table.
#[derive(Clone)]
pub struct AppState {
    pub patients_db: DatabaseConnection,
    pub records_db: DatabaseConnection,
    pub mailer: SmtpMailer,
    pub clock: SystemClock,
    pub hasher: Arc<dyn PasswordHasher>,
    pub admin: AdminCredentials,
    pub require_verified_email: bool,
}

impl AppState {
    pub fn account_repo(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: self.records_db.clone(),
        }
    }

    pub fn registration_otp_repo(&self) -> DbRegistrationOtpRepository {
        DbRegistrationOtpRepository {
            db: self.records_db.clone(),
        }
    }

    pub fn reset_otp_repo(&self) -> DbResetOtpRepository {
        DbResetOtpRepository {
            db: self.records_db.clone(),
        }
    }

    pub fn patient_repo(&self) -> DbPatientRepository {
        DbPatientRepository {
            db: self.patients_db.clone(),
        }
    }

    pub fn appointment_repo(&self) -> DbAppointmentRepository {
        DbAppointmentRepository {
            db: self.records_db.clone(),
        }
    }

    pub fn symptom_repo(&self) -> DbSymptomRepository {
        DbSymptomRepository {
            db: self.records_db.clone(),
        }
    }
}
