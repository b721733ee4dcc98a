#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::types::{
    Account, Appointment, AppointmentUpdate, OneTimeCode, Patient, PatientUpdate, Symptom,
};
use crate::error::FrontdeskError;

/// Repository for staff accounts (records store).
pub trait AccountRepository: Send + Sync {
    /// Look up by normalized email, active or not.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, FrontdeskError>;

    /// Active account by normalized email.
    async fn find_active_by_email(&self, email: &str) -> Result<Option<Account>, FrontdeskError>;

    /// Active account whose email or name matches case-insensitively, or
    /// whose phone matches exactly. At most one arbitrary row is returned
    /// when several match.
    async fn find_active_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Account>, FrontdeskError>;

    async fn create(&self, account: &Account) -> Result<(), FrontdeskError>;

    async fn update_password_hash(
        &self,
        email: &str,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<(), FrontdeskError>;
}

/// Ledger for one family of one-time codes. Two implementations exist, one
/// per table (registration, reset); their semantics are identical. Which
/// checks a flow applies is decided by the usecases, not here.
pub trait OtpRepository: Send + Sync {
    /// Delete every row for the code's email, then insert the new row.
    /// Issuing therefore invalidates any outstanding code for the address.
    async fn replace(&self, code: &OneTimeCode) -> Result<(), FrontdeskError>;

    /// Row matching (email, code) that is unused and unexpired.
    async fn find_valid(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OneTimeCode>, FrontdeskError>;

    /// Row matching (email, code) that is unexpired. `is_used` is NOT
    /// inspected; the reset flow relies on exactly that.
    async fn find_matching(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OneTimeCode>, FrontdeskError>;

    async fn mark_used(&self, id: Uuid) -> Result<(), FrontdeskError>;

    /// A consumed (used) row exists for the email.
    async fn has_used_code(&self, email: &str) -> Result<bool, FrontdeskError>;

    async fn delete_for_email(&self, email: &str) -> Result<(), FrontdeskError>;

    async fn delete_matching(&self, email: &str, code: &str) -> Result<(), FrontdeskError>;

    /// Delete all expired rows. Callers treat this as routine housekeeping
    /// and swallow failures.
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<(), FrontdeskError>;
}

/// Outbound mail port. Implementations never raise: transport failures are
/// logged internally and reported as `false`.
pub trait Mailer: Send + Sync {
    async fn send_registration_code(&self, recipient: &str, name: &str, code: &str) -> bool;

    async fn send_reset_code(&self, recipient: &str, name: &str, code: &str) -> bool;
}

/// Repository for patient records (patients store).
pub trait PatientRepository: Send + Sync {
    /// All patients, newest first.
    async fn list(&self) -> Result<Vec<Patient>, FrontdeskError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Patient>, FrontdeskError>;

    async fn find_by_serial(&self, serial_number: &str)
    -> Result<Option<Patient>, FrontdeskError>;

    async fn create(&self, patient: &Patient) -> Result<(), FrontdeskError>;

    async fn update(
        &self,
        id: Uuid,
        fields: &PatientUpdate,
        now: DateTime<Utc>,
    ) -> Result<(), FrontdeskError>;

    async fn delete(&self, id: Uuid) -> Result<(), FrontdeskError>;
}

/// Repository for appointments (records store).
pub trait AppointmentRepository: Send + Sync {
    /// All appointments ordered by date, then time.
    async fn list(&self) -> Result<Vec<Appointment>, FrontdeskError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, FrontdeskError>;

    async fn create(&self, appointment: &Appointment) -> Result<(), FrontdeskError>;

    async fn update(
        &self,
        id: Uuid,
        fields: &AppointmentUpdate,
        now: DateTime<Utc>,
    ) -> Result<(), FrontdeskError>;

    async fn delete(&self, id: Uuid) -> Result<(), FrontdeskError>;

    /// Remove every appointment referencing the patient. Part of the
    /// two-store patient delete; committed separately from the patient row.
    async fn delete_for_patient(&self, patient_id: Uuid) -> Result<(), FrontdeskError>;
}

/// Repository for the predefined symptom catalogue (records store).
pub trait SymptomRepository: Send + Sync {
    /// Active symptoms ordered by category, then name.
    async fn list_active(&self) -> Result<Vec<Symptom>, FrontdeskError>;
}
