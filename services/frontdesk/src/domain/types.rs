use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

/// Staff account stored in the records store.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub designation: String,
    pub password_hash: String,
    pub is_active: bool,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One-time code row. Both families (registration and reset) share this
/// shape; they live in separate tables and never satisfy each other's
/// checks.
#[derive(Debug, Clone)]
pub struct OneTimeCode {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub is_used: bool,
    pub created_at: DateTime<Utc>,
}

/// Identity handed back by a successful login.
#[derive(Debug, Clone)]
pub struct LoginIdentity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub designation: String,
}

impl LoginIdentity {
    /// Synthetic identity returned by the administrator bypass; never backed
    /// by an account row.
    pub fn administrator() -> Self {
        Self {
            id: Uuid::nil(),
            name: "Administrator".to_owned(),
            email: "admin@hospital.com".to_owned(),
            designation: "Administrator".to_owned(),
        }
    }
}

impl From<Account> for LoginIdentity {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            designation: account.designation,
        }
    }
}

/// Administrator bypass pair. Login with this pair short-circuits the
/// credential store entirely.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_owned(),
            password: "password".to_owned(),
        }
    }
}

/// Patient record, patients store.
#[derive(Debug, Clone)]
pub struct Patient {
    pub id: Uuid,
    pub serial_number: String,
    pub patient_name: String,
    pub phone_number: String,
    pub age: i32,
    pub sex: String,
    pub marital_status: String,
    pub problem: String,
    pub times_of_visit: i32,
    pub date_added: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Explicit partial update for a patient, one optional slot per updatable
/// column.
#[derive(Debug, Clone, Default)]
pub struct PatientUpdate {
    pub serial_number: Option<String>,
    pub patient_name: Option<String>,
    pub phone_number: Option<String>,
    pub age: Option<i32>,
    pub sex: Option<String>,
    pub marital_status: Option<String>,
    pub problem: Option<String>,
    pub times_of_visit: Option<i32>,
}

impl PatientUpdate {
    pub fn is_empty(&self) -> bool {
        self.serial_number.is_none()
            && self.patient_name.is_none()
            && self.phone_number.is_none()
            && self.age.is_none()
            && self.sex.is_none()
            && self.marital_status.is_none()
            && self.problem.is_none()
            && self.times_of_visit.is_none()
    }
}

/// Scheduled appointment, records store. Patient name and phone are
/// snapshots taken at creation; the patient row itself lives in the other
/// store.
#[derive(Debug, Clone)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub patient_name: String,
    pub patient_phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: i32,
    pub notes: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Explicit partial update for an appointment.
#[derive(Debug, Clone, Default)]
pub struct AppointmentUpdate {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub duration_minutes: Option<i32>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

impl AppointmentUpdate {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.time.is_none()
            && self.duration_minutes.is_none()
            && self.notes.is_none()
            && self.status.is_none()
    }
}

/// Predefined symptom offered by the intake form.
#[derive(Debug, Clone)]
pub struct Symptom {
    pub id: Uuid,
    pub symptom_name: String,
    pub category: String,
}

/// One-time code length in digits.
pub const OTP_LEN: usize = 6;

/// One-time code validity window in minutes.
pub const OTP_TTL_MINS: i64 = 10;

/// Minimum password length for registration.
pub const MIN_REGISTRATION_PASSWORD_LEN: usize = 8;

/// Minimum password length for a reset. Weaker than registration; kept
/// as the source system behaves.
pub const MIN_RESET_PASSWORD_LEN: usize = 6;

/// Default appointment duration in minutes.
pub const DEFAULT_APPOINTMENT_DURATION_MINS: i32 = 30;

/// Status assigned to a newly created appointment.
pub const DEFAULT_APPOINTMENT_STATUS: &str = "scheduled";

/// Canonical form of an email address: trimmed and lowercased. Applied
/// before every read and write so the unique index behaves
/// case-insensitively.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
