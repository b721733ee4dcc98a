use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use caredesk_core::clock::ManualClock;
use caredesk_frontdesk::domain::repository::{
    AccountRepository, AppointmentRepository, Mailer, OtpRepository, PatientRepository,
    SymptomRepository,
};
use caredesk_frontdesk::domain::types::{
    Account, Appointment, AppointmentUpdate, OneTimeCode, Patient, PatientUpdate, Symptom,
};
use caredesk_frontdesk::error::FrontdeskError;
use caredesk_frontdesk::password::{PasswordHasher as _, Sha256PasswordHasher};

/// Fixed start instant for deterministic expiry tests.
pub fn test_clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap())
}

pub fn test_account(email: &str, password: &str) -> Account {
    let now = Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap();
    Account {
        id: Uuid::now_v7(),
        name: "Asha Rao".to_owned(),
        email: email.to_owned(),
        phone: "9812345670".to_owned(),
        designation: "Receptionist".to_owned(),
        password_hash: Sha256PasswordHasher.hash(password).unwrap(),
        is_active: true,
        email_verified: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_patient(serial: &str, created_at: DateTime<Utc>) -> Patient {
    Patient {
        id: Uuid::now_v7(),
        serial_number: serial.to_owned(),
        patient_name: "Meena Kumari".to_owned(),
        phone_number: "9876501234".to_owned(),
        age: 52,
        sex: "Female".to_owned(),
        marital_status: "Married".to_owned(),
        problem: "High Blood Pressure".to_owned(),
        times_of_visit: 1,
        date_added: created_at.date_naive(),
        created_at,
        updated_at: created_at,
    }
}

// ── MockAccountRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockAccountRepo {
    pub accounts: Arc<Mutex<Vec<Account>>>,
}

impl MockAccountRepo {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the account list for post-execution inspection.
    pub fn handle(&self) -> Arc<Mutex<Vec<Account>>> {
        Arc::clone(&self.accounts)
    }
}

impl AccountRepository for MockAccountRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, FrontdeskError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<Account>, FrontdeskError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email && a.is_active)
            .cloned())
    }

    async fn find_active_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Account>, FrontdeskError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| {
                a.is_active
                    && (a.email.eq_ignore_ascii_case(identifier)
                        || a.phone == identifier
                        || a.name.eq_ignore_ascii_case(identifier))
            })
            .cloned())
    }

    async fn create(&self, account: &Account) -> Result<(), FrontdeskError> {
        self.accounts.lock().unwrap().push(account.clone());
        Ok(())
    }

    async fn update_password_hash(
        &self,
        email: &str,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<(), FrontdeskError> {
        for account in self.accounts.lock().unwrap().iter_mut() {
            if account.email == email {
                account.password_hash = password_hash.to_owned();
                account.updated_at = now;
            }
        }
        Ok(())
    }
}

// ── MockOtpRepo ──────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockOtpRepo {
    pub codes: Arc<Mutex<Vec<OneTimeCode>>>,
    /// Simulates the ledger being unavailable for housekeeping only.
    pub fail_purge: bool,
}

impl MockOtpRepo {
    pub fn empty() -> Self {
        Self {
            codes: Arc::new(Mutex::new(vec![])),
            fail_purge: false,
        }
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<OneTimeCode>>> {
        Arc::clone(&self.codes)
    }
}

impl OtpRepository for MockOtpRepo {
    async fn replace(&self, code: &OneTimeCode) -> Result<(), FrontdeskError> {
        let mut codes = self.codes.lock().unwrap();
        codes.retain(|c| c.email != code.email);
        codes.push(code.clone());
        Ok(())
    }

    async fn find_valid(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OneTimeCode>, FrontdeskError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.email == email && c.code == code && !c.is_used && c.expires_at > now)
            .cloned())
    }

    async fn find_matching(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OneTimeCode>, FrontdeskError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.email == email && c.code == code && c.expires_at > now)
            .cloned())
    }

    async fn mark_used(&self, id: Uuid) -> Result<(), FrontdeskError> {
        for code in self.codes.lock().unwrap().iter_mut() {
            if code.id == id {
                code.is_used = true;
            }
        }
        Ok(())
    }

    async fn has_used_code(&self, email: &str) -> Result<bool, FrontdeskError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.email == email && c.is_used))
    }

    async fn delete_for_email(&self, email: &str) -> Result<(), FrontdeskError> {
        self.codes.lock().unwrap().retain(|c| c.email != email);
        Ok(())
    }

    async fn delete_matching(&self, email: &str, code: &str) -> Result<(), FrontdeskError> {
        self.codes
            .lock()
            .unwrap()
            .retain(|c| !(c.email == email && c.code == code));
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<(), FrontdeskError> {
        if self.fail_purge {
            return Err(anyhow::anyhow!("ledger unavailable").into());
        }
        self.codes.lock().unwrap().retain(|c| c.expires_at >= now);
        Ok(())
    }
}

// ── MockMailer ───────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct SentMail {
    pub recipient: String,
    pub code: String,
    pub kind: &'static str,
}

#[derive(Clone)]
pub struct MockMailer {
    pub delivered: bool,
    pub sent: Arc<Mutex<Vec<SentMail>>>,
}

impl MockMailer {
    pub fn delivering() -> Self {
        Self {
            delivered: true,
            sent: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn failing() -> Self {
        Self {
            delivered: false,
            sent: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<SentMail>>> {
        Arc::clone(&self.sent)
    }

    /// Code carried by the most recent send.
    pub fn last_code(&self) -> String {
        self.sent.lock().unwrap().last().unwrap().code.clone()
    }
}

impl Mailer for MockMailer {
    async fn send_registration_code(&self, recipient: &str, _name: &str, code: &str) -> bool {
        self.sent.lock().unwrap().push(SentMail {
            recipient: recipient.to_owned(),
            code: code.to_owned(),
            kind: "registration",
        });
        self.delivered
    }

    async fn send_reset_code(&self, recipient: &str, _name: &str, code: &str) -> bool {
        self.sent.lock().unwrap().push(SentMail {
            recipient: recipient.to_owned(),
            code: code.to_owned(),
            kind: "reset",
        });
        self.delivered
    }
}

// ── MockPatientRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockPatientRepo {
    pub patients: Arc<Mutex<Vec<Patient>>>,
}

impl MockPatientRepo {
    pub fn new(patients: Vec<Patient>) -> Self {
        Self {
            patients: Arc::new(Mutex::new(patients)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<Patient>>> {
        Arc::clone(&self.patients)
    }
}

impl PatientRepository for MockPatientRepo {
    async fn list(&self) -> Result<Vec<Patient>, FrontdeskError> {
        let mut patients = self.patients.lock().unwrap().clone();
        patients.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(patients)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Patient>, FrontdeskError> {
        Ok(self
            .patients
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_serial(
        &self,
        serial_number: &str,
    ) -> Result<Option<Patient>, FrontdeskError> {
        Ok(self
            .patients
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.serial_number == serial_number)
            .cloned())
    }

    async fn create(&self, patient: &Patient) -> Result<(), FrontdeskError> {
        self.patients.lock().unwrap().push(patient.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        fields: &PatientUpdate,
        now: DateTime<Utc>,
    ) -> Result<(), FrontdeskError> {
        for patient in self.patients.lock().unwrap().iter_mut() {
            if patient.id != id {
                continue;
            }
            if let Some(v) = &fields.serial_number {
                patient.serial_number = v.clone();
            }
            if let Some(v) = &fields.patient_name {
                patient.patient_name = v.clone();
            }
            if let Some(v) = &fields.phone_number {
                patient.phone_number = v.clone();
            }
            if let Some(v) = fields.age {
                patient.age = v;
            }
            if let Some(v) = &fields.sex {
                patient.sex = v.clone();
            }
            if let Some(v) = &fields.marital_status {
                patient.marital_status = v.clone();
            }
            if let Some(v) = &fields.problem {
                patient.problem = v.clone();
            }
            if let Some(v) = fields.times_of_visit {
                patient.times_of_visit = v;
            }
            patient.updated_at = now;
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), FrontdeskError> {
        self.patients.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}

// ── MockAppointmentRepo ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockAppointmentRepo {
    pub appointments: Arc<Mutex<Vec<Appointment>>>,
}

impl MockAppointmentRepo {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments: Arc::new(Mutex::new(appointments)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<Appointment>>> {
        Arc::clone(&self.appointments)
    }
}

impl AppointmentRepository for MockAppointmentRepo {
    async fn list(&self) -> Result<Vec<Appointment>, FrontdeskError> {
        let mut appointments = self.appointments.lock().unwrap().clone();
        appointments.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));
        Ok(appointments)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, FrontdeskError> {
        Ok(self
            .appointments
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn create(&self, appointment: &Appointment) -> Result<(), FrontdeskError> {
        self.appointments.lock().unwrap().push(appointment.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        fields: &AppointmentUpdate,
        now: DateTime<Utc>,
    ) -> Result<(), FrontdeskError> {
        for appointment in self.appointments.lock().unwrap().iter_mut() {
            if appointment.id != id {
                continue;
            }
            if let Some(v) = fields.date {
                appointment.date = v;
            }
            if let Some(v) = fields.time {
                appointment.time = v;
            }
            if let Some(v) = fields.duration_minutes {
                appointment.duration_minutes = v;
            }
            if let Some(v) = &fields.notes {
                appointment.notes = v.clone();
            }
            if let Some(v) = &fields.status {
                appointment.status = v.clone();
            }
            appointment.updated_at = now;
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), FrontdeskError> {
        self.appointments.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }

    async fn delete_for_patient(&self, patient_id: Uuid) -> Result<(), FrontdeskError> {
        self.appointments
            .lock()
            .unwrap()
            .retain(|a| a.patient_id != patient_id);
        Ok(())
    }
}

// ── MockSymptomRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockSymptomRepo {
    pub symptoms: Vec<Symptom>,
}

impl SymptomRepository for MockSymptomRepo {
    async fn list_active(&self) -> Result<Vec<Symptom>, FrontdeskError> {
        let mut symptoms = self.symptoms.clone();
        symptoms.sort_by(|a, b| {
            (a.category.clone(), a.symptom_name.clone())
                .cmp(&(b.category.clone(), b.symptom_name.clone()))
        });
        Ok(symptoms)
    }
}
