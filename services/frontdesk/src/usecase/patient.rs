use uuid::Uuid;

use caredesk_core::clock::Clock;

use crate::domain::repository::{AppointmentRepository, PatientRepository};
use crate::domain::types::{Patient, PatientUpdate};
use crate::error::FrontdeskError;

// ── ListPatients ─────────────────────────────────────────────────────────────

pub struct ListPatientsUseCase<P: PatientRepository> {
    pub patients: P,
}

impl<P: PatientRepository> ListPatientsUseCase<P> {
    pub async fn execute(&self) -> Result<Vec<Patient>, FrontdeskError> {
        self.patients.list().await
    }
}

// ── CreatePatient ────────────────────────────────────────────────────────────

pub struct CreatePatientInput {
    pub serial_number: String,
    pub patient_name: String,
    pub phone_number: String,
    pub age: i32,
    pub sex: String,
    pub marital_status: String,
    pub problem: String,
    pub times_of_visit: Option<i32>,
}

pub struct CreatePatientUseCase<P, C>
where
    P: PatientRepository,
    C: Clock,
{
    pub patients: P,
    pub clock: C,
}

impl<P, C> CreatePatientUseCase<P, C>
where
    P: PatientRepository,
    C: Clock,
{
    pub async fn execute(&self, input: CreatePatientInput) -> Result<Uuid, FrontdeskError> {
        let serial_number = input.serial_number.trim().to_owned();
        let patient_name = input.patient_name.trim().to_owned();
        let phone_number = input.phone_number.trim().to_owned();
        let sex = input.sex.trim().to_owned();
        let marital_status = input.marital_status.trim().to_owned();
        let problem = input.problem.trim().to_owned();
        if serial_number.is_empty()
            || patient_name.is_empty()
            || phone_number.is_empty()
            || sex.is_empty()
            || marital_status.is_empty()
            || problem.is_empty()
            || input.age <= 0
        {
            return Err(FrontdeskError::MissingFields);
        }

        if self
            .patients
            .find_by_serial(&serial_number)
            .await?
            .is_some()
        {
            return Err(FrontdeskError::SerialNumberTaken);
        }

        let now = self.clock.now();
        let patient = Patient {
            id: Uuid::now_v7(),
            serial_number,
            patient_name,
            phone_number,
            age: input.age,
            sex,
            marital_status,
            problem,
            times_of_visit: input.times_of_visit.unwrap_or(1),
            date_added: now.date_naive(),
            created_at: now,
            updated_at: now,
        };
        self.patients.create(&patient).await?;
        Ok(patient.id)
    }
}

// ── UpdatePatient ────────────────────────────────────────────────────────────

pub struct UpdatePatientUseCase<P, C>
where
    P: PatientRepository,
    C: Clock,
{
    pub patients: P,
    pub clock: C,
}

impl<P, C> UpdatePatientUseCase<P, C>
where
    P: PatientRepository,
    C: Clock,
{
    pub async fn execute(&self, id: Uuid, update: PatientUpdate) -> Result<(), FrontdeskError> {
        if update.is_empty() {
            return Err(FrontdeskError::EmptyUpdate);
        }
        if self.patients.find_by_id(id).await?.is_none() {
            return Err(FrontdeskError::PatientNotFound);
        }
        if let Some(serial) = &update.serial_number {
            if let Some(existing) = self.patients.find_by_serial(serial).await? {
                if existing.id != id {
                    return Err(FrontdeskError::SerialNumberTaken);
                }
            }
        }
        self.patients.update(id, &update, self.clock.now()).await
    }
}

// ── DeletePatient ────────────────────────────────────────────────────────────

pub struct DeletePatientUseCase<P, A>
where
    P: PatientRepository,
    A: AppointmentRepository,
{
    pub patients: P,
    pub appointments: A,
}

impl<P, A> DeletePatientUseCase<P, A>
where
    P: PatientRepository,
    A: AppointmentRepository,
{
    /// Appointments live in the records store, the patient row in the
    /// patients store: two commits, no two-phase guarantee. Appointments go
    /// first; a crash in between leaves a patient without appointments, not
    /// orphaned appointments.
    pub async fn execute(&self, id: Uuid) -> Result<(), FrontdeskError> {
        if self.patients.find_by_id(id).await?.is_none() {
            return Err(FrontdeskError::PatientNotFound);
        }
        self.appointments.delete_for_patient(id).await?;
        self.patients.delete(id).await
    }
}
