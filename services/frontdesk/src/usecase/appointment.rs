use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use caredesk_core::clock::Clock;

use crate::domain::repository::{AppointmentRepository, PatientRepository};
use crate::domain::types::{
    Appointment, AppointmentUpdate, DEFAULT_APPOINTMENT_DURATION_MINS, DEFAULT_APPOINTMENT_STATUS,
};
use crate::error::FrontdeskError;

// ── ListAppointments ─────────────────────────────────────────────────────────

pub struct ListAppointmentsUseCase<A: AppointmentRepository> {
    pub appointments: A,
}

impl<A: AppointmentRepository> ListAppointmentsUseCase<A> {
    pub async fn execute(&self) -> Result<Vec<Appointment>, FrontdeskError> {
        self.appointments.list().await
    }
}

// ── CreateAppointment ────────────────────────────────────────────────────────

pub struct CreateAppointmentInput {
    pub patient_id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: Option<i32>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

pub struct CreateAppointmentUseCase<A, P, C>
where
    A: AppointmentRepository,
    P: PatientRepository,
    C: Clock,
{
    pub appointments: A,
    pub patients: P,
    pub clock: C,
}

impl<A, P, C> CreateAppointmentUseCase<A, P, C>
where
    A: AppointmentRepository,
    P: PatientRepository,
    C: Clock,
{
    /// Reads the patient from the patients store to snapshot name and phone
    /// into the appointment row; the two stores never join.
    pub async fn execute(&self, input: CreateAppointmentInput) -> Result<Uuid, FrontdeskError> {
        let patient = self
            .patients
            .find_by_id(input.patient_id)
            .await?
            .ok_or(FrontdeskError::PatientNotFound)?;

        let now = self.clock.now();
        let appointment = Appointment {
            id: Uuid::now_v7(),
            patient_id: patient.id,
            patient_name: patient.patient_name,
            patient_phone: patient.phone_number,
            date: input.date,
            time: input.time,
            duration_minutes: input
                .duration_minutes
                .unwrap_or(DEFAULT_APPOINTMENT_DURATION_MINS),
            notes: input.notes.unwrap_or_default(),
            status: input
                .status
                .unwrap_or_else(|| DEFAULT_APPOINTMENT_STATUS.to_owned()),
            created_at: now,
            updated_at: now,
        };
        self.appointments.create(&appointment).await?;
        Ok(appointment.id)
    }
}

// ── UpdateAppointment ────────────────────────────────────────────────────────

pub struct UpdateAppointmentUseCase<A, C>
where
    A: AppointmentRepository,
    C: Clock,
{
    pub appointments: A,
    pub clock: C,
}

impl<A, C> UpdateAppointmentUseCase<A, C>
where
    A: AppointmentRepository,
    C: Clock,
{
    pub async fn execute(
        &self,
        id: Uuid,
        update: AppointmentUpdate,
    ) -> Result<(), FrontdeskError> {
        if update.is_empty() {
            return Err(FrontdeskError::EmptyUpdate);
        }
        if self.appointments.find_by_id(id).await?.is_none() {
            return Err(FrontdeskError::AppointmentNotFound);
        }
        self.appointments
            .update(id, &update, self.clock.now())
            .await
    }
}

// ── DeleteAppointment ────────────────────────────────────────────────────────

pub struct DeleteAppointmentUseCase<A: AppointmentRepository> {
    pub appointments: A,
}

impl<A: AppointmentRepository> DeleteAppointmentUseCase<A> {
    pub async fn execute(&self, id: Uuid) -> Result<(), FrontdeskError> {
        if self.appointments.find_by_id(id).await?.is_none() {
            return Err(FrontdeskError::AppointmentNotFound);
        }
        self.appointments.delete(id).await
    }
}
