use anyhow::Context as _;

use crate::domain::repository::{AppointmentRepository, PatientRepository};
use crate::error::FrontdeskError;

const PATIENT_HEADERS: [&str; 11] = [
    "Serial Number",
    "Name",
    "Phone",
    "Age",
    "Sex",
    "Marital Status",
    "Problem",
    "Times of Visit",
    "Date Added",
    "Created At",
    "Updated At",
];

const APPOINTMENT_HEADERS: [&str; 9] = [
    "Date",
    "Time",
    "Patient Name",
    "Phone",
    "Duration (min)",
    "Notes",
    "Status",
    "Created At",
    "Updated At",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ── ExportPatients ───────────────────────────────────────────────────────────

pub struct ExportPatientsUseCase<P: PatientRepository> {
    pub patients: P,
}

impl<P: PatientRepository> ExportPatientsUseCase<P> {
    /// Renders the patient table as CSV, newest row first.
    pub async fn execute(&self) -> Result<String, FrontdeskError> {
        let patients = self.patients.list().await?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(PATIENT_HEADERS)
            .context("write patient csv header")?;
        for p in patients {
            writer
                .write_record([
                    p.serial_number,
                    p.patient_name,
                    p.phone_number,
                    p.age.to_string(),
                    p.sex,
                    p.marital_status,
                    p.problem,
                    p.times_of_visit.to_string(),
                    p.date_added.to_string(),
                    p.created_at.format(TIMESTAMP_FORMAT).to_string(),
                    p.updated_at.format(TIMESTAMP_FORMAT).to_string(),
                ])
                .context("write patient csv row")?;
        }
        finish(writer)
    }
}

// ── ExportAppointments ───────────────────────────────────────────────────────

pub struct ExportAppointmentsUseCase<A: AppointmentRepository> {
    pub appointments: A,
}

impl<A: AppointmentRepository> ExportAppointmentsUseCase<A> {
    /// Renders the appointment book as CSV, ordered by date then time.
    pub async fn execute(&self) -> Result<String, FrontdeskError> {
        let appointments = self.appointments.list().await?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(APPOINTMENT_HEADERS)
            .context("write appointment csv header")?;
        for a in appointments {
            writer
                .write_record([
                    a.date.to_string(),
                    a.time.to_string(),
                    a.patient_name,
                    a.patient_phone,
                    a.duration_minutes.to_string(),
                    a.notes,
                    a.status,
                    a.created_at.format(TIMESTAMP_FORMAT).to_string(),
                    a.updated_at.format(TIMESTAMP_FORMAT).to_string(),
                ])
                .context("write appointment csv row")?;
        }
        finish(writer)
    }
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, FrontdeskError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::Error::new(e.into_error()).context("flush csv writer"))?;
    Ok(String::from_utf8(bytes).context("csv output not utf-8")?)
}
