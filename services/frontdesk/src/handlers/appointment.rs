use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{Appointment, AppointmentUpdate};
use crate::error::FrontdeskError;
use crate::state::AppState;
use crate::usecase::appointment::{
    CreateAppointmentInput, CreateAppointmentUseCase, DeleteAppointmentUseCase,
    ListAppointmentsUseCase, UpdateAppointmentUseCase,
};

// ── GET /api/appointments ────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AppointmentsResponse {
    pub appointments: Vec<AppointmentResponse>,
}

#[derive(Serialize)]
pub struct AppointmentResponse {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub patient_phone: String,
    pub date: chrono::NaiveDate,
    pub time: chrono::NaiveTime,
    pub duration: i32,
    pub notes: String,
    pub status: String,
    #[serde(serialize_with = "caredesk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "caredesk_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id.to_string(),
            patient_id: appointment.patient_id.to_string(),
            patient_name: appointment.patient_name,
            patient_phone: appointment.patient_phone,
            date: appointment.date,
            time: appointment.time,
            duration: appointment.duration_minutes,
            notes: appointment.notes,
            status: appointment.status,
            created_at: appointment.created_at,
            updated_at: appointment.updated_at,
        }
    }
}

pub async fn get_appointments(
    State(state): State<AppState>,
) -> Result<Json<AppointmentsResponse>, FrontdeskError> {
    let usecase = ListAppointmentsUseCase {
        appointments: state.appointment_repo(),
    };
    let appointments = usecase.execute().await?;
    Ok(Json(AppointmentsResponse {
        appointments: appointments.into_iter().map(Into::into).collect(),
    }))
}

// ── POST /api/appointments ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateAppointmentRequest {
    pub patient_id: Uuid,
    pub date: chrono::NaiveDate,
    pub time: chrono::NaiveTime,
    pub duration: Option<i32>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct CreateAppointmentResponse {
    pub success: bool,
    pub appointment_id: String,
    pub message: String,
}

pub async fn create_appointment(
    State(state): State<AppState>,
    Json(body): Json<CreateAppointmentRequest>,
) -> Result<Json<CreateAppointmentResponse>, FrontdeskError> {
    let usecase = CreateAppointmentUseCase {
        appointments: state.appointment_repo(),
        patients: state.patient_repo(),
        clock: state.clock,
    };
    let appointment_id = usecase
        .execute(CreateAppointmentInput {
            patient_id: body.patient_id,
            date: body.date,
            time: body.time,
            duration_minutes: body.duration,
            notes: body.notes,
            status: body.status,
        })
        .await?;
    Ok(Json(CreateAppointmentResponse {
        success: true,
        appointment_id: appointment_id.to_string(),
        message: "Appointment created successfully".to_owned(),
    }))
}

// ── PUT /api/appointments/{id} ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateAppointmentRequest {
    pub date: Option<chrono::NaiveDate>,
    pub time: Option<chrono::NaiveTime>,
    pub duration: Option<i32>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
}

pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateAppointmentRequest>,
) -> Result<Json<MutationResponse>, FrontdeskError> {
    let usecase = UpdateAppointmentUseCase {
        appointments: state.appointment_repo(),
        clock: state.clock,
    };
    usecase
        .execute(
            id,
            AppointmentUpdate {
                date: body.date,
                time: body.time,
                duration_minutes: body.duration,
                notes: body.notes,
                status: body.status,
            },
        )
        .await?;
    Ok(Json(MutationResponse {
        success: true,
        message: "Appointment updated successfully".to_owned(),
    }))
}

// ── DELETE /api/appointments/{id} ────────────────────────────────────────────

pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MutationResponse>, FrontdeskError> {
    let usecase = DeleteAppointmentUseCase {
        appointments: state.appointment_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MutationResponse {
        success: true,
        message: "Appointment deleted successfully".to_owned(),
    }))
}
