use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{Patient, PatientUpdate};
use crate::error::FrontdeskError;
use crate::state::AppState;
use crate::usecase::patient::{
    CreatePatientInput, CreatePatientUseCase, DeletePatientUseCase, ListPatientsUseCase,
    UpdatePatientUseCase,
};

// ── GET /api/patients ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PatientsResponse {
    pub patients: Vec<PatientResponse>,
}

#[derive(Serialize)]
pub struct PatientResponse {
    pub id: String,
    pub serial_number: String,
    pub patient_name: String,
    pub phone_number: String,
    pub age: i32,
    pub sex: String,
    pub marital_status: String,
    pub problem: String,
    pub times_of_visit: i32,
    pub date_added: chrono::NaiveDate,
    #[serde(serialize_with = "caredesk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "caredesk_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Patient> for PatientResponse {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id.to_string(),
            serial_number: patient.serial_number,
            patient_name: patient.patient_name,
            phone_number: patient.phone_number,
            age: patient.age,
            sex: patient.sex,
            marital_status: patient.marital_status,
            problem: patient.problem,
            times_of_visit: patient.times_of_visit,
            date_added: patient.date_added,
            created_at: patient.created_at,
            updated_at: patient.updated_at,
        }
    }
}

pub async fn get_patients(
    State(state): State<AppState>,
) -> Result<Json<PatientsResponse>, FrontdeskError> {
    let usecase = ListPatientsUseCase {
        patients: state.patient_repo(),
    };
    let patients = usecase.execute().await?;
    Ok(Json(PatientsResponse {
        patients: patients.into_iter().map(Into::into).collect(),
    }))
}

// ── POST /api/patients ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePatientRequest {
    pub serial_number: String,
    pub patient_name: String,
    pub phone_number: String,
    pub age: i32,
    pub sex: String,
    pub marital_status: String,
    pub problem: String,
    pub times_of_visit: Option<i32>,
}

#[derive(Serialize)]
pub struct CreatePatientResponse {
    pub success: bool,
    pub patient_id: String,
    pub message: String,
}

pub async fn create_patient(
    State(state): State<AppState>,
    Json(body): Json<CreatePatientRequest>,
) -> Result<Json<CreatePatientResponse>, FrontdeskError> {
    let usecase = CreatePatientUseCase {
        patients: state.patient_repo(),
        clock: state.clock,
    };
    let patient_id = usecase
        .execute(CreatePatientInput {
            serial_number: body.serial_number,
            patient_name: body.patient_name,
            phone_number: body.phone_number,
            age: body.age,
            sex: body.sex,
            marital_status: body.marital_status,
            problem: body.problem,
            times_of_visit: body.times_of_visit,
        })
        .await?;
    Ok(Json(CreatePatientResponse {
        success: true,
        patient_id: patient_id.to_string(),
        message: "Patient created successfully".to_owned(),
    }))
}

// ── PUT /api/patients/{id} ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdatePatientRequest {
    pub serial_number: Option<String>,
    pub patient_name: Option<String>,
    pub phone_number: Option<String>,
    pub age: Option<i32>,
    pub sex: Option<String>,
    pub marital_status: Option<String>,
    pub problem: Option<String>,
    pub times_of_visit: Option<i32>,
}

#[derive(Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
}

pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdatePatientRequest>,
) -> Result<Json<MutationResponse>, FrontdeskError> {
    let usecase = UpdatePatientUseCase {
        patients: state.patient_repo(),
        clock: state.clock,
    };
    usecase
        .execute(
            id,
            PatientUpdate {
                serial_number: body.serial_number,
                patient_name: body.patient_name,
                phone_number: body.phone_number,
                age: body.age,
                sex: body.sex,
                marital_status: body.marital_status,
                problem: body.problem,
                times_of_visit: body.times_of_visit,
            },
        )
        .await?;
    Ok(Json(MutationResponse {
        success: true,
        message: "Patient updated successfully".to_owned(),
    }))
}

// ── DELETE /api/patients/{id} ────────────────────────────────────────────────

pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MutationResponse>, FrontdeskError> {
    let usecase = DeletePatientUseCase {
        patients: state.patient_repo(),
        appointments: state.appointment_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MutationResponse {
        success: true,
        message: "Patient deleted successfully".to_owned(),
    }))
}
