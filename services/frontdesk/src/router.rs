use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use caredesk_core::health::{healthz, readyz};
use caredesk_core::middleware::request_id_layer;

use crate::handlers::{
    appointment::{
        create_appointment, delete_appointment, get_appointments, update_appointment,
    },
    auth::{
        complete_registration, login, register, reset_password, send_otp, send_reset_otp,
        verify_otp, verify_reset_otp,
    },
    export::{export_appointments, export_patients},
    patient::{create_patient, delete_patient, get_patients, update_patient},
    symptom::get_symptoms,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Registration & login
        .route("/api/register", post(register))
        .route("/api/send-otp", post(send_otp))
        .route("/api/verify-otp", post(verify_otp))
        .route("/api/complete-registration", post(complete_registration))
        .route("/api/login", post(login))
        // Password reset
        .route("/send_reset_otp", post(send_reset_otp))
        .route("/verify_reset_otp", post(verify_reset_otp))
        .route("/reset_password", post(reset_password))
        // Patients
        .route("/api/patients", get(get_patients))
        .route("/api/patients", post(create_patient))
        .route("/api/patients/{id}", put(update_patient))
        .route("/api/patients/{id}", delete(delete_patient))
        // Appointments
        .route("/api/appointments", get(get_appointments))
        .route("/api/appointments", post(create_appointment))
        .route("/api/appointments/{id}", put(update_appointment))
        .route("/api/appointments/{id}", delete(delete_appointment))
        // Reports
        .route("/api/export/patients", get(export_patients))
        .route("/api/export/appointments", get(export_appointments))
        // Symptoms
        .route("/api/symptoms", get(get_symptoms))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
