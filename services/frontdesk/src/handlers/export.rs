use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use caredesk_core::clock::Clock as _;

use crate::error::FrontdeskError;
use crate::state::AppState;
use crate::usecase::export::{ExportAppointmentsUseCase, ExportPatientsUseCase};

// ── GET /api/export/patients ─────────────────────────────────────────────────

pub async fn export_patients(State(state): State<AppState>) -> Result<Response, FrontdeskError> {
    let usecase = ExportPatientsUseCase {
        patients: state.patient_repo(),
    };
    let csv = usecase.execute().await?;
    Ok(csv_attachment("patients_data", &state, csv))
}

// ── GET /api/export/appointments ─────────────────────────────────────────────

pub async fn export_appointments(
    State(state): State<AppState>,
) -> Result<Response, FrontdeskError> {
    let usecase = ExportAppointmentsUseCase {
        appointments: state.appointment_repo(),
    };
    let csv = usecase.execute().await?;
    Ok(csv_attachment("appointments_data", &state, csv))
}

fn csv_attachment(stem: &str, state: &AppState, csv: String) -> Response {
    let filename = format!("{stem}_{}.csv", state.clock.now().format("%Y%m%d"));
    (
        [
            (header::CONTENT_TYPE, "text/csv".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        csv,
    )
        .into_response()
}
