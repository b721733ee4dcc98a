use axum::{Json, extract::State};
use serde::Serialize;

use crate::domain::types::Symptom;
use crate::error::FrontdeskError;
use crate::state::AppState;
use crate::usecase::symptom::ListSymptomsUseCase;

// ── GET /api/symptoms ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SymptomsResponse {
    pub symptoms: Vec<SymptomResponse>,
}

#[derive(Serialize)]
pub struct SymptomResponse {
    pub id: String,
    pub symptom_name: String,
    pub category: String,
}

impl From<Symptom> for SymptomResponse {
    fn from(symptom: Symptom) -> Self {
        Self {
            id: symptom.id.to_string(),
            symptom_name: symptom.symptom_name,
            category: symptom.category,
        }
    }
}

pub async fn get_symptoms(
    State(state): State<AppState>,
) -> Result<Json<SymptomsResponse>, FrontdeskError> {
    let usecase = ListSymptomsUseCase {
        symptoms: state.symptom_repo(),
    };
    let symptoms = usecase.execute().await?;
    Ok(Json(SymptomsResponse {
        symptoms: symptoms.into_iter().map(Into::into).collect(),
    }))
}
