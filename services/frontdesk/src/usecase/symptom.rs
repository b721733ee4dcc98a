use crate::domain::repository::SymptomRepository;
use crate::domain::types::Symptom;
use crate::error::FrontdeskError;

pub struct ListSymptomsUseCase<S: SymptomRepository> {
    pub symptoms: S,
}

impl<S: SymptomRepository> ListSymptomsUseCase<S> {
    pub async fn execute(&self) -> Result<Vec<Symptom>, FrontdeskError> {
        self.symptoms.list_active().await
    }
}
