use crate::models::VerificationSummary;
use crate::viewmodels::verification_viewmodel::{completed_preview, pending};

/// Lista de verificaciones activas
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VerificationStore {
    pub summaries: Vec<VerificationSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl VerificationStore {
    pub fn pending(&self) -> Vec<VerificationSummary> {
        pending(&self.summaries)
    }

    pub fn completed_preview(&self) -> Vec<VerificationSummary> {
        completed_preview(&self.summaries)
    }
}
