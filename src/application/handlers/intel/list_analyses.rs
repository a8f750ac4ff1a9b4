//! ListAnalysesHandler - Query handler for the intel dashboard.

use std::sync::Arc;

use crate::domain::crm::CompanyIntel;
use crate::domain::foundation::DomainError;
use crate::ports::IntelRepository;

/// Handler for listing analyses, most recently generated first.
pub struct ListAnalysesHandler {
    intel: Arc<dyn IntelRepository>,
}

impl ListAnalysesHandler {
    pub fn new(intel: Arc<dyn IntelRepository>) -> Self {
        Self { intel }
    }

    pub async fn handle(&self) -> Result<Vec<CompanyIntel>, DomainError> {
        let mut analyses = self.intel.list().await?;
        analyses.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
        Ok(analyses)
    }
}
