//! GetAnalysisHandler - Query handler for one analysis record.

use std::sync::Arc;

use crate::domain::crm::CompanyIntel;
use crate::domain::foundation::{AnalysisId, DomainError, ErrorCode};
use crate::ports::IntelRepository;

/// Query for one analysis.
#[derive(Debug, Clone)]
pub struct GetAnalysisQuery {
    pub analysis_id: AnalysisId,
}

/// Handler for fetching one analysis.
pub struct GetAnalysisHandler {
    intel: Arc<dyn IntelRepository>,
}

impl GetAnalysisHandler {
    pub fn new(intel: Arc<dyn IntelRepository>) -> Self {
        Self { intel }
    }

    pub async fn handle(&self, query: GetAnalysisQuery) -> Result<CompanyIntel, DomainError> {
        self.intel
            .find_by_id(&query.analysis_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::AnalysisNotFound,
                    format!("Analysis not found: {}", query.analysis_id),
                )
            })
    }
}
