//! RequestAnalysisHandler - Command handler for generating company analyses.
//!
//! Calls the black-box analysis collaborator and persists its report. This
//! is the only handler that awaits an external service; pipeline and
//! dashboard paths never do.

use std::sync::Arc;

use crate::domain::crm::CompanyIntel;
use crate::domain::foundation::{CommandMetadata, DomainError};
use crate::ports::{AnalysisProvider, AnalysisRequest, IntelRepository};

/// Command to request one company analysis.
#[derive(Debug, Clone)]
pub struct RequestAnalysisCommand {
    pub company_name: String,
    /// Analysis flavor, e.g. "swot", "competitor", "market".
    pub analysis_type: String,
}

/// Handler for requesting analyses.
pub struct RequestAnalysisHandler {
    provider: Arc<dyn AnalysisProvider>,
    intel: Arc<dyn IntelRepository>,
}

impl RequestAnalysisHandler {
    pub fn new(provider: Arc<dyn AnalysisProvider>, intel: Arc<dyn IntelRepository>) -> Self {
        Self { provider, intel }
    }

    pub async fn handle(
        &self,
        cmd: RequestAnalysisCommand,
        metadata: CommandMetadata,
    ) -> Result<CompanyIntel, DomainError> {
        let report = self
            .provider
            .analyze(AnalysisRequest {
                company_name: cmd.company_name.clone(),
                analysis_type: cmd.analysis_type.clone(),
            })
            .await?;

        let intel = CompanyIntel::new(
            cmd.company_name,
            cmd.analysis_type,
            report.content,
            Some(report.model),
            Some(metadata.user_id.to_string()),
        )?;

        self.intel.insert(&intel).await?;

        tracing::info!(
            analysis_id = %intel.id,
            company = %intel.company_name,
            analysis_type = %intel.analysis_type,
            "analysis stored"
        );
        Ok(intel)
    }
}
