//! Analysis provider port - interface for the company analysis collaborator.
//!
//! Abstracts the external service that turns a company name and an analysis
//! type into report text. Production wires an LLM-backed implementation at
//! the composition root; prompt and response handling stay outside this
//! core. Pipeline and dashboard code paths never await this port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// A request for one company analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub company_name: String,
    /// Analysis flavor, e.g. "swot", "competitor", "market".
    pub analysis_type: String,
}

/// The provider's finished report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Full report text.
    pub content: String,
    /// Identifier of the model that produced the content.
    pub model: String,
}

/// Errors from the analysis collaborator.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalysisError {
    #[error("Analysis provider unavailable: {0}")]
    Unavailable(String),

    #[error("Analysis provider rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    #[error("Analysis provider rejected the request: {0}")]
    InvalidRequest(String),
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        DomainError::new(ErrorCode::AnalysisProviderError, err.to_string())
    }
}

/// Port for generating company analyses.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Generate one analysis report.
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport, AnalysisError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider;

    #[async_trait]
    impl AnalysisProvider for FixedProvider {
        async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
            Ok(AnalysisReport {
                content: format!("{} report", request.analysis_type),
                model: "fixed".to_string(),
            })
        }
    }

    #[test]
    fn analysis_provider_is_object_safe() {
        let _provider: Box<dyn AnalysisProvider> = Box::new(FixedProvider);
    }

    #[tokio::test]
    async fn fixed_provider_echoes_analysis_type() {
        let provider = FixedProvider;
        let report = provider
            .analyze(AnalysisRequest {
                company_name: "TechCorp".to_string(),
                analysis_type: "swot".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(report.content, "swot report");
    }

    #[test]
    fn analysis_error_converts_to_domain_error() {
        let err: DomainError = AnalysisError::Unavailable("down".to_string()).into();
        assert_eq!(err.code, ErrorCode::AnalysisProviderError);
        assert!(err.message.contains("down"));
    }
}
