//! Company intel record.
//!
//! A generated company analysis. Independent of contacts and deals; the only
//! link is the free-text company name.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnalysisId, Timestamp, ValidationError};

/// Canonical analysis types.
pub const ANALYSIS_TYPES: [&str; 3] = ["swot", "competitor", "market"];

/// A generated company analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyIntel {
    /// Unique identifier, assigned at creation.
    pub id: AnalysisId,

    pub company_name: String,

    /// Analysis flavor; canonical values in [`ANALYSIS_TYPES`].
    pub analysis_type: String,

    /// Full analysis text from the provider.
    pub content: String,

    /// Model that produced the content, when known.
    pub model_used: Option<String>,

    pub generated_at: Timestamp,

    /// Opaque identity of whoever requested the analysis.
    pub requested_by: Option<String>,
}

impl CompanyIntel {
    /// Creates a new analysis record with a fresh identifier.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `company_name`, `analysis_type`, or `content` is empty
    pub fn new(
        company_name: String,
        analysis_type: String,
        content: String,
        model_used: Option<String>,
        requested_by: Option<String>,
    ) -> Result<Self, ValidationError> {
        if company_name.is_empty() {
            return Err(ValidationError::empty_field("company_name"));
        }
        if analysis_type.is_empty() {
            return Err(ValidationError::empty_field("analysis_type"));
        }
        if content.is_empty() {
            return Err(ValidationError::empty_field("content"));
        }

        Ok(Self {
            id: AnalysisId::new(),
            company_name,
            analysis_type,
            content,
            model_used,
            generated_at: Timestamp::now(),
            requested_by,
        })
    }
}
