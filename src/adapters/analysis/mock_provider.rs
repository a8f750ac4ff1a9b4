//! Mock analysis provider for testing.
//!
//! Configurable implementation of the AnalysisProvider port, allowing tests
//! to run without calling a real analysis service.
//!
//! # Features
//!
//! - Pre-configured reports (consumed in order)
//! - Error injection for resilience testing
//! - Call tracking for verification

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{AnalysisError, AnalysisProvider, AnalysisReport, AnalysisRequest};

const MOCK_MODEL: &str = "mock-analyst-1";

/// Mock analysis provider.
///
/// Returns queued reports in order; once the queue is empty it synthesizes
/// a deterministic report from the request.
#[derive(Debug, Clone, Default)]
pub struct MockAnalysisProvider {
    responses: Arc<Mutex<VecDeque<Result<AnalysisReport, AnalysisError>>>>,
    calls: Arc<Mutex<Vec<AnalysisRequest>>>,
}

impl MockAnalysisProvider {
    /// Creates a new mock provider with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful report.
    pub fn with_report(self, content: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(AnalysisReport {
            content: content.into(),
            model: MOCK_MODEL.to_string(),
        }));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: AnalysisError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns every request seen so far.
    pub fn calls(&self) -> Vec<AnalysisRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisProvider for MockAnalysisProvider {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
        self.calls.lock().unwrap().push(request.clone());

        if let Some(queued) = self.responses.lock().unwrap().pop_front() {
            return queued;
        }

        Ok(AnalysisReport {
            content: format!(
                "{} analysis of {}: generated by mock provider.",
                request.analysis_type.to_uppercase(),
                request.company_name
            ),
            model: MOCK_MODEL.to_string(),
        })
    }
}
