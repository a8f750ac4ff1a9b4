//! Company intel repository port.

use async_trait::async_trait;

use crate::domain::crm::CompanyIntel;
use crate::domain::foundation::{AnalysisId, DomainError};

/// Repository port for generated company analyses.
#[async_trait]
pub trait IntelRepository: Send + Sync {
    /// Insert a new analysis record.
    ///
    /// # Errors
    ///
    /// - `StoreUnavailable` on persistence failure
    async fn insert(&self, intel: &CompanyIntel) -> Result<(), DomainError>;

    /// Find an analysis by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AnalysisId) -> Result<Option<CompanyIntel>, DomainError>;

    /// List all analyses in insertion order.
    async fn list(&self) -> Result<Vec<CompanyIntel>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn intel_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn IntelRepository) {}
    }
}
