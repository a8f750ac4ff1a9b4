//! In-Memory Entity Store Adapter
//!
//! One store implements every repository port over shared vectors guarded
//! by a single `RwLock`. Holding the one write guard across the whole
//! cascade makes contact deletion atomic: no reader ever observes a deal
//! without its contact. Vectors keep insertion order, which is the ordering
//! contract of the repository `list` operations.
//!
//! Useful for testing and local development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::crm::{Activity, CompanyIntel, Contact, Deal};
use crate::domain::foundation::{
    ActivityId, AnalysisId, ContactId, DealId, DomainError, ErrorCode,
};
use crate::ports::{ActivityRepository, ContactRepository, DealRepository, IntelRepository};

#[derive(Debug, Default)]
struct StoreInner {
    contacts: Vec<Contact>,
    deals: Vec<Deal>,
    activities: Vec<Activity>,
    analyses: Vec<CompanyIntel>,
}

/// In-memory store implementing all repository ports.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests).
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.contacts.clear();
        inner.deals.clear();
        inner.activities.clear();
        inner.analyses.clear();
    }

    /// Number of stored deals.
    pub async fn deal_count(&self) -> usize {
        self.inner.read().await.deals.len()
    }

    /// Number of stored activities.
    pub async fn activity_count(&self) -> usize {
        self.inner.read().await.activities.len()
    }

    /// Number of stored analyses.
    pub async fn analysis_count(&self) -> usize {
        self.inner.read().await.analyses.len()
    }
}

#[async_trait]
impl ContactRepository for InMemoryStore {
    async fn insert(&self, contact: &Contact) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        inner.contacts.push(contact.clone());
        Ok(())
    }

    async fn update(&self, contact: &Contact) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        match inner.contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(slot) => {
                *slot = contact.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ContactNotFound,
                format!("Contact not found: {}", contact.id),
            )),
        }
    }

    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.contacts.iter().find(|c| c.id == *id).cloned())
    }

    async fn exists(&self, id: &ContactId) -> Result<bool, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.contacts.iter().any(|c| c.id == *id))
    }

    async fn list(&self) -> Result<Vec<Contact>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.contacts.clone())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.contacts.len() as u64)
    }

    async fn delete(&self, id: &ContactId) -> Result<(), DomainError> {
        // Single write guard for the whole cascade.
        let mut inner = self.inner.write().await;

        let before = inner.contacts.len();
        inner.contacts.retain(|c| c.id != *id);
        if inner.contacts.len() == before {
            return Err(DomainError::new(
                ErrorCode::ContactNotFound,
                format!("Contact not found: {}", id),
            ));
        }

        inner.deals.retain(|d| d.contact_id != *id);
        inner.activities.retain(|a| a.contact_id != *id);
        Ok(())
    }
}

#[async_trait]
impl DealRepository for InMemoryStore {
    async fn insert(&self, deal: &Deal) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        if !inner.contacts.iter().any(|c| c.id == deal.contact_id) {
            return Err(DomainError::new(
                ErrorCode::ReferenceNotFound,
                format!("Deal references unknown contact: {}", deal.contact_id),
            ));
        }
        inner.deals.push(deal.clone());
        Ok(())
    }

    async fn update(&self, deal: &Deal) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        match inner.deals.iter_mut().find(|d| d.id == deal.id) {
            Some(slot) => {
                *slot = deal.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::DealNotFound,
                format!("Deal not found: {}", deal.id),
            )),
        }
    }

    async fn find_by_id(&self, id: &DealId) -> Result<Option<Deal>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.deals.iter().find(|d| d.id == *id).cloned())
    }

    async fn list(&self) -> Result<Vec<Deal>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.deals.clone())
    }

    async fn find_by_contact_id(&self, contact_id: &ContactId) -> Result<Vec<Deal>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .deals
            .iter()
            .filter(|d| d.contact_id == *contact_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &DealId) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;

        let before = inner.deals.len();
        inner.deals.retain(|d| d.id != *id);
        if inner.deals.len() == before {
            return Err(DomainError::new(
                ErrorCode::DealNotFound,
                format!("Deal not found: {}", id),
            ));
        }

        inner.activities.retain(|a| a.deal_id != Some(*id));
        Ok(())
    }
}

#[async_trait]
impl ActivityRepository for InMemoryStore {
    async fn insert(&self, activity: &Activity) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        if !inner.contacts.iter().any(|c| c.id == activity.contact_id) {
            return Err(DomainError::new(
                ErrorCode::ReferenceNotFound,
                format!("Activity references unknown contact: {}", activity.contact_id),
            ));
        }
        if let Some(deal_id) = activity.deal_id {
            if !inner.deals.iter().any(|d| d.id == deal_id) {
                return Err(DomainError::new(
                    ErrorCode::ReferenceNotFound,
                    format!("Activity references unknown deal: {}", deal_id),
                ));
            }
        }
        inner.activities.push(activity.clone());
        Ok(())
    }

    async fn update(&self, activity: &Activity) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        match inner.activities.iter_mut().find(|a| a.id == activity.id) {
            Some(slot) => {
                *slot = activity.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ActivityNotFound,
                format!("Activity not found: {}", activity.id),
            )),
        }
    }

    async fn find_by_id(&self, id: &ActivityId) -> Result<Option<Activity>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.activities.iter().find(|a| a.id == *id).cloned())
    }

    async fn list(&self) -> Result<Vec<Activity>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.activities.clone())
    }

    async fn find_by_contact_id(
        &self,
        contact_id: &ContactId,
    ) -> Result<Vec<Activity>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .activities
            .iter()
            .filter(|a| a.contact_id == *contact_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl IntelRepository for InMemoryStore {
    async fn insert(&self, intel: &CompanyIntel) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        inner.analyses.push(intel.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &AnalysisId) -> Result<Option<CompanyIntel>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.analyses.iter().find(|a| a.id == *id).cloned())
    }

    async fn list(&self) -> Result<Vec<CompanyIntel>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.analyses.clone())
    }
}
