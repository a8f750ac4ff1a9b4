//! Seeding service - populates an empty store with the demo dataset.
//!
//! Runs once at process start, before the store is exposed to concurrent
//! traffic. Idempotence is keyed on the contact count: any existing contact
//! means the store is considered populated and the whole run is a no-op.
//!
//! Deals and activities reference contacts (and deals) by 1-based insertion
//! position, not by identifier: store-assigned ids are opaque, so each bulk
//! insert builds a position-to-id map before the next dependent list is
//! constructed. Contacts must be fully committed before deals are built,
//! and deals before activities; the sequencing is a hard constraint.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::crm::{Activity, CompanyIntel, Contact, Deal};
use crate::domain::foundation::{ContactId, DealId, DomainError, Timestamp, UserId};
use crate::ports::{ActivityRepository, ContactRepository, DealRepository, IntelRepository};

const SEED_USER: &str = "system";
const SEED_TEAM: &str = "Sales Team";

struct SeedContact {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    company: &'static str,
    title: &'static str,
    status: &'static str,
    source: &'static str,
}

struct SeedDeal {
    contact_pos: usize,
    title: &'static str,
    value: f64,
    stage: &'static str,
    probability: i32,
    expected_close: &'static str,
}

struct SeedActivity {
    contact_pos: usize,
    deal_pos: Option<usize>,
    kind: &'static str,
    subject: &'static str,
    description: &'static str,
    date: &'static str,
    completed: bool,
}

struct SeedIntel {
    company_name: &'static str,
    analysis_type: &'static str,
    content: &'static str,
}

const DEMO_CONTACTS: [SeedContact; 10] = [
    SeedContact { name: "Alice Johnson", email: "alice@techcorp.com", phone: "+1-555-0101", company: "TechCorp", title: "VP Engineering", status: "lead", source: "linkedin" },
    SeedContact { name: "Bob Smith", email: "bob@startups.inc", phone: "+1-555-0102", company: "Startups Inc", title: "CEO", status: "contacted", source: "referral" },
    SeedContact { name: "Charlie Brown", email: "charlie@enterprise.global", phone: "+1-555-0103", company: "Enterprise Global", title: "CTO", status: "proposal", source: "website" },
    SeedContact { name: "Diana Prince", email: "diana@amazonia.net", phone: "+1-555-0104", company: "Amazonia", title: "Head of Procurement", status: "negotiation", source: "cold_call" },
    SeedContact { name: "Evan Wright", email: "evan@logistics.co", phone: "+1-555-0105", company: "Logistics Co", title: "Operations Director", status: "lead", source: "website" },
    SeedContact { name: "Fiona Green", email: "fiona@ecofriendly.org", phone: "+1-555-0106", company: "EcoFriendly", title: "Sustainability Lead", status: "contacted", source: "referral" },
    SeedContact { name: "George King", email: "george@royal.ltd", phone: "+1-555-0107", company: "Royal Ltd", title: "Managing Director", status: "proposal", source: "linkedin" },
    SeedContact { name: "Hannah White", email: "hannah@medical.care", phone: "+1-555-0108", company: "Medical Care", title: "Administrator", status: "closed_won", source: "referral" },
    SeedContact { name: "Ian Black", email: "ian@construction.works", phone: "+1-555-0109", company: "Construction Works", title: "Project Manager", status: "lead", source: "cold_call" },
    SeedContact { name: "Jane Doe", email: "jane@unknown.net", phone: "+1-555-0110", company: "Unknown Net", title: "Founder", status: "closed_lost", source: "website" },
];

const DEMO_DEALS: [SeedDeal; 8] = [
    SeedDeal { contact_pos: 1, title: "TechCorp Platform License", value: 45000.0, stage: "qualified", probability: 30, expected_close: "2026-04-15" },
    SeedDeal { contact_pos: 2, title: "Startups Inc Annual Plan", value: 12000.0, stage: "proposal", probability: 60, expected_close: "2026-03-20" },
    SeedDeal { contact_pos: 3, title: "Enterprise Global Migration", value: 150000.0, stage: "negotiation", probability: 75, expected_close: "2026-03-01" },
    SeedDeal { contact_pos: 4, title: "Amazonia Procurement Suite", value: 85000.0, stage: "negotiation", probability: 80, expected_close: "2026-02-28" },
    SeedDeal { contact_pos: 7, title: "Royal Ltd Consulting", value: 35000.0, stage: "proposal", probability: 50, expected_close: "2026-04-01" },
    SeedDeal { contact_pos: 8, title: "Medical Care Integration", value: 28000.0, stage: "closed_won", probability: 100, expected_close: "2026-01-15" },
    SeedDeal { contact_pos: 5, title: "Logistics Fleet Tracker", value: 52000.0, stage: "qualified", probability: 25, expected_close: "2026-05-01" },
    SeedDeal { contact_pos: 10, title: "Unknown Net Pilot", value: 8000.0, stage: "closed_lost", probability: 0, expected_close: "2026-01-10" },
];

const DEMO_ACTIVITIES: [SeedActivity; 8] = [
    SeedActivity { contact_pos: 1, deal_pos: Some(1), kind: "call", subject: "Discovery call", description: "Discussed platform needs. Evaluating 3 vendors.", date: "2026-02-10 10:00:00", completed: true },
    SeedActivity { contact_pos: 2, deal_pos: Some(2), kind: "email", subject: "Proposal sent", description: "Sent annual plan proposal with pricing.", date: "2026-02-11 14:30:00", completed: true },
    SeedActivity { contact_pos: 3, deal_pos: Some(3), kind: "meeting", subject: "Technical review", description: "CTO reviewed architecture. Positive on scalability.", date: "2026-02-12 09:00:00", completed: true },
    SeedActivity { contact_pos: 4, deal_pos: Some(4), kind: "call", subject: "Procurement check-in", description: "Budget approved. Waiting on legal.", date: "2026-02-13 11:00:00", completed: true },
    SeedActivity { contact_pos: 1, deal_pos: None, kind: "task", subject: "Follow up with Alice", description: "Send case studies.", date: "2026-02-15 09:00:00", completed: false },
    SeedActivity { contact_pos: 5, deal_pos: Some(7), kind: "email", subject: "Introduction email", description: "Initial outreach about fleet tracking.", date: "2026-02-08 16:00:00", completed: true },
    SeedActivity { contact_pos: 6, deal_pos: None, kind: "note", subject: "Research note", description: "EcoFriendly got Series B. Good time to re-engage.", date: "2026-02-13 08:00:00", completed: true },
    SeedActivity { contact_pos: 8, deal_pos: Some(6), kind: "meeting", subject: "Onboarding kickoff", description: "Kicked off implementation. 6-week timeline.", date: "2026-01-20 10:00:00", completed: true },
];

const DEMO_INTEL: [SeedIntel; 2] = [
    SeedIntel {
        company_name: "TechCorp",
        analysis_type: "swot",
        content: "STRENGTHS: Strong engineering team, growing market share. WEAKNESSES: High burn rate. OPPORTUNITIES: Expanding to Europe. THREATS: Competitor X offering 20% discount.",
    },
    SeedIntel {
        company_name: "Enterprise Global",
        analysis_type: "competitor",
        content: "Evaluating three vendors including us. Primary concern: migration risk. Our advantage: better post-migration support and 99.9% uptime SLA.",
    },
];

/// Populates an empty store with the demo dataset exactly once.
pub struct SeedService {
    contacts: Arc<dyn ContactRepository>,
    deals: Arc<dyn DealRepository>,
    activities: Arc<dyn ActivityRepository>,
    intel: Arc<dyn IntelRepository>,
}

impl SeedService {
    pub fn new(
        contacts: Arc<dyn ContactRepository>,
        deals: Arc<dyn DealRepository>,
        activities: Arc<dyn ActivityRepository>,
        intel: Arc<dyn IntelRepository>,
    ) -> Self {
        Self {
            contacts,
            deals,
            activities,
            intel,
        }
    }

    /// Runs the seed. No-op when any contact already exists.
    pub async fn run(&self) -> Result<(), DomainError> {
        if self.contacts.count().await? > 0 {
            tracing::info!("store already has contacts, skipping seed");
            return Ok(());
        }

        let owner = UserId::new(SEED_USER)?;

        let contact_ids = self.seed_contacts(&owner).await?;
        let deal_ids = self.seed_deals(&contact_ids).await?;
        self.seed_activities(&contact_ids, &deal_ids).await?;
        self.seed_intel().await?;

        tracing::info!(
            contacts = contact_ids.len(),
            deals = deal_ids.len(),
            "demo dataset seeded"
        );
        Ok(())
    }

    async fn seed_contacts(&self, owner: &UserId) -> Result<Vec<ContactId>, DomainError> {
        let mut contact_ids = Vec::with_capacity(DEMO_CONTACTS.len());
        for row in &DEMO_CONTACTS {
            let contact = Contact::new(
                owner.clone(),
                row.name.to_string(),
                row.email.to_string(),
                Some(row.phone.to_string()),
                Some(row.company.to_string()),
                Some(row.title.to_string()),
                Some(row.status.to_string()),
                Some(row.source.to_string()),
                None,
                Some(SEED_TEAM.to_string()),
            )?;
            self.contacts.insert(&contact).await?;
            contact_ids.push(contact.id);
        }
        Ok(contact_ids)
    }

    async fn seed_deals(&self, contact_ids: &[ContactId]) -> Result<Vec<DealId>, DomainError> {
        let mut deal_ids = Vec::with_capacity(DEMO_DEALS.len());
        for row in &DEMO_DEALS {
            let Some(contact_id) = position_to_id(contact_ids, row.contact_pos) else {
                tracing::warn!(
                    title = row.title,
                    contact_pos = row.contact_pos,
                    "seed deal references unknown contact position, skipping"
                );
                continue;
            };

            let deal = Deal::new(
                contact_id,
                row.title.to_string(),
                row.value,
                Some(row.stage.to_string()),
                row.probability,
                NaiveDate::parse_from_str(row.expected_close, "%Y-%m-%d").ok(),
                None,
            )?;
            self.deals.insert(&deal).await?;
            // Positions for activities count inserted deals only.
            deal_ids.push(deal.id);
        }
        Ok(deal_ids)
    }

    async fn seed_activities(
        &self,
        contact_ids: &[ContactId],
        deal_ids: &[DealId],
    ) -> Result<(), DomainError> {
        for row in &DEMO_ACTIVITIES {
            let Some(contact_id) = position_to_id(contact_ids, row.contact_pos) else {
                tracing::warn!(
                    subject = row.subject,
                    contact_pos = row.contact_pos,
                    "seed activity references unknown contact position, skipping"
                );
                continue;
            };

            // An unresolved deal position drops the link but keeps the row.
            let deal_id = row
                .deal_pos
                .and_then(|pos| position_to_id(deal_ids, pos));

            let mut activity = Activity::new(
                contact_id,
                deal_id,
                row.kind.to_string(),
                row.subject.to_string(),
                Some(row.description.to_string()),
                Timestamp::parse(row.date).unwrap_or_else(Timestamp::now),
            )?;
            if row.completed {
                activity.complete();
            }
            self.activities.insert(&activity).await?;
        }
        Ok(())
    }

    async fn seed_intel(&self) -> Result<(), DomainError> {
        for row in &DEMO_INTEL {
            let intel = CompanyIntel::new(
                row.company_name.to_string(),
                row.analysis_type.to_string(),
                row.content.to_string(),
                Some("seed_data".to_string()),
                Some(SEED_USER.to_string()),
            )?;
            self.intel.insert(&intel).await?;
        }
        Ok(())
    }
}

/// Resolves a 1-based insertion position to a store-assigned id.
fn position_to_id<T: Copy>(ids: &[T], pos: usize) -> Option<T> {
    pos.checked_sub(1).and_then(|i| ids.get(i)).copied()
}
