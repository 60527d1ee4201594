//! Matching service - persisted like/dislike decisions

use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::MatchingDecisions;
use crate::ports::{load_state, save_state, StateStore, MATCHING_BLOB};

/// Matching service owning the decision state, persisted to the `matching`
/// blob. Every mutation writes through before returning.
pub struct MatchingService {
    decisions: MatchingDecisions,
    store: Arc<dyn StateStore>,
}

impl MatchingService {
    /// Seed from persistence; absent or corrupt blob means no decisions yet
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        let decisions =
            load_state::<MatchingDecisions>(store.as_ref(), MATCHING_BLOB).unwrap_or_default();
        Self { decisions, store }
    }

    pub fn decisions(&self) -> &MatchingDecisions {
        &self.decisions
    }

    pub fn like_company(&mut self, company_id: i64) -> Result<()> {
        self.decisions.like(company_id);
        self.persist()
    }

    pub fn dislike_company(&mut self, company_id: i64) -> Result<()> {
        self.decisions.dislike(company_id);
        self.persist()
    }

    /// Clear all decisions, making the full deck available again
    pub fn reset(&mut self) -> Result<()> {
        self.decisions.reset();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        save_state(self.store.as_ref(), MATCHING_BLOB, &self.decisions)
    }
}
