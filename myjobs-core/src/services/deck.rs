//! Swipe deck - the matching filter over the company catalog
//!
//! The deck is the undecided slice of the fixed company list in original
//! order; the "cursor" is always the first remaining entry. A decision
//! mutates and persists the matching state first, then hands the caller the
//! cosmetic transition duration to play. State never waits on the
//! transition, so a rapid second decision cannot double-apply.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::config::Config;
use crate::domain::result::Result;
use crate::domain::{Company, MatchingDecisions};
use crate::ports::Catalog;
use crate::services::MatchingService;

/// Binary swipe input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Swipe right: interested
    Like,
    /// Swipe left: skip
    Pass,
}

/// Result of a decision on the deck
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "outcome")]
pub enum DeckOutcome {
    /// The decision was applied and persisted
    Decided {
        company: Company,
        direction: SwipeDirection,
        /// Liked companies count as matches until a counterparty exists
        matched: bool,
        /// How long the UI should play its swipe animation
        #[serde(skip)]
        transition: Duration,
    },
    /// No companies left to decide on; only a reset refills the deck
    Exhausted,
}

/// Like/passed/remaining badge counts
#[derive(Debug, Clone, Serialize)]
pub struct DeckCounts {
    pub likes: usize,
    pub passed: usize,
    pub remaining: usize,
}

/// Deck service deriving the presentable companies from catalog + decisions
pub struct DeckService {
    catalog: Arc<dyn Catalog>,
    transition: Duration,
}

impl DeckService {
    pub fn new(catalog: Arc<dyn Catalog>, config: &Config) -> Self {
        Self {
            catalog,
            transition: config.swipe_transition(),
        }
    }

    /// Companies not yet decided either way, in original catalog order
    pub fn available(&self, decisions: &MatchingDecisions) -> Vec<Company> {
        self.catalog
            .companies()
            .iter()
            .filter(|c| !decisions.decided(c.id))
            .cloned()
            .collect()
    }

    /// The card currently on top of the deck
    pub fn current(&self, decisions: &MatchingDecisions) -> Option<Company> {
        self.catalog
            .companies()
            .iter()
            .find(|c| !decisions.decided(c.id))
            .cloned()
    }

    pub fn counts(&self, decisions: &MatchingDecisions) -> DeckCounts {
        DeckCounts {
            likes: decisions.liked_companies.len(),
            passed: decisions.disliked_companies.len(),
            remaining: self.available(decisions).len(),
        }
    }

    /// Decide on the current card. The mutation is applied and persisted
    /// before this returns; the transition in the outcome is purely for the
    /// caller's animation.
    pub fn decide(
        &self,
        matching: &mut MatchingService,
        direction: SwipeDirection,
    ) -> Result<DeckOutcome> {
        let Some(company) = self.current(matching.decisions()) else {
            return Ok(DeckOutcome::Exhausted);
        };

        match direction {
            SwipeDirection::Like => matching.like_company(company.id)?,
            SwipeDirection::Pass => matching.dislike_company(company.id)?,
        }

        Ok(DeckOutcome::Decided {
            company,
            direction,
            matched: direction == SwipeDirection::Like,
            transition: self.transition,
        })
    }

    /// Decide on a specific company by id instead of the top card
    pub fn decide_on(
        &self,
        matching: &mut MatchingService,
        company_id: i64,
        direction: SwipeDirection,
    ) -> Result<DeckOutcome> {
        let Some(company) = self.catalog.company_by_id(company_id).cloned() else {
            return Err(crate::domain::result::Error::not_found(format!(
                "company {}",
                company_id
            )));
        };

        match direction {
            SwipeDirection::Like => matching.like_company(company.id)?,
            SwipeDirection::Pass => matching.dislike_company(company.id)?,
        }

        Ok(DeckOutcome::Decided {
            company,
            direction,
            matched: direction == SwipeDirection::Like,
            transition: self.transition,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryStore, StaticCatalog};
    use crate::ports::StateStore;

    fn setup() -> (DeckService, MatchingService) {
        let config = Config::default();
        let deck = DeckService::new(Arc::new(StaticCatalog::new()), &config);
        let matching = MatchingService::new(Arc::new(MemoryStore::new()) as Arc<dyn StateStore>);
        (deck, matching)
    }

    #[test]
    fn test_full_deck_initially() {
        let (deck, matching) = setup();
        let available = deck.available(matching.decisions());
        assert_eq!(available.len(), 5);
        assert_eq!(deck.current(matching.decisions()).unwrap().id, 1);
    }

    #[test]
    fn test_available_excludes_decided_preserving_order() {
        let (deck, mut matching) = setup();
        matching.like_company(1).unwrap();
        matching.like_company(2).unwrap();

        let ids: Vec<i64> = deck
            .available(matching.decisions())
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![3, 4, 5]);
        assert_eq!(matching.decisions().liked_companies, vec![1, 2]);
    }

    #[test]
    fn test_decide_advances_to_next_card() {
        let (deck, mut matching) = setup();

        let outcome = deck.decide(&mut matching, SwipeDirection::Like).unwrap();
        match outcome {
            DeckOutcome::Decided {
                company, matched, ..
            } => {
                assert_eq!(company.id, 1);
                assert!(matched);
            }
            DeckOutcome::Exhausted => panic!("deck should not be empty"),
        }

        assert_eq!(deck.current(matching.decisions()).unwrap().id, 2);
    }

    #[test]
    fn test_available_never_grows_under_decisions() {
        let (deck, mut matching) = setup();
        let mut previous = deck.available(matching.decisions()).len();

        for direction in [
            SwipeDirection::Like,
            SwipeDirection::Pass,
            SwipeDirection::Like,
        ] {
            deck.decide(&mut matching, direction).unwrap();
            let now = deck.available(matching.decisions()).len();
            assert!(now <= previous);
            previous = now;
        }
    }

    #[test]
    fn test_exhausted_after_all_decisions() {
        let (deck, mut matching) = setup();
        for _ in 0..5 {
            let outcome = deck.decide(&mut matching, SwipeDirection::Pass).unwrap();
            assert!(matches!(outcome, DeckOutcome::Decided { .. }));
        }

        assert!(deck.current(matching.decisions()).is_none());
        let outcome = deck.decide(&mut matching, SwipeDirection::Like).unwrap();
        assert!(matches!(outcome, DeckOutcome::Exhausted));
    }

    #[test]
    fn test_reset_refills_the_deck() {
        let (deck, mut matching) = setup();
        for _ in 0..5 {
            deck.decide(&mut matching, SwipeDirection::Like).unwrap();
        }
        matching.reset().unwrap();
        assert_eq!(deck.available(matching.decisions()).len(), 5);
        assert_eq!(deck.counts(matching.decisions()).likes, 0);
    }

    #[test]
    fn test_decision_persists_before_transition_is_surfaced() {
        // The state write happens inside decide(); by the time the caller
        // sees the transition duration the blob is already updated.
        let config = Config::default();
        let store = Arc::new(MemoryStore::new());
        let deck = DeckService::new(Arc::new(StaticCatalog::new()), &config);
        let mut matching = MatchingService::new(Arc::clone(&store) as Arc<dyn StateStore>);

        let outcome = deck.decide(&mut matching, SwipeDirection::Like).unwrap();
        let blob = store.load(crate::ports::MATCHING_BLOB).unwrap().unwrap();
        assert_eq!(blob["likedCompanies"], serde_json::json!([1]));
        match outcome {
            DeckOutcome::Decided { transition, .. } => {
                assert_eq!(transition, config.swipe_transition());
            }
            DeckOutcome::Exhausted => panic!("deck should not be empty"),
        }
    }

    #[test]
    fn test_decide_on_unknown_company_is_an_error() {
        let (deck, mut matching) = setup();
        assert!(deck
            .decide_on(&mut matching, 99, SwipeDirection::Like)
            .is_err());
    }
}
