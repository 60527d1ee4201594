//! Swipe decisions over the company catalog

use serde::{Deserialize, Serialize};

/// Accumulated like/dislike decisions.
///
/// Invariant: a company id appears in at most one of liked/disliked. Each
/// decision removes any prior membership in the opposite list before adding,
/// so re-deciding a company moves it rather than duplicating it.
///
/// `matches` currently mirrors `liked`; with no counterparty there is nothing
/// to diverge on. Kept as a separate list so the blob layout already has a
/// slot for real mutual matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingDecisions {
    pub liked_companies: Vec<i64>,
    pub disliked_companies: Vec<i64>,
    pub matches: Vec<i64>,
}

impl MatchingDecisions {
    /// Record a like. Removes the id from the disliked list if present and
    /// dedupes against earlier likes.
    pub fn like(&mut self, company_id: i64) {
        self.disliked_companies.retain(|&id| id != company_id);
        if !self.liked_companies.contains(&company_id) {
            self.liked_companies.push(company_id);
        }
        if !self.matches.contains(&company_id) {
            self.matches.push(company_id);
        }
    }

    /// Record a dislike, symmetric to [`like`](Self::like).
    pub fn dislike(&mut self, company_id: i64) {
        self.liked_companies.retain(|&id| id != company_id);
        self.matches.retain(|&id| id != company_id);
        if !self.disliked_companies.contains(&company_id) {
            self.disliked_companies.push(company_id);
        }
    }

    /// Clear all decisions
    pub fn reset(&mut self) {
        self.liked_companies.clear();
        self.disliked_companies.clear();
        self.matches.clear();
    }

    /// Whether the company has already been decided either way
    pub fn decided(&self, company_id: i64) -> bool {
        self.liked_companies.contains(&company_id)
            || self.disliked_companies.contains(&company_id)
    }
}
