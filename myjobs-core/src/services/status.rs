//! Status service - dashboard summary

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{AuthSession, MatchingDecisions, UserStats};
use crate::ports::Catalog;

/// Status service assembling the dashboard view
pub struct StatusService {
    catalog: Arc<dyn Catalog>,
}

impl StatusService {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    pub fn get_status(
        &self,
        session: &AuthSession,
        decisions: &MatchingDecisions,
    ) -> StatusSummary {
        let remaining = self
            .catalog
            .companies()
            .iter()
            .filter(|c| !decisions.decided(c.id))
            .count();

        StatusSummary {
            user_name: session.user().map(|u| u.name.clone()),
            user_role: session.user().map(|u| u.role.clone()),
            authenticated: session.is_authenticated(),
            stats: self.catalog.user_stats().clone(),
            likes: decisions.liked_companies.len(),
            passed: decisions.disliked_companies.len(),
            companies_remaining: remaining,
            total_jobs: self.catalog.jobs().len(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub user_name: Option<String>,
    pub user_role: Option<String>,
    pub authenticated: bool,
    pub stats: UserStats,
    pub likes: usize,
    pub passed: usize,
    pub companies_remaining: usize,
    pub total_jobs: usize,
}
