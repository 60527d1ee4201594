//! Catalog port - read-only reference data source
//!
//! The core depends on this data but does not own it. In the demo the only
//! adapter is the static fixture; a real deployment would back this with an
//! API client.

use crate::domain::{Company, Job, Recommendation, Talent, UserStats};

/// Read-only source of companies, jobs, talents, and recommendations
pub trait Catalog: Send + Sync {
    fn companies(&self) -> &[Company];
    fn jobs(&self) -> &[Job];
    fn talents(&self) -> &[Talent];
    fn recommendations(&self) -> &[Recommendation];
    fn user_stats(&self) -> &UserStats;

    fn company_by_id(&self, id: i64) -> Option<&Company> {
        self.companies().iter().find(|c| c.id == id)
    }

    fn job_by_id(&self, id: i64) -> Option<&Job> {
        self.jobs().iter().find(|j| j.id == id)
    }
}
