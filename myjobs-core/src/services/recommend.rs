//! Recommendation service - pre-authored "AI" job matches
//!
//! There is no model. The service sleeps for the configured latency to mimic
//! inference, then returns the fixture recommendations joined with their
//! jobs. Refreshing just runs the same timer again.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::config::Config;
use crate::domain::result::Result;
use crate::domain::Job;
use crate::ports::Catalog;

/// A recommendation resolved against its job posting
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedJob {
    pub job: Job,
    pub match_score: u8,
    pub reason: String,
    pub highlights: Vec<String>,
}

/// Recommendation service over the read-only catalog
pub struct RecommendationService {
    catalog: Arc<dyn Catalog>,
    latency: Duration,
}

impl RecommendationService {
    pub fn new(catalog: Arc<dyn Catalog>, config: &Config) -> Self {
        Self {
            catalog,
            latency: config.recommendation_latency(),
        }
    }

    /// Produce the recommendation list, best match first. Entries pointing
    /// at a job id the catalog doesn't know are dropped.
    pub async fn recommendations(&self) -> Result<Vec<RecommendedJob>> {
        tokio::time::sleep(self.latency).await;

        let mut recommended: Vec<RecommendedJob> = self
            .catalog
            .recommendations()
            .iter()
            .filter_map(|rec| {
                self.catalog.job_by_id(rec.job_id).map(|job| RecommendedJob {
                    job: job.clone(),
                    match_score: rec.match_score,
                    reason: rec.reason.clone(),
                    highlights: rec.highlights.clone(),
                })
            })
            .collect();

        recommended.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        Ok(recommended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticCatalog;
    use crate::domain::{Recommendation, UserStats};

    fn fast_config() -> Config {
        let mut config = Config::default();
        config.recommendation_latency_ms = 0;
        config
    }

    #[tokio::test]
    async fn test_recommendations_join_jobs_by_score() {
        let service = RecommendationService::new(Arc::new(StaticCatalog::new()), &fast_config());
        let recs = service.recommendations().await.unwrap();

        let scores: Vec<u8> = recs.iter().map(|r| r.match_score).collect();
        assert_eq!(scores, vec![95, 88, 82]);
        let job_ids: Vec<i64> = recs.iter().map(|r| r.job.id).collect();
        assert_eq!(job_ids, vec![1, 3, 5]);
        assert_eq!(recs[0].job.title, "Senior React Developer");
    }

    /// Catalog whose single recommendation targets a job that does not exist
    struct DanglingCatalog {
        inner: StaticCatalog,
        recs: Vec<Recommendation>,
    }

    impl Catalog for DanglingCatalog {
        fn companies(&self) -> &[crate::domain::Company] {
            self.inner.companies()
        }
        fn jobs(&self) -> &[Job] {
            self.inner.jobs()
        }
        fn talents(&self) -> &[crate::domain::Talent] {
            self.inner.talents()
        }
        fn recommendations(&self) -> &[Recommendation] {
            &self.recs
        }
        fn user_stats(&self) -> &UserStats {
            self.inner.user_stats()
        }
    }

    #[tokio::test]
    async fn test_dangling_job_ids_are_skipped() {
        let catalog = DanglingCatalog {
            inner: StaticCatalog::new(),
            recs: vec![Recommendation {
                job_id: 999,
                match_score: 90,
                reason: "stale".to_string(),
                highlights: vec![],
            }],
        };
        let service = RecommendationService::new(Arc::new(catalog), &fast_config());
        assert!(service.recommendations().await.unwrap().is_empty());
    }
}
