//! MyJobs Core - business logic for the talent-matching demo
//!
//! This crate implements the core logic following hexagonal architecture:
//!
//! - **domain**: Core entities (User, AuthSession, MatchingDecisions, etc.)
//! - **ports**: Trait definitions for external dependencies (StateStore, Catalog)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (JSON file store, static fixture)
//!
//! Everything is a local demo: auth accepts any plausible credentials, the
//! catalog is a built-in fixture, and the "AI" is a timer.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::{JsonFileStore, StaticCatalog};
use config::Config;
use ports::{Catalog, StateStore};
use services::*;

// Re-export commonly used types at crate root
pub use domain::{
    AuthSession, Company, Job, MatchingDecisions, Recommendation, Talent, Theme, User, UserPatch,
    UserStats,
};
pub use domain::result::{Error, OperationResult};

/// Main context for MyJobs operations
///
/// This is the primary entry point for all business logic. It holds the
/// configuration, the persisted state store, the catalog fixture, and all
/// services seeded from persisted state.
pub struct MyJobsContext {
    pub config: Config,
    pub store: Arc<dyn StateStore>,
    pub catalog: Arc<dyn Catalog>,
    pub auth_service: AuthService,
    pub theme_service: ThemeService,
    pub matching_service: MatchingService,
    pub deck_service: DeckService,
    pub recommendation_service: RecommendationService,
    pub status_service: StatusService,
}

impl MyJobsContext {
    /// Create a new context rooted at the given app directory
    pub fn new(app_dir: &Path) -> Result<Self> {
        let config = Config::load(app_dir)?;
        let store: Arc<dyn StateStore> = Arc::new(JsonFileStore::new(app_dir)?);
        let catalog: Arc<dyn Catalog> = Arc::new(StaticCatalog::new());

        Ok(Self::with_parts(config, store, catalog))
    }

    /// Assemble a context from explicit parts (tests use a memory store)
    pub fn with_parts(
        config: Config,
        store: Arc<dyn StateStore>,
        catalog: Arc<dyn Catalog>,
    ) -> Self {
        let auth_service = AuthService::new(Arc::clone(&store), &config);
        let theme_service = ThemeService::new(Arc::clone(&store));
        let matching_service = MatchingService::new(Arc::clone(&store));
        let deck_service = DeckService::new(Arc::clone(&catalog), &config);
        let recommendation_service = RecommendationService::new(Arc::clone(&catalog), &config);
        let status_service = StatusService::new(Arc::clone(&catalog));

        Self {
            config,
            store,
            catalog,
            auth_service,
            theme_service,
            matching_service,
            deck_service,
            recommendation_service,
            status_service,
        }
    }

    /// Dashboard summary over the current session and decisions
    pub fn status(&self) -> StatusSummary {
        self.status_service.get_status(
            self.auth_service.session(),
            self.matching_service.decisions(),
        )
    }
}
