//! Service layer - business logic orchestration
//!
//! Services own the persisted state stores and page-level logic. Each one
//! focuses on a single feature area of the app.

mod auth;
mod deck;
pub mod logging;
mod matching;
mod recommend;
mod status;
mod theme;

pub use auth::AuthService;
pub use deck::{DeckCounts, DeckOutcome, DeckService, SwipeDirection};
pub use logging::{LogEntry, LogEvent, LoggingService};
pub use matching::MatchingService;
pub use recommend::{RecommendationService, RecommendedJob};
pub use status::{StatusService, StatusSummary};
pub use theme::ThemeService;
