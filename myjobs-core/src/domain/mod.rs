//! Core domain types

pub mod catalog;
pub mod matching;
pub mod result;
pub mod session;
pub mod theme;
pub mod user;

pub use catalog::{Company, DayActivity, Job, Recommendation, Talent, UserStats};
pub use matching::MatchingDecisions;
pub use session::AuthSession;
pub use theme::Theme;
pub use user::{User, UserPatch};
