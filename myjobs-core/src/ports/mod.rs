//! Trait definitions for external dependencies

pub mod catalog;
pub mod state_store;

pub use catalog::Catalog;
pub use state_store::{load_state, save_state, StateStore, AUTH_BLOB, MATCHING_BLOB, THEME_BLOB};
