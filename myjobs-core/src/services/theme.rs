//! Theme service - persisted light/dark preference
//!
//! The service only stores the value. Presentation (the old DOM class side
//! effect) is a pure function of the theme, applied by whoever renders it;
//! that also covers restore-from-persistence without a special case.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::result::Result;
use crate::domain::Theme;
use crate::ports::{load_state, save_state, StateStore, THEME_BLOB};

/// Persisted shape of the `theme` blob
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ThemeState {
    theme: Theme,
}

/// Theme service owning the preference, persisted to the `theme` blob
pub struct ThemeService {
    state: ThemeState,
    store: Arc<dyn StateStore>,
}

impl ThemeService {
    /// Seed from persistence; absent or corrupt blob means light
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        let state = load_state::<ThemeState>(store.as_ref(), THEME_BLOB).unwrap_or_default();
        Self { state, store }
    }

    pub fn current(&self) -> Theme {
        self.state.theme
    }

    /// Flip light/dark and persist, returning the new value
    pub fn toggle(&mut self) -> Result<Theme> {
        self.state.theme = self.state.theme.toggled();
        self.persist()?;
        Ok(self.state.theme)
    }

    /// Set explicitly and persist
    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.state.theme = theme;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        save_state(self.store.as_ref(), THEME_BLOB, &self.state)
    }
}
