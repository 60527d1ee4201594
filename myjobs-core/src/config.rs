//! Configuration management
//!
//! Settings live in `settings.json` in the app directory:
//! ```json
//! {
//!   "app": { "minPasswordLength": 6, "authLatencyMs": 500, ... }
//! }
//! ```
//! Unmanaged fields are preserved across saves.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Demo account baked into the product (shown on the login screen)
pub const DEMO_EMAIL: &str = "demo@demo.de";
pub const DEMO_PASSWORD: &str = "password123";

/// Form-level email syntax check, same pattern the web client used
pub const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";

pub const APP_NAME: &str = "MyJOBS_";
pub const APP_TAGLINE: &str = "Find Your Next Tech Role";

fn default_min_password_length() -> usize {
    6
}

fn default_auth_latency_ms() -> u64 {
    500
}

fn default_recommendation_latency_ms() -> u64 {
    1500
}

fn default_swipe_transition_ms() -> u64 {
    300
}

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default = "default_min_password_length")]
    min_password_length: usize,
    #[serde(default = "default_auth_latency_ms")]
    auth_latency_ms: u64,
    #[serde(default = "default_recommendation_latency_ms")]
    recommendation_latency_ms: u64,
    #[serde(default = "default_swipe_transition_ms")]
    swipe_transition_ms: u64,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            min_password_length: default_min_password_length(),
            auth_latency_ms: default_auth_latency_ms(),
            recommendation_latency_ms: default_recommendation_latency_ms(),
            swipe_transition_ms: default_swipe_transition_ms(),
            other: HashMap::new(),
        }
    }
}

/// App configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub min_password_length: usize,
    pub auth_latency_ms: u64,
    pub recommendation_latency_ms: u64,
    pub swipe_transition_ms: u64,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_password_length: default_min_password_length(),
            auth_latency_ms: default_auth_latency_ms(),
            recommendation_latency_ms: default_recommendation_latency_ms(),
            swipe_transition_ms: default_swipe_transition_ms(),
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the app directory
    ///
    /// `MYJOBS_SIM_LATENCY_MS` overrides all simulated latencies at once
    /// (set it to 0 in CI so tests don't sit in artificial sleeps).
    pub fn load(app_dir: &Path) -> Result<Self> {
        let settings_path = app_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let mut config = Self {
            min_password_length: raw.app.min_password_length,
            auth_latency_ms: raw.app.auth_latency_ms,
            recommendation_latency_ms: raw.app.recommendation_latency_ms,
            swipe_transition_ms: raw.app.swipe_transition_ms,
            _raw_settings: raw,
        };

        if let Some(ms) = std::env::var("MYJOBS_SIM_LATENCY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.auth_latency_ms = ms;
            config.recommendation_latency_ms = ms;
            config.swipe_transition_ms = ms;
        }

        Ok(config)
    }

    /// Save config to the app directory, preserving settings we don't manage
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        let settings_path = app_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.min_password_length = self.min_password_length;
        settings.app.auth_latency_ms = self.auth_latency_ms;
        settings.app.recommendation_latency_ms = self.recommendation_latency_ms;
        settings.app.swipe_transition_ms = self.swipe_transition_ms;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }

    pub fn recommendation_latency(&self) -> Duration {
        Duration::from_millis(self.recommendation_latency_ms)
    }

    pub fn swipe_transition(&self) -> Duration {
        Duration::from_millis(self.swipe_transition_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    // Config::load reads MYJOBS_SIM_LATENCY_MS, so tests that touch the
    // environment must not run concurrently with tests that load config.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_defaults_when_no_settings_file() {
        let _guard = env_guard();
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.min_password_length, 6);
        assert_eq!(config.auth_latency_ms, 500);
        assert_eq!(config.recommendation_latency_ms, 1500);
    }

    #[test]
    fn test_corrupt_settings_fall_back_to_defaults() {
        let _guard = env_guard();
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("settings.json"), "not json at all").unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.min_password_length, 6);
    }

    #[test]
    fn test_env_override_zeroes_all_latencies() {
        let _guard = env_guard();
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app":{"authLatencyMs":500,"recommendationLatencyMs":1500,"swipeTransitionMs":300}}"#,
        )
        .unwrap();

        std::env::set_var("MYJOBS_SIM_LATENCY_MS", "0");
        let config = Config::load(dir.path());
        std::env::remove_var("MYJOBS_SIM_LATENCY_MS");

        let config = config.unwrap();
        assert_eq!(config.auth_latency_ms, 0);
        assert_eq!(config.recommendation_latency_ms, 0);
        assert_eq!(config.swipe_transition_ms, 0);
        // Non-latency settings are untouched by the override
        assert_eq!(config.min_password_length, 6);
    }

    #[test]
    fn test_save_preserves_unmanaged_fields() {
        let _guard = env_guard();
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app":{"minPasswordLength":8,"customFlag":true}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.min_password_length, 8);
        config.save(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["app"]["customFlag"], serde_json::json!(true));
    }

    #[test]
    fn test_save_then_reload_round_trips_changes() {
        let _guard = env_guard();
        let dir = TempDir::new().unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        config.min_password_length = 10;
        config.auth_latency_ms = 0;
        config.save(dir.path()).unwrap();

        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded.min_password_length, 10);
        assert_eq!(reloaded.auth_latency_ms, 0);
        assert_eq!(reloaded.recommendation_latency_ms, 1500);
    }
}
