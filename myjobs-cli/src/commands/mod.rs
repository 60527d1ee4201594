//! CLI command implementations

pub mod companies;
pub mod config;
pub mod jobs;
pub mod login;
pub mod logout;
pub mod logs;
pub mod profile;
pub mod recommend;
pub mod signup;
pub mod status;
pub mod swipe;
pub mod theme;

use std::path::PathBuf;

use anyhow::{Context, Result};
use myjobs_core::services::{LogEvent, LoggingService};
use myjobs_core::MyJobsContext;

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let app_dir = get_app_dir();
    std::fs::create_dir_all(&app_dir).ok()?;
    LoggingService::new(&app_dir, "cli", env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the app directory from environment or default
pub fn get_app_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MYJOBS_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".myjobs")
    }
}

/// Get or create the app context
pub fn get_context() -> Result<MyJobsContext> {
    let app_dir = get_app_dir();

    std::fs::create_dir_all(&app_dir)
        .with_context(|| format!("Failed to create app directory: {:?}", app_dir))?;

    MyJobsContext::new(&app_dir)
}

/// Fail with a login hint when no session exists
pub fn require_login(ctx: &MyJobsContext) -> Result<()> {
    if ctx.auth_service.is_authenticated() {
        Ok(())
    } else {
        anyhow::bail!("Not logged in. Run 'mj login' first.")
    }
}
