//! Logout command

use anyhow::Result;

use myjobs_core::services::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run() -> Result<()> {
    let logger = get_logger();
    let mut ctx = get_context()?;

    if !ctx.auth_service.is_authenticated() {
        output::warning("Not logged in.");
        return Ok(());
    }

    ctx.auth_service.logout()?;
    log_event(&logger, LogEvent::new("logout").with_command("logout"));
    output::success("Logged out. Your theme and matching progress are kept.");
    Ok(())
}
