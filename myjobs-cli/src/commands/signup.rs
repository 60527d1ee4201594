//! Signup command - create a profile and log in

use anyhow::Result;
use dialoguer::Input;
use regex::Regex;

use myjobs_core::config::EMAIL_PATTERN;
use myjobs_core::services::LogEvent;
use myjobs_core::UserPatch;

use super::{get_context, get_logger, log_event};
use crate::commands::login::auth_spinner;
use crate::output;

pub async fn run(
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    skills: Vec<String>,
    location: Option<String>,
    json: bool,
) -> Result<()> {
    let logger = get_logger();
    let mut ctx = get_context()?;

    let name = match name {
        Some(n) => n,
        None => prompt("Name")?,
    };
    let email = match email {
        Some(e) => e,
        None => prompt("Email")?,
    };

    let email_re = Regex::new(EMAIL_PATTERN).expect("static pattern is valid");
    if !email_re.is_match(&email) {
        anyhow::bail!("'{}' is not a valid email address", email);
    }

    let payload = UserPatch {
        name: Some(name),
        email: Some(email),
        role,
        skills: if skills.is_empty() { None } else { Some(skills) },
        location,
        ..Default::default()
    };

    let spinner = if json { None } else { Some(auth_spinner("Creating your profile...")) };
    let ok = ctx.auth_service.signup(payload).await?;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    if json {
        let result = if ok {
            myjobs_core::OperationResult::ok(ctx.auth_service.user().cloned())
        } else {
            myjobs_core::OperationResult::fail("signup failed")
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if ok {
        log_event(&logger, LogEvent::new("signup_success").with_command("signup"));
        let user = ctx.auth_service.user().expect("signup succeeded");
        output::success(&format!("Profile created. Welcome, {}!", user.name));
        output::info("Fill in more details with 'mj profile edit'.");
        Ok(())
    } else {
        log_event(&logger, LogEvent::new("signup_failed").with_command("signup"));
        anyhow::bail!("Signup failed. Name and email are required.")
    }
}

fn prompt(label: &str) -> Result<String> {
    if !atty::is(atty::Stream::Stdin) {
        anyhow::bail!(
            "No {} given and stdin is not a terminal. Pass --{}.",
            label.to_lowercase(),
            label.to_lowercase()
        );
    }
    Ok(Input::new().with_prompt(label).interact_text()?)
}
