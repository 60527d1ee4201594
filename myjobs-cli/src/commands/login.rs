//! Login command - dummy authentication

use std::time::Duration;

use anyhow::Result;
use dialoguer::{Input, Password};
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;

use myjobs_core::config::{DEMO_EMAIL, DEMO_PASSWORD, EMAIL_PATTERN};
use myjobs_core::services::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

/// Spinner shown while the simulated backend round trip runs
pub fn auth_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("static template is valid"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

pub async fn run(
    email: Option<String>,
    password: Option<String>,
    demo: bool,
    json: bool,
) -> Result<()> {
    let logger = get_logger();
    let mut ctx = get_context()?;

    let (email, password) = if demo {
        (DEMO_EMAIL.to_string(), DEMO_PASSWORD.to_string())
    } else {
        let email = match email {
            Some(e) => e,
            None => prompt_email()?,
        };
        let password = match password {
            Some(p) => p,
            None => prompt_password()?,
        };
        (email, password)
    };

    // Form-level syntax check, same as the login page
    let email_re = Regex::new(EMAIL_PATTERN).expect("static pattern is valid");
    if !email_re.is_match(&email) {
        log_event(&logger, LogEvent::new("login_invalid_email").with_command("login"));
        anyhow::bail!("'{}' is not a valid email address", email);
    }

    let spinner = if json { None } else { Some(auth_spinner("Signing in...")) };
    let ok = ctx.auth_service.login(&email, &password).await?;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    if json {
        let result = if ok {
            myjobs_core::OperationResult::ok(ctx.auth_service.user().cloned())
        } else {
            myjobs_core::OperationResult::fail("login failed")
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if ok {
        log_event(&logger, LogEvent::new("login_success").with_command("login"));
        let user = ctx.auth_service.user().expect("login succeeded");
        output::success(&format!("Welcome back, {}!", user.name));
        output::info("Run 'mj status' to see your dashboard.");
        Ok(())
    } else {
        log_event(&logger, LogEvent::new("login_failed").with_command("login"));
        // Single generic failure message, no detail by design of the demo
        anyhow::bail!("Login failed. Check your email and password (min 6 characters).")
    }
}

fn prompt_email() -> Result<String> {
    if !atty::is(atty::Stream::Stdin) {
        anyhow::bail!("No email given and stdin is not a terminal. Pass EMAIL as an argument.");
    }
    Ok(Input::new().with_prompt("Email").interact_text()?)
}

fn prompt_password() -> Result<String> {
    if !atty::is(atty::Stream::Stdin) {
        anyhow::bail!("No password given and stdin is not a terminal. Pass --password.");
    }
    Ok(Password::new().with_prompt("Password").interact()?)
}
