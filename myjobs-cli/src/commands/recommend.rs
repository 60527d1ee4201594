//! Recommend command - "AI" job recommendations

use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use myjobs_core::services::LogEvent;

use super::{get_context, get_logger, log_event, require_login};
use crate::output;

pub async fn run(json: bool) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;
    require_login(&ctx)?;

    let spinner = if json {
        None
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}").expect("static template is valid"),
        );
        spinner.set_message("Analyzing your profile...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        Some(spinner)
    };

    let recommendations = ctx.recommendation_service.recommendations().await?;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    log_event(&logger, LogEvent::new("recommendations_shown").with_command("recommend"));

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    let user = ctx.auth_service.user().expect("checked above");
    println!("{}", "AI Job Recommendations".bold());
    if !user.skills.is_empty() {
        println!("Based on your skills: {}", user.skills.join(", "));
    }
    println!();

    if recommendations.is_empty() {
        output::warning("No recommendations right now. Complete your profile and try again.");
        return Ok(());
    }

    for rec in &recommendations {
        println!(
            "{}  {}",
            format!("{}%", rec.match_score).green().bold(),
            rec.job.title.bold()
        );
        println!("     {}  ·  {}  ·  {}", rec.job.company, rec.job.location, rec.job.salary);
        println!("     {}", rec.reason);
        println!("     {}", rec.highlights.join(" · ").dimmed());
        println!();
    }
    println!("{}", "See a job with 'mj jobs <id>'".dimmed());
    Ok(())
}
