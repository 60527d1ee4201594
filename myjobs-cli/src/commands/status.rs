//! Status command - dashboard summary

use anyhow::Result;
use colored::Colorize;
use myjobs_core::config::{APP_NAME, APP_TAGLINE};

use super::get_context;
use crate::output;

fn banner() -> String {
    format!("{} - {}", APP_NAME, APP_TAGLINE)
}

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let status = ctx.status();

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", banner().bold());
    println!();

    match (&status.user_name, &status.user_role) {
        (Some(name), Some(role)) => println!("Logged in as {} ({})", name.bold(), role),
        _ => {
            output::warning("Not logged in. Run 'mj login' to get started.");
        }
    }
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Profile views", &status.stats.profile_views.to_string()]);
    table.add_row(vec!["Matches", &status.stats.matches.to_string()]);
    table.add_row(vec!["Applications", &status.stats.applications.to_string()]);
    table.add_row(vec!["Saved jobs", &status.stats.saved_jobs.to_string()]);
    table.add_row(vec!["Liked companies", &status.likes.to_string()]);
    table.add_row(vec!["Passed companies", &status.passed.to_string()]);
    table.add_row(vec!["Companies remaining", &status.companies_remaining.to_string()]);
    table.add_row(vec!["Open jobs", &status.total_jobs.to_string()]);
    println!("{}", table);
    println!();

    // Tiny bar chart of the week's profile views
    println!("{}", "Weekly activity".bold());
    let max = status
        .stats
        .weekly_activity
        .iter()
        .map(|d| d.views)
        .max()
        .unwrap_or(1)
        .max(1);
    for day in &status.stats.weekly_activity {
        let width = (day.views * 30 / max) as usize;
        println!("  {:<3} {} {}", day.day, "█".repeat(width).cyan(), day.views);
    }

    Ok(())
}
