//! Config command - view and edit app settings

use anyhow::Result;
use clap::Subcommand;

use myjobs_core::config::Config;

use super::get_app_dir;
use crate::output;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current settings (default)
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change one or more settings
    Set {
        /// Minimum password length for login and signup
        #[arg(long)]
        min_password_length: Option<usize>,
        /// Simulated auth latency in milliseconds
        #[arg(long)]
        auth_latency_ms: Option<u64>,
        /// Simulated recommendation latency in milliseconds
        #[arg(long)]
        recommendation_latency_ms: Option<u64>,
        /// Swipe transition duration in milliseconds
        #[arg(long)]
        swipe_transition_ms: Option<u64>,
    },
}

pub fn run(command: Option<ConfigCommands>) -> Result<()> {
    let app_dir = get_app_dir();
    std::fs::create_dir_all(&app_dir)?;
    let mut config = Config::load(&app_dir)?;

    match command.unwrap_or(ConfigCommands::Show { json: false }) {
        ConfigCommands::Show { json } => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "minPasswordLength": config.min_password_length,
                        "authLatencyMs": config.auth_latency_ms,
                        "recommendationLatencyMs": config.recommendation_latency_ms,
                        "swipeTransitionMs": config.swipe_transition_ms,
                    }))?
                );
            } else {
                print_config(&config);
            }
            Ok(())
        }
        ConfigCommands::Set {
            min_password_length,
            auth_latency_ms,
            recommendation_latency_ms,
            swipe_transition_ms,
        } => {
            if min_password_length.is_none()
                && auth_latency_ms.is_none()
                && recommendation_latency_ms.is_none()
                && swipe_transition_ms.is_none()
            {
                anyhow::bail!("Nothing to change. Pass at least one --<setting> flag.");
            }

            if let Some(len) = min_password_length {
                config.min_password_length = len;
            }
            if let Some(ms) = auth_latency_ms {
                config.auth_latency_ms = ms;
            }
            if let Some(ms) = recommendation_latency_ms {
                config.recommendation_latency_ms = ms;
            }
            if let Some(ms) = swipe_transition_ms {
                config.swipe_transition_ms = ms;
            }

            config.save(&app_dir)?;
            output::success("Settings saved");
            print_config(&config);
            Ok(())
        }
    }
}

fn print_config(config: &Config) {
    let mut table = output::create_table();
    table.add_row(vec![
        "Min password length",
        &config.min_password_length.to_string(),
    ]);
    table.add_row(vec!["Auth latency (ms)", &config.auth_latency_ms.to_string()]);
    table.add_row(vec![
        "Recommendation latency (ms)",
        &config.recommendation_latency_ms.to_string(),
    ]);
    table.add_row(vec![
        "Swipe transition (ms)",
        &config.swipe_transition_ms.to_string(),
    ]);
    println!("{}", table);
}
