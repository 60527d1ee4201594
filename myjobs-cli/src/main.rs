//! MyJobs CLI - talent matching demo in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{
    companies, config, jobs, login, logout, logs, profile, recommend, signup, status, swipe, theme,
};

/// MyJobs - find your next tech role
#[derive(Parser)]
#[command(name = "mj", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in (any email with a 6+ character password works - this is a demo)
    Login {
        /// Email address (prompted if omitted)
        email: Option<String>,
        /// Password (prompted if omitted)
        #[arg(short, long)]
        password: Option<String>,
        /// Use the built-in demo account
        #[arg(long)]
        demo: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a profile and log in
    Signup {
        /// Full name (prompted if omitted)
        #[arg(long)]
        name: Option<String>,
        /// Email address (prompted if omitted)
        #[arg(long)]
        email: Option<String>,
        /// Role title
        #[arg(long)]
        role: Option<String>,
        /// Comma-separated skills
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,
        /// Location
        #[arg(long)]
        location: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log out and clear the session
    Logout,

    /// Show or edit your profile
    Profile {
        #[command(subcommand)]
        command: Option<profile::ProfileCommands>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Swipe through companies
    Swipe {
        #[command(subcommand)]
        command: Option<swipe::SwipeCommands>,
    },

    /// Browse job postings
    Jobs {
        /// Show a single job by id
        id: Option<i64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List companies
    Companies {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// AI job recommendations based on your profile
    Recommend {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the light/dark theme preference
    Theme {
        #[command(subcommand)]
        command: Option<theme::ThemeCommands>,
    },

    /// Show or edit app settings
    Config {
        #[command(subcommand)]
        command: Option<config::ConfigCommands>,
    },

    /// Show the dashboard summary
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show recent app events
    Logs {
        /// Number of entries to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login {
            email,
            password,
            demo,
            json,
        } => login::run(email, password, demo, json).await,
        Commands::Signup {
            name,
            email,
            role,
            skills,
            location,
            json,
        } => signup::run(name, email, role, skills, location, json).await,
        Commands::Logout => logout::run(),
        Commands::Profile { command, json } => profile::run(command, json),
        Commands::Swipe { command } => swipe::run(command),
        Commands::Jobs { id, json } => jobs::run(id, json),
        Commands::Companies { json } => companies::run(json),
        Commands::Recommend { json } => recommend::run(json).await,
        Commands::Theme { command } => theme::run(command),
        Commands::Config { command } => config::run(command),
        Commands::Status { json } => status::run(json),
        Commands::Logs { limit } => logs::run(limit),
    }
}
