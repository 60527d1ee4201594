//! Theme command - light/dark preference

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use myjobs_core::Theme;

use super::get_context;
use crate::output;

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the current theme (default)
    Status,
    /// Flip between light and dark
    Toggle,
    /// Switch to light
    Light,
    /// Switch to dark
    Dark,
}

pub fn run(command: Option<ThemeCommands>) -> Result<()> {
    let mut ctx = get_context()?;

    match command.unwrap_or(ThemeCommands::Status) {
        ThemeCommands::Status => {
            print_theme(ctx.theme_service.current());
            Ok(())
        }
        ThemeCommands::Toggle => {
            let theme = ctx.theme_service.toggle()?;
            output::success(&format!("Theme set to {}", theme.as_str()));
            print_theme(theme);
            Ok(())
        }
        ThemeCommands::Light => set(&mut ctx, Theme::Light),
        ThemeCommands::Dark => set(&mut ctx, Theme::Dark),
    }
}

fn set(ctx: &mut myjobs_core::MyJobsContext, theme: Theme) -> Result<()> {
    ctx.theme_service.set(theme)?;
    output::success(&format!("Theme set to {}", theme.as_str()));
    print_theme(theme);
    Ok(())
}

fn print_theme(theme: Theme) {
    // The presentation flag is derived from the value on display, never
    // stored alongside it.
    match theme.dom_class() {
        Some(class) => println!("Current theme: {} (class '{}')", theme.as_str().bold(), class),
        None => println!("Current theme: {}", theme.as_str().bold()),
    }
}
