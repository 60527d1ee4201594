//! Swipe command - company matching deck

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use myjobs_core::services::{DeckOutcome, LogEvent, SwipeDirection};
use myjobs_core::Company;

use super::{get_context, get_logger, log_event, require_login};
use crate::output;

#[derive(Subcommand)]
pub enum SwipeCommands {
    /// Show the current company card (default)
    Show,
    /// Like the current company (or a specific one with --id)
    Like {
        #[arg(long)]
        id: Option<i64>,
    },
    /// Pass on the current company (or a specific one with --id)
    Pass {
        #[arg(long)]
        id: Option<i64>,
    },
    /// Clear all decisions and start over
    Reset,
}

pub fn run(command: Option<SwipeCommands>) -> Result<()> {
    let logger = get_logger();
    let mut ctx = get_context()?;
    require_login(&ctx)?;

    match command.unwrap_or(SwipeCommands::Show) {
        SwipeCommands::Show => {
            print_badges(&ctx);
            match ctx.deck_service.current(ctx.matching_service.decisions()) {
                Some(company) => print_card(&company),
                None => print_exhausted(),
            }
            Ok(())
        }
        SwipeCommands::Like { id } => decide(&mut ctx, &logger, SwipeDirection::Like, id),
        SwipeCommands::Pass { id } => decide(&mut ctx, &logger, SwipeDirection::Pass, id),
        SwipeCommands::Reset => {
            ctx.matching_service.reset()?;
            log_event(&logger, LogEvent::new("matching_reset").with_command("swipe"));
            output::success("Matching reset. The full deck is available again.");
            Ok(())
        }
    }
}

fn decide(
    ctx: &mut myjobs_core::MyJobsContext,
    logger: &Option<myjobs_core::services::LoggingService>,
    direction: SwipeDirection,
    id: Option<i64>,
) -> Result<()> {
    let outcome = match id {
        Some(company_id) => {
            ctx.deck_service
                .decide_on(&mut ctx.matching_service, company_id, direction)?
        }
        None => ctx.deck_service.decide(&mut ctx.matching_service, direction)?,
    };

    match outcome {
        DeckOutcome::Decided {
            company,
            direction,
            matched,
            transition,
        } => {
            // The decision is already persisted; the pause is purely the
            // swipe animation.
            std::thread::sleep(transition);
            match direction {
                SwipeDirection::Like => {
                    log_event(logger, LogEvent::new("company_liked").with_command("swipe"));
                    output::success(&format!("Liked {}", company.name));
                    if matched {
                        println!("{}", "It's a match! 🎉".magenta().bold());
                    }
                }
                SwipeDirection::Pass => {
                    log_event(logger, LogEvent::new("company_passed").with_command("swipe"));
                    output::info(&format!("Passed on {}", company.name));
                }
            }

            match ctx.deck_service.current(ctx.matching_service.decisions()) {
                Some(next) => {
                    println!();
                    print_card(&next);
                }
                None => print_exhausted(),
            }
            Ok(())
        }
        DeckOutcome::Exhausted => {
            print_exhausted();
            Ok(())
        }
    }
}

fn print_badges(ctx: &myjobs_core::MyJobsContext) {
    let counts = ctx.deck_service.counts(ctx.matching_service.decisions());
    println!(
        "{}  {}  {}",
        format!("{} likes", counts.likes).green(),
        format!("{} passed", counts.passed).yellow(),
        format!("{} remaining", counts.remaining).cyan()
    );
    println!();
}

fn print_card(company: &Company) {
    println!("{}", company.name.bold());
    println!("{}  ·  {}  ·  {}", company.industry, company.size, company.location);
    println!();
    println!("{}", company.description);
    println!();
    println!("Culture:  {}", company.culture.join(", "));
    println!("Benefits: {}", company.benefits.join(", "));
    println!();
    println!(
        "{}",
        "Swipe with 'mj swipe like' or 'mj swipe pass'".dimmed()
    );
}

fn print_exhausted() {
    output::warning("No more companies to swipe through.");
    println!("Run 'mj swipe reset' to start over.");
}
