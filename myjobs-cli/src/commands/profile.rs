//! Profile command - show and edit the current user

use anyhow::Result;
use clap::Subcommand;

use myjobs_core::{User, UserPatch};

use super::{get_context, require_login};
use crate::output;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the profile (default)
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update profile fields
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        experience: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        availability: Option<String>,
        #[arg(long)]
        salary: Option<String>,
        #[arg(long)]
        work_mode: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
    /// Manage skills
    Skill {
        #[command(subcommand)]
        command: SkillCommands,
    },
}

#[derive(Subcommand)]
pub enum SkillCommands {
    /// Add a skill
    Add { skill: String },
    /// Remove a skill
    Remove { skill: String },
}

pub fn run(command: Option<ProfileCommands>, json: bool) -> Result<()> {
    let mut ctx = get_context()?;
    require_login(&ctx)?;

    match command {
        None | Some(ProfileCommands::Show { json: false }) => {
            if json {
                print_json(&ctx)?;
            } else {
                print_profile(ctx.auth_service.user().expect("checked above"));
            }
            Ok(())
        }
        Some(ProfileCommands::Show { json: true }) => print_json(&ctx),
        Some(ProfileCommands::Edit {
            name,
            role,
            experience,
            location,
            availability,
            salary,
            work_mode,
            bio,
        }) => {
            let patch = UserPatch {
                name,
                role,
                experience,
                location,
                availability,
                salary_expectation: salary,
                preferred_work_mode: work_mode,
                bio,
                ..Default::default()
            };
            if patch.is_empty() {
                output::warning("Nothing to update. Pass at least one --field.");
                return Ok(());
            }
            ctx.auth_service.update_profile(patch)?;
            output::success("Profile updated.");
            Ok(())
        }
        Some(ProfileCommands::Skill { command }) => {
            let user = ctx.auth_service.user().expect("checked above");
            let mut skills = user.skills.clone();
            match command {
                SkillCommands::Add { skill } => {
                    let skill = skill.trim().to_string();
                    if skill.is_empty() || skills.contains(&skill) {
                        output::warning("Skill is empty or already listed.");
                        return Ok(());
                    }
                    skills.push(skill);
                }
                SkillCommands::Remove { skill } => {
                    let before = skills.len();
                    skills.retain(|s| s != &skill);
                    if skills.len() == before {
                        output::warning(&format!("Skill '{}' not found.", skill));
                        return Ok(());
                    }
                }
            }
            ctx.auth_service.update_profile(UserPatch {
                skills: Some(skills),
                ..Default::default()
            })?;
            output::success("Skills updated.");
            Ok(())
        }
    }
}

fn print_json(ctx: &myjobs_core::MyJobsContext) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(ctx.auth_service.user().expect("checked above"))?
    );
    Ok(())
}

fn print_profile(user: &User) {
    let mut table = output::create_table();
    table.add_row(vec!["Name", &user.name]);
    table.add_row(vec!["Email", &user.email]);
    table.add_row(vec!["Role", &user.role]);
    table.add_row(vec!["Skills", &user.skills.join(", ")]);
    if let Some(experience) = &user.experience {
        table.add_row(vec!["Experience", experience]);
    }
    if let Some(location) = &user.location {
        table.add_row(vec!["Location", location]);
    }
    if let Some(availability) = &user.availability {
        table.add_row(vec!["Availability", availability]);
    }
    if let Some(salary) = &user.salary_expectation {
        table.add_row(vec!["Salary expectation", salary]);
    }
    if let Some(mode) = &user.preferred_work_mode {
        table.add_row(vec!["Preferred work mode", mode]);
    }
    if let Some(bio) = &user.bio {
        table.add_row(vec!["Bio", bio]);
    }
    println!("{}", table);
}
