//! Jobs command - browse job postings

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

pub fn run(id: Option<i64>, json: bool) -> Result<()> {
    let ctx = get_context()?;

    match id {
        Some(job_id) => {
            let job = ctx
                .catalog
                .job_by_id(job_id)
                .ok_or_else(|| anyhow::anyhow!("No job with id {}", job_id))?;

            if json {
                println!("{}", serde_json::to_string_pretty(job)?);
                return Ok(());
            }

            println!("{}", job.title.bold());
            println!("{}  ·  {}  ·  {}", job.company, job.location, job.work_mode);
            println!("{}  ·  {}  ·  {}", job.salary, job.job_type, job.level);
            println!();
            println!("{}", job.description);
            println!();
            println!("Requirements: {}", job.requirements.join(", "));
            println!("Nice to have: {}", job.nice_to_have.join(", "));
            println!();
            println!(
                "{}",
                format!("Posted {} · {} applicants", job.posted, job.applicants).dimmed()
            );
            Ok(())
        }
        None => {
            if json {
                println!("{}", serde_json::to_string_pretty(ctx.catalog.jobs())?);
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["ID", "Title", "Company", "Location", "Mode", "Salary"]);
            for job in ctx.catalog.jobs() {
                table.add_row(vec![
                    job.id.to_string(),
                    job.title.clone(),
                    job.company.clone(),
                    job.location.clone(),
                    job.work_mode.clone(),
                    job.salary.clone(),
                ]);
            }
            println!("{}", table);
            println!();
            println!("{}", "See details with 'mj jobs <id>'".dimmed());
            Ok(())
        }
    }
}
