//! Logs command - show recent app events

use anyhow::Result;
use chrono::{DateTime, Utc};

use super::get_logger;
use crate::output;

pub fn run(limit: usize) -> Result<()> {
    let Some(logger) = get_logger() else {
        anyhow::bail!("Could not open the event log");
    };

    let entries = logger.recent(limit)?;
    if entries.is_empty() {
        output::info("No events recorded yet.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Time", "Event", "Command", "Error"]);
    for entry in entries {
        let time = DateTime::<Utc>::from_timestamp_millis(entry.timestamp_ms)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| entry.timestamp_ms.to_string());
        table.add_row(vec![
            time,
            entry.event.event.clone(),
            entry.event.command.clone().unwrap_or_default(),
            entry.event.error_message.clone().unwrap_or_default(),
        ]);
    }
    println!("{}", table);
    Ok(())
}
