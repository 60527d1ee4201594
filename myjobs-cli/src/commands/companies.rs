//! Companies command - list the employer catalog

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;

    if json {
        println!("{}", serde_json::to_string_pretty(ctx.catalog.companies())?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Name", "Industry", "Location", "Size"]);
    for company in ctx.catalog.companies() {
        table.add_row(vec![
            company.id.to_string(),
            company.name.clone(),
            company.industry.clone(),
            company.location.clone(),
            company.size.clone(),
        ]);
    }
    println!("{}", table);
    Ok(())
}
