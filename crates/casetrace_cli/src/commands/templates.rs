//! `casetrace templates` — list the backend's predefined search presets.

use anyhow::Result;
use casetrace_client::{ResearchApi, ResearchClient};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::output;

pub async fn handle(client: &ResearchClient) -> Result<()> {
    let templates = client.search_templates().await?;

    if output::is_json() {
        output::payload(&serde_json::to_value(&templates)?);
        return Ok(());
    }

    if templates.is_empty() {
        output::warning("backend exposes no search templates");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Template"),
            Cell::new("Period"),
            Cell::new("Focus"),
            Cell::new("Types"),
            Cell::new("Severity"),
            Cell::new("Max"),
        ]);

    for (name, request) in &templates {
        let types = request
            .crime_types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(name),
            Cell::new(&request.time_period),
            Cell::new(&request.geographic_focus),
            Cell::new(types),
            Cell::new(request.severity_level.as_str()),
            Cell::new(request.max_results),
        ]);
    }

    println!("{table}");
    Ok(())
}
