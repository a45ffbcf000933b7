//! `casetrace chat` — one question in, structured blocks out.

use anyhow::Result;
use casetrace_client::{ResearchApi, ResearchClient};
use casetrace_core::structure;

use crate::output;

pub async fn handle(client: &ResearchClient, message: &str) -> Result<()> {
    let spinner = output::spinner("Analyzing your request...");
    let reply = client.send_message(message).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let reply = reply?;

    let blocks = structure(&reply.response);
    tracing::debug!(blocks = blocks.len(), "structured assistant reply");

    if output::is_json() {
        output::payload(&serde_json::json!({
            "blocks": blocks,
            "sources": reply.sources,
            "crime_data": reply.crime_data,
        }));
        return Ok(());
    }

    output::render_blocks(&blocks);
    if let Some(urls) = &reply.sources {
        output::sources(urls);
    }
    if let Some(cases) = &reply.crime_data {
        if !cases.is_empty() {
            println!();
            output::header("Matching cases");
            output::cases_table(cases);
        }
    }
    Ok(())
}
