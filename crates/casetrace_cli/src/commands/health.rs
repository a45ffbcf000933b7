//! `casetrace health` — ping the backend.

use anyhow::Result;
use casetrace_client::{ResearchApi, ResearchClient};

use crate::output;

pub async fn handle(client: &ResearchClient) -> Result<()> {
    let health = client.health().await?;

    if output::is_json() {
        output::payload(&serde_json::to_value(&health)?);
        return Ok(());
    }

    if health.status == "healthy" {
        output::success(&format!("backend healthy as of {}", health.timestamp));
    } else {
        output::warning(&format!(
            "backend reports '{}' as of {}",
            health.status, health.timestamp
        ));
    }
    Ok(())
}
