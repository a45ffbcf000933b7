//! Command dispatch.

pub mod chat;
pub mod health;
pub mod search;
pub mod templates;

use anyhow::Result;
use casetrace_client::{ClientConfig, ResearchClient};

use crate::cli::{Cli, Command};

fn build_client(api_url: Option<String>) -> Result<ResearchClient> {
    let mut config = ClientConfig::from_env();
    if let Some(url) = api_url {
        config = config.with_base_url(url);
    }
    Ok(ResearchClient::new(config)?)
}

pub async fn handle(cli: Cli) -> Result<()> {
    let client = build_client(cli.api_url)?;
    match cli.command {
        Command::Chat { message } => chat::handle(&client, &message).await,
        Command::Search(args) => search::handle(&client, args).await,
        Command::Health => health::handle(&client).await,
        Command::Templates => templates::handle(&client).await,
    }
}
