// contentful-query - Run a GraphQL query against the Contentful content API
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use contentful_client::cli::Args;
use contentful_client::config::AppConfig;
use contentful_client::utils::logging;
use contentful_client::ContentfulClient;
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    logging::init(&config.logging)?;
    info!("Starting contentful-query v{}", env!("CARGO_PKG_VERSION"));

    // Build client; CLI flags take priority over env and config file
    let mut client = ContentfulClient::new(&config.client)?;
    if let Some(url) = &args.url {
        client = client.with_url(url);
    }
    if let Some(token) = &args.token {
        client = client.with_token(token);
    }

    let request = args.request()?;
    let response: Value = client.fetch(&request).await?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    Ok(())
}
