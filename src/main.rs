use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::products::PRODUCTS;
use crate::process_products::{print_summary, process_products};
use crate::utilities::http_client::build_client;

mod config;
mod error;
mod process_products;
mod scraping;
mod utilities;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shirt_scrape=info")),
        )
        .init();

    // Load configuration settings
    let config = crate::config::config::load_config().context("Failed to load configuration")?;

    let client = build_client(&config.http).context("Failed to build HTTP client")?;

    let report = process_products(&client, &config, PRODUCTS).await?;
    print_summary(&report);

    Ok(())
}
