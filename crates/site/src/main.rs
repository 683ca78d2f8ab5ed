//! dreamnest site renderer entry point.
//!
//! Loads configuration, probes the CMS, loads every page section, and
//! writes the rendered HTML document to stdout. Logging goes to stderr so
//! the rendered page stays clean.

use std::sync::Arc;

use anyhow::Result;
use dreamnest_client::{CmsClient, CmsConfig};
use dreamnest_core::{AppConfig, ContentCache};
use tracing_subscriber::EnvFilter;

mod page;
mod sections;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;
    tracing::info!(base_url = %config.base_url, "rendering dreamnest site");

    let cache = Arc::new(ContentCache::new(config.cache_ttl()));
    let client = CmsClient::new(CmsConfig::from(&config), cache)?;

    let report = client.check_connection().await;
    tracing::info!(status = ?report.status, "{}", report.message);

    let page = page::Page::load(&client).await;
    println!("{}", page.render());

    Ok(())
}
