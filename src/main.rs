use crate::config::Config;
use crate::error::Result;
use crate::services::ChartService;
use tracing::info;

mod config;
mod domain;
mod error;
mod infrastructure;
mod normalize;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .with_writer(std::io::stderr)
        .init();

    let service = ChartService::from_config(config);
    let records = service.run().await?;

    info!("Chart scrape completed: {} records", records.len());
    Ok(())
}
