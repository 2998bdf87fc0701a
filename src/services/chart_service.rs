use crate::config::{ChartConfig, Config};
use crate::domain::storage::Storage;
use crate::domain::Record;
use crate::error::Result;
use crate::infrastructure::FileSystemStore;
use crate::services::report::render;
use crate::services::{OutputFormat, PageSource, ScrapingService};
use std::sync::Arc;
use tracing::{error, info};

pub struct ChartService {
    chart: ChartConfig,
    source: PageSource,
    format: OutputFormat,
    store: Option<Arc<dyn Storage>>,
    scraping: ScrapingService,
}

impl ChartService {
    pub fn new(
        chart: ChartConfig,
        source: PageSource,
        format: OutputFormat,
        store: Option<Arc<dyn Storage>>,
        scraping: ScrapingService,
    ) -> Self {
        Self {
            chart,
            source,
            format,
            store,
            scraping,
        }
    }

    pub fn from_config(config: Config) -> Self {
        let source = match &config.args.html_file {
            Some(path) => PageSource::File(path.clone()),
            None => PageSource::Url(config.chart.url.clone()),
        };

        let store: Option<Arc<dyn Storage>> = if config.args.no_save {
            None
        } else {
            Some(Arc::new(FileSystemStore::new(config.chart.output_path.clone())))
        };

        Self::new(
            config.chart,
            source,
            config.args.format,
            store,
            ScrapingService::new(config.http_client),
        )
    }

    /// Scrapes the chart once and publishes it. Only a failure to get or parse
    /// the page aborts the run; output failures are logged.
    pub async fn run(&self) -> Result<Vec<Record>> {
        info!("Starting chart scrape");

        let records = self.scraping.scrape(&self.source, &self.chart).await?;
        self.publish(&records);

        Ok(records)
    }

    fn publish(&self, records: &[Record]) {
        match render(records, self.format) {
            Ok(text) => println!("{text}"),
            Err(e) => error!("Error serializing chart: {}", e),
        }

        let Some(store) = &self.store else {
            return;
        };

        match store.save_records(records) {
            Ok(path) => info!("Saved {} records to {}", records.len(), path.display()),
            Err(e) => error!("Error writing chart to file: {}", e),
        }
    }
}
