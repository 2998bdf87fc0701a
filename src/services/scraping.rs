use crate::config::ChartConfig;
use crate::domain::Record;
use crate::error::{ChartError, Result};
use crate::infrastructure::{ChartScraper, RankedListScraper, Selectors};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use scraper::Html;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Where the chart page comes from.
#[derive(Debug, Clone)]
pub enum PageSource {
    Url(String),
    File(PathBuf),
}

pub struct ScrapingService {
    client: Client,
}

impl ScrapingService {
    pub fn new(client: Client) -> Self {
        info!("Created new Scraping service");
        Self { client }
    }

    pub async fn scrape(&self, source: &PageSource, chart: &ChartConfig) -> Result<Vec<Record>> {
        let html = self.load_page(source).await?;
        extract_chart(&html, chart)
    }

    async fn load_page(&self, source: &PageSource) -> Result<String> {
        match source {
            PageSource::Url(url) => self.fetch_page(url).await,
            PageSource::File(path) => {
                info!("Reading chart from {}", path.display());
                Ok(tokio::fs::read_to_string(path).await?)
            }
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        info!("Scraping {}", url);

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .map_err(|e| ChartError::Other(e.to_string()))?,
        );
        pb.set_message(format!("Fetching {url}"));
        pb.enable_steady_tick(Duration::from_millis(120));

        let page = self.download(url).await;
        pb.finish_and_clear();
        page
    }

    async fn download(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Parses a chart page and extracts its records. Selector errors are the only
/// failure; a page that does not match the layout gives an empty chart.
pub fn extract_chart(html: &str, chart: &ChartConfig) -> Result<Vec<Record>> {
    let selectors = Selectors::new(
        &chart.item_selector,
        &chart.title_selector,
        &chart.details_selector,
        &chart.field_selector,
    )?;
    let document = Html::parse_document(html);

    let scraper = RankedListScraper::new(chart.field_layout, chart.rating_mode, chart.limit);
    let records = scraper.extract_records(&document, &selectors);

    let matched = document.select(&selectors.item).count();
    if matched == 0 {
        warn!("No chart rows matched '{}'", chart.item_selector);
    }
    info!("Matched {} chart rows, kept {}", matched, records.len());

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::RatingMode;
    use std::fs;
    use tempfile::tempdir;

    const IMDB_LIKE: &str = r#"
        <html><body>
          <ul class="ipc-metadata-list">
            <li class="ipc-metadata-list-summary-item">
              <div class="ipc-metadata-list-summary-item__c">
                <div class="ipc-metadata-list-summary-item__tc">
                  <div class="ipc-title">
                    <a href="/title/tt0111161/"><h3 class="ipc-title__text">1. The Shawshank Redemption</h3></a>
                  </div>
                  <div class="cli-title-metadata">
                    <span class="cli-title-metadata-item">1994</span>
                    <span class="cli-title-metadata-item">2h 22m</span>
                    <span class="cli-title-metadata-item">R</span>
                  </div>
                </div>
              </div>
            </li>
            <li class="ipc-metadata-list-summary-item">
              <div class="ipc-metadata-list-summary-item__c">
                <div class="ipc-metadata-list-summary-item__tc">
                  <div class="cli-title-metadata">
                    <span class="cli-title-metadata-item">1972</span>
                    <span class="cli-title-metadata-item">2h 55m</span>
                    <span class="cli-title-metadata-item">R</span>
                  </div>
                  <h3 class="ipc-title__text">2. The Godfather</h3>
                </div>
              </div>
            </li>
          </ul>
        </body></html>
    "#;

    #[test]
    fn test_extract_chart_default_layout() {
        let records = extract_chart(IMDB_LIKE, &ChartConfig::default()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "The Shawshank Redemption");
        // The first div under the row wraps the title, not the detail spans.
        assert_eq!(records[0].year, None);
        assert_eq!(records[1].title, "The Godfather");
        assert_eq!(records[1].year.as_deref(), Some("1972"));
        assert_eq!(records[1].runtime.as_deref(), Some("2h 55m"));
        assert_eq!(records[1].rating.as_deref(), Some("R"));
    }

    #[test]
    fn test_extract_chart_with_details_selector() {
        let chart = ChartConfig {
            details_selector: "div.cli-title-metadata".to_string(),
            rating_mode: RatingMode::Verbatim,
            ..ChartConfig::default()
        };

        let records = extract_chart(IMDB_LIKE, &chart).unwrap();

        assert_eq!(records[0].year.as_deref(), Some("1994"));
        assert_eq!(records[0].runtime.as_deref(), Some("2h 22m"));
        assert_eq!(records[0].rating.as_deref(), Some("R"));
    }

    #[test]
    fn test_extract_chart_rejects_bad_selector() {
        let chart = ChartConfig {
            item_selector: "div[".to_string(),
            ..ChartConfig::default()
        };

        let err = extract_chart(IMDB_LIKE, &chart).unwrap_err();

        assert!(matches!(err, ChartError::Selector(_)));
    }

    #[test]
    fn test_extract_chart_unrelated_page() {
        let records = extract_chart("<p>maintenance</p>", &ChartConfig::default()).unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_scrape_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chart.html");
        fs::write(&path, IMDB_LIKE).unwrap();
        let service = ScrapingService::new(Client::new());

        let records = service
            .scrape(&PageSource::File(path), &ChartConfig::default())
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_scrape_missing_file() {
        let dir = tempdir().unwrap();
        let service = ScrapingService::new(Client::new());

        let err = service
            .scrape(
                &PageSource::File(dir.path().join("missing.html")),
                &ChartConfig::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ChartError::Io(_)));
    }
}
