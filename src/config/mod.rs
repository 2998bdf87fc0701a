use crate::config::cli::Args;
use crate::error::{ChartError, Result};
use crate::infrastructure::FieldLayout;
use crate::normalize::RatingMode;
use clap::Parser;
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, Level};

pub(crate) mod cli;

/// Layout of the chart page and what to keep from it. Every field falls back
/// to the IMDb Top 250 layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub url: String,
    pub item_selector: String,
    pub title_selector: String,
    pub details_selector: String,
    pub field_selector: String,
    pub field_layout: FieldLayout,
    pub rating_mode: RatingMode,
    pub limit: usize,
    pub output_path: PathBuf,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            url: "https://www.imdb.com/chart/top/".to_string(),
            item_selector: "div.ipc-metadata-list-summary-item__tc".to_string(),
            title_selector: "h3.ipc-title__text".to_string(),
            details_selector: "div".to_string(),
            field_selector: "span".to_string(),
            field_layout: FieldLayout::default(),
            rating_mode: RatingMode::default(),
            limit: 10,
            output_path: PathBuf::from("output.json"),
        }
    }
}

impl ChartConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config at {}, using default chart layout", path.display());
            return Ok(Self::default());
        }

        let config = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        info!("Loaded chart config from {}", path.display());
        Ok(config)
    }

    /// Applies command line overrides on top of the file values.
    pub fn merge_args(mut self, args: &Args) -> Self {
        if let Some(url) = &args.url {
            self.url = url.clone();
        }
        if let Some(mode) = args.rating_mode {
            self.rating_mode = mode;
        }
        if let Some(limit) = args.limit {
            self.limit = limit;
        }
        if let Some(output) = &args.output {
            self.output_path = output.clone();
        }
        self
    }
}

pub struct Config {
    pub args: Args,
    pub chart: ChartConfig,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let chart = ChartConfig::load(&args.config_file)?.merge_args(&args);

        let http_client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self {
            args,
            chart,
            http_client,
        })
    }

    pub fn log_level(&self) -> Result<Level> {
        parse_log_level(&self.args.log_level)
    }
}

pub fn parse_log_level(level: &str) -> Result<Level> {
    level
        .parse::<Level>()
        .map_err(|_| ChartError::Config(format!("unknown log level '{level}'")))
}
