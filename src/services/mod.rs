pub(crate) mod chart_service;
pub(crate) mod report;
pub(crate) mod scraping;

pub use chart_service::ChartService;
pub use report::OutputFormat;
pub use scraping::{PageSource, ScrapingService};
