use crate::normalize::RatingMode;
use crate::services::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Path to chart configuration file
    #[arg(long, default_value = "chart_config.json")]
    pub config_file: PathBuf,

    /// Chart page to scrape, overrides the configured URL
    #[arg(long, env = "TOPCHART_URL")]
    pub url: Option<String>,

    /// Read the chart from a saved HTML file instead of fetching it
    #[arg(long, conflicts_with = "url")]
    pub html_file: Option<PathBuf>,

    /// How the rating field is interpreted
    #[arg(long, value_enum)]
    pub rating_mode: Option<RatingMode>,

    /// Maximum number of records to keep
    #[arg(long)]
    pub limit: Option<usize>,

    /// Where to write the JSON output
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print the chart without writing the output file
    #[arg(long)]
    pub no_save: bool,

    /// Console output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["topchart"]).unwrap();

        assert_eq!(args.config_file, PathBuf::from("chart_config.json"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.rating_mode, None);
        assert_eq!(args.timeout_secs, 30);
        assert!(!args.no_save);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "topchart",
            "--html-file",
            "page.html",
            "--rating-mode",
            "verbatim",
            "--limit",
            "5",
            "--format",
            "lines",
            "--no-save",
        ])
        .unwrap();

        assert_eq!(args.html_file, Some(PathBuf::from("page.html")));
        assert_eq!(args.rating_mode, Some(RatingMode::Verbatim));
        assert_eq!(args.limit, Some(5));
        assert_eq!(args.format, OutputFormat::Lines);
        assert!(args.no_save);
    }

    #[test]
    fn test_url_and_html_file_conflict() {
        let result = Args::try_parse_from([
            "topchart",
            "--url",
            "https://example.com/chart",
            "--html-file",
            "page.html",
        ]);

        assert!(result.is_err());
    }
}
