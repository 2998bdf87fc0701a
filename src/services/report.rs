use crate::domain::Record;
use crate::error::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON, same as the output file
    #[default]
    Json,
    /// One line per record
    Lines,
}

pub fn render(records: &[Record], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Lines => Ok(records
            .iter()
            .enumerate()
            .map(|(i, record)| format_line(i + 1, record))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn format_line(rank: usize, record: &Record) -> String {
    let field = |value: &Option<String>| match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    };

    format!(
        "{rank}. {} | {} | {} | {}",
        record.title,
        field(&record.year),
        field(&record.runtime),
        field(&record.rating)
    )
}
