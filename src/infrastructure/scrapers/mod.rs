use crate::domain::Record;
use crate::error::{ChartError, Result};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

pub(crate) mod ranked_list;

pub trait ChartScraper {
    fn extract_records(&self, document: &Html, selectors: &Selectors) -> Vec<Record>;
}

pub struct Selectors {
    /// One match per chart row.
    pub item: Selector,
    pub title: Selector,
    /// Container of the row's detail spans; only the first match is used.
    pub details: Selector,
    pub field: Selector,
}

impl Selectors {
    pub fn new(item: &str, title: &str, details: &str, field: &str) -> Result<Self> {
        Ok(Self {
            item: parse_selector(item)?,
            title: parse_selector(title)?,
            details: parse_selector(details)?,
            field: parse_selector(field)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ChartError::Selector(format!("{selector}: {e}")))
}

/// Which detail span holds which field. Chart markup carries no labels on
/// these spans, so their meaning comes from position alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLayout {
    pub year: usize,
    pub runtime: usize,
    pub rating: usize,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            year: 0,
            runtime: 1,
            rating: 2,
        }
    }
}

impl FieldLayout {
    /// Number of detail spans a row needs before any of them is read. An index
    /// of `usize::MAX` can never be satisfied, so the count saturates.
    pub fn required_fields(&self) -> usize {
        self.year.max(self.runtime).max(self.rating).saturating_add(1)
    }
}
