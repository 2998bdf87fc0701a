use super::{ChartScraper, FieldLayout, Selectors};
use crate::domain::Record;
use crate::normalize::{extract_rating, extract_year, normalize_title, RatingMode};
use scraper::{ElementRef, Html};
use std::ops::ControlFlow;
use tracing::debug;

/// Scraper for "top N" lists where every row repeats the same markup: a
/// heading with the ranked title, followed by a block of unlabelled detail
/// spans (year, runtime, rating).
pub struct RankedListScraper {
    layout: FieldLayout,
    rating_mode: RatingMode,
    limit: usize,
}

/// Records taken so far in one pass over the page.
struct Harvest {
    records: Vec<Record>,
    limit: usize,
}

impl Harvest {
    fn new(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit,
        }
    }

    fn is_full(&self) -> bool {
        self.records.len() >= self.limit
    }

    fn push(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }
}

impl RankedListScraper {
    pub fn new(layout: FieldLayout, rating_mode: RatingMode, limit: usize) -> Self {
        Self {
            layout,
            rating_mode,
            limit,
        }
    }

    fn extract_record(&self, row: ElementRef<'_>, selectors: &Selectors) -> Record {
        // A row without a heading still yields a record, with an empty title.
        let title = row
            .select(&selectors.title)
            .next()
            .map(|el| normalize_title(&element_text(el)))
            .unwrap_or_default();

        if title.is_empty() {
            debug!("Chart row without a title");
        }

        let record = Record::new(title);
        let fields = detail_fields(row, selectors);

        if fields.len() < self.layout.required_fields() {
            debug!(
                "Row '{}' has {} detail fields, need {}; leaving details empty",
                record.title,
                fields.len(),
                self.layout.required_fields()
            );
            return record;
        }

        record.with_details(
            extract_year(&fields[self.layout.year]),
            Some(fields[self.layout.runtime].trim().to_string()),
            extract_rating(&fields[self.layout.rating], self.rating_mode),
        )
    }
}

impl ChartScraper for RankedListScraper {
    fn extract_records(&self, document: &Html, selectors: &Selectors) -> Vec<Record> {
        let flow = document.select(&selectors.item).try_fold(
            Harvest::new(self.limit),
            |harvest, row| {
                if harvest.is_full() {
                    return ControlFlow::Break(harvest);
                }
                ControlFlow::Continue(harvest.push(self.extract_record(row, selectors)))
            },
        );

        let harvest = match flow {
            ControlFlow::Continue(harvest) | ControlFlow::Break(harvest) => harvest,
        };

        harvest.records
    }
}

/// Text of every field node inside the row's first details container.
fn detail_fields(row: ElementRef<'_>, selectors: &Selectors) -> Vec<String> {
    row.select(&selectors.details)
        .next()
        .map(|container| container.select(&selectors.field).map(element_text).collect())
        .unwrap_or_default()
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}
