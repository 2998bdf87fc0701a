mod scrapers;
mod storage;

pub use scrapers::{ranked_list::RankedListScraper, ChartScraper, FieldLayout, Selectors};
pub use storage::fs_store::FileSystemStore;
