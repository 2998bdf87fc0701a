use super::Record;
use crate::error::Result;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    /// Persists the chart and returns where it was written.
    fn save_records(&self, records: &[Record]) -> Result<PathBuf>;
}
