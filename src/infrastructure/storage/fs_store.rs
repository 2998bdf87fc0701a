use crate::domain::storage::Storage;
use crate::domain::Record;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct FileSystemStore {
    output_path: PathBuf,
}

impl FileSystemStore {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        Ok(())
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        // Serialize first so a failure leaves any previous file untouched.
        let content = serde_json::to_string_pretty(data)?;
        self.ensure_parent(&self.output_path)?;
        fs::write(&self.output_path, content)?;
        Ok(())
    }
}

impl Storage for FileSystemStore {
    fn save_records(&self, records: &[Record]) -> Result<PathBuf> {
        self.write_json_file(records)?;
        Ok(self.output_path.clone())
    }
}
