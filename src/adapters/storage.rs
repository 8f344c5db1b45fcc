use crate::domain::ports::TextStore;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Text files resolved relative to a base directory (the repository root).
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl TextStore for LocalStorage {
    fn read_to_string(&self, path: &str) -> Result<String> {
        let full_path = self.base_path.join(path);
        let data = fs::read_to_string(full_path)?;
        Ok(data)
    }

    fn write(&self, path: &str, contents: &str) -> Result<()> {
        let full_path = self.base_path.join(path);
        fs::write(full_path, contents)?;
        Ok(())
    }
}
