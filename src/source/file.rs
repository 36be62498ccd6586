use crate::job::Job;
use crate::source::JobSource;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Snapshot file holding the same JSON array the live endpoint serves.
/// Used for offline work and demos.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl JobSource for FileSource {
    fn fetch(&self) -> Result<Vec<Job>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read snapshot: {:?}", self.path))?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("Snapshot {:?} is not a JSON job array", self.path))
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}
