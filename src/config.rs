use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// One selectable atom or molecule endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Environment {
    pub name: String,
    pub atom_id: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Scheduled-jobs endpoint; the atom id is appended per request.
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub environments: Vec<Environment>,
}

impl Config {
    /// Load the config file, creating a starter file on first run so the
    /// user has something to fill in.
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self> {
        let path = custom_path.unwrap_or_else(Self::default_path);

        if !path.exists() {
            let config = Self::default();
            config.save(&path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Config {:?} is not valid JSON", path))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).with_context(|| format!("Failed to write config: {:?}", path))
    }

    pub fn is_usable(&self) -> bool {
        !self.base_url.trim().is_empty() && !self.environments.is_empty()
    }

    fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".atom-jobs.json")
    }
}
