// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::language::DEFAULT_GENRE;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Genre suggested when no language can be inferred for a folder.
    pub default_genre: String,
    /// File extensions treated as audio during folder discovery.
    pub audio_extensions: Vec<String>,
    /// Always write _tags_report.csv next to the JSON output.
    pub write_report_csv: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_genre: DEFAULT_GENRE.to_string(),
            audio_extensions: ["mp3", "m4a", "m4b", "flac", "ogg", "opus", "wav", "aac"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            write_report_csv: false,
        }
    }
}

impl Config {
    /// Load the user config, falling back to defaults when none exists.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let config = serde_json::from_str(&contents)
                .with_context(|| format!("Malformed config at {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not find a config directory")?;
        Ok(base.join("tag-advisor").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_genre, "audiokniha");
        assert!(config.audio_extensions.iter().any(|e| e == "m4b"));
        assert!(!config.write_report_csv);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"default_genre": "audiobook"}"#).unwrap();
        assert_eq!(config.default_genre, "audiobook");
        assert!(!config.audio_extensions.is_empty());
    }
}
