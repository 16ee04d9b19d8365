use crate::error::{MasalError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const STORIES_DIRNAME: &str = "stories";

/// Configuration for masal, stored as `config.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MasalConfig {
    /// Where story records live. Defaults to `<data dir>/stories`.
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Show each story's summary under its title in the library listing
    #[serde(default = "default_show_summary")]
    pub show_summary: bool,
}

fn default_show_summary() -> bool {
    true
}

impl Default for MasalConfig {
    fn default() -> Self {
        Self {
            store_dir: None,
            show_summary: default_show_summary(),
        }
    }
}

impl MasalConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: MasalConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// The store directory, resolved against the data directory.
    pub fn resolved_store_dir(&self, data_dir: &Path) -> PathBuf {
        match &self.store_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => data_dir.join(dir),
            None => data_dir.join(STORIES_DIRNAME),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "store-dir" => Some(
                self.store_dir
                    .as_ref()
                    .map(|d| d.display().to_string())
                    .unwrap_or_default(),
            ),
            "show-summary" => Some(self.show_summary.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "store-dir" => {
                self.store_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            "show-summary" => {
                self.show_summary = value.parse().map_err(|_| {
                    MasalError::Config(format!("show-summary must be true or false, got {}", value))
                })?;
                Ok(())
            }
            _ => Err(MasalError::Config(format!("Unknown config key: {}", key))),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &["store-dir", "show-summary"]
    }
}
