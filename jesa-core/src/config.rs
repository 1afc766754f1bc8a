//! Global jesa configuration.
//!
//! Lives at `~/.config/jesa/config.toml`. Permanent memorials and seed
//! prayers are declared here so the binary itself carries no personal data.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::{JesaError, JesaResult};
use crate::memorial::Memorial;
use crate::prayer::Prayer;

static DEFAULT_STORE_PATH: &str = "~/.local/share/jesa/store.json";

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

#[derive(Deserialize, Clone)]
pub struct JesaConfig {
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Permanent memorials. They always show unless explicitly hidden.
    #[serde(default, rename = "memorial")]
    pub memorials: Vec<Memorial>,

    /// Prayer intentions seeded once into an empty store.
    #[serde(default, rename = "prayer")]
    pub prayers: Vec<Prayer>,
}

impl Default for JesaConfig {
    fn default() -> Self {
        JesaConfig {
            store_path: default_store_path(),
            memorials: Vec::new(),
            prayers: Vec::new(),
        }
    }
}

impl JesaConfig {
    pub fn load() -> JesaResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: JesaConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| JesaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| JesaError::Config(e.to_string()))?;

        Ok(config)
    }

    pub fn config_path() -> JesaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| JesaError::Config("Could not determine config directory".into()))?
            .join("jesa");

        Ok(config_dir.join("config.toml"))
    }

    /// The store path with `~` expanded to the home directory.
    pub fn store_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.store_path.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> JesaResult<()> {
        let contents = format!(
            "\
# jesa configuration

# Where user-added memorials and prayers are kept:
# store_path = \"{DEFAULT_STORE_PATH}\"

# Permanent memorials, always shown unless removed:
# [[memorial]]
# id = \"p-dad\"
# name = \"Dad\"
# death_date = \"2022-09-22\"
# photo = \"images/dad.jpg\"

# Prayer intentions seeded on first run:
# [[prayer]]
# id = \"pp-1\"
# category = \"Grieving friends\"
# detail = \"Sara, Magali\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                JesaError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| JesaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_full_config() {
        let toml = r#"
            store_path = "/tmp/jesa/store.json"

            [[memorial]]
            id = "p-dad"
            name = "Dad"
            death_date = "2022-09-22"
            photo = "images/dad.jpg"

            [[memorial]]
            id = "p-mark"
            name = "Mark"
            death_date = "2023-06-01"

            [[prayer]]
            id = "pp-1"
            category = "Grieving friends"
        "#;

        let config: JesaConfig = Config::builder()
            .add_source(File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.store_path, PathBuf::from("/tmp/jesa/store.json"));
        assert_eq!(config.memorials.len(), 2);
        assert_eq!(
            config.memorials[0].death_date,
            NaiveDate::from_ymd_opt(2022, 9, 22).unwrap()
        );
        assert_eq!(config.memorials[1].photo, None);
        assert_eq!(config.prayers.len(), 1);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: JesaConfig = Config::builder()
            .add_source(File::from_str("", config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.store_path, default_store_path());
        assert!(config.memorials.is_empty());
        assert!(config.prayers.is_empty());
    }

    #[test]
    fn default_config_file_is_fully_commented() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        JesaConfig::create_default_config(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents
            .lines()
            .all(|l| l.is_empty() || l.starts_with('#')));
    }
}
