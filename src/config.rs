use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::store::{IdStrategy, StoreOptions, ValidationLimits};

pub const DEFAULT_CONFIG_PATH: &str = "config/dashboard.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Author stamped on announcements created from this dashboard.
    pub announcement_author: String,
    /// Sender name stamped on chat messages sent from this dashboard.
    pub chat_display_name: String,
    pub id_strategy: IdStrategy,
    pub max_message_chars: usize,
    /// JSON seed file; the built-in demo data is used when unset.
    pub seed_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            announcement_author: "Current User".to_string(),
            chat_display_name: "You".to_string(),
            id_strategy: IdStrategy::Sequential,
            max_message_chars: ValidationLimits::default().max_message_chars,
            seed_path: None,
        }
    }
}

impl AppConfig {
    pub fn limits(&self) -> ValidationLimits {
        ValidationLimits {
            max_message_chars: self.max_message_chars,
        }
    }

    /// Store settings that stamp `author` on created records.
    pub fn store_options(&self, author: &str) -> StoreOptions {
        StoreOptions {
            author: author.to_string(),
            id_strategy: self.id_strategy,
            limits: self.limits(),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert_eq!(load_config(path.to_str().unwrap()), AppConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        fs::write(&path, r#"{"chat_display_name":"Rina","id_strategy":"time_ordered"}"#).unwrap();

        let config = load_config(path.to_str().unwrap());
        assert_eq!(config.chat_display_name, "Rina");
        assert_eq!(config.id_strategy, IdStrategy::TimeOrdered);
        assert_eq!(config.announcement_author, "Current User");
        assert_eq!(config.max_message_chars, 500);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        fs::write(&path, "[1, 2").unwrap();
        assert_eq!(load_config(path.to_str().unwrap()), AppConfig::default());
    }

    #[test]
    fn save_creates_parent_dirs_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config/dashboard.json");
        let path = path.to_str().unwrap();

        let config = AppConfig {
            seed_path: Some("data/seed.json".to_string()),
            max_message_chars: 280,
            ..AppConfig::default()
        };
        save_config(path, &config).unwrap();
        assert_eq!(load_config(path), config);
    }
}
