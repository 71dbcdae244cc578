use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;
use self::ui::UiConfig;

pub mod network;
pub mod ui;

fn default_words_path() -> String {
    "words.json".to_string()
}

fn default_event_channel_capacity() -> usize {
    64
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub ui: UiConfig,

    /// Word-list file shown in list mode
    #[serde(default = "default_words_path")]
    pub words_path: String,
    /// Capacity of the intent and fetch-completion channels
    #[serde(default = "default_event_channel_capacity")]
    pub event_channel_capacity: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Load a JSON config file; fields it leaves out keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let mut config: Config = serde_json::from_reader(BufReader::new(file))?;
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        self.network.apply_env();

        if let Ok(path) = env::var("WORDPEEK_WORDS_PATH") {
            self.words_path = path;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            ui: UiConfig::default(),
            words_path: default_words_path(),
            event_channel_capacity: default_event_channel_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "network": { "api_url": "http://api.local" } }"#).unwrap();
        assert_eq!(config.network.api_url, "http://api.local");
        assert_eq!(config.network.timeout_seconds, 30);
        assert_eq!(config.words_path, "words.json");
        assert_eq!(config.ui.max_examples, 5);
    }
}
