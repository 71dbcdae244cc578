use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Word-info backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl NetworkConfig {
    pub(crate) fn apply_env(&mut self) {
        if let Ok(url) = env::var("WORDPEEK_API_URL") {
            self.api_url = url;
        }

        if let Some(secs) = env::var("WORDPEEK_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.timeout_seconds = secs;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
