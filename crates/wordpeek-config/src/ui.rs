use serde::{Deserialize, Serialize};

fn default_max_examples() -> usize {
    5
}

fn default_max_explanations() -> usize {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_max_examples")]
    pub max_examples: usize,
    #[serde(default = "default_max_explanations")]
    pub max_explanations: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_examples: default_max_examples(),
            max_explanations: default_max_explanations(),
        }
    }
}
