use log::debug;
use sequence_diff::{DEFAULT_MAX_TOKENS, DiffOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DiffConfig {
    /// Largest number of tokens accepted on either side of a diff.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

fn default_max_tokens() -> usize {
    debug!("Using default diff token limit: {DEFAULT_MAX_TOKENS}");
    DEFAULT_MAX_TOKENS
}

impl DiffConfig {
    pub fn options(&self) -> DiffOptions { DiffOptions::with_max_tokens(self.max_tokens) }
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
        }
    }
}
