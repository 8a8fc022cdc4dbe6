//! Session configuration from TOML (`[session]` section)

use serde::{Deserialize, Serialize};

/// Raw session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Maximum number of rounds per session
    pub max_rounds: usize,
    /// Advisory output length for every generation call
    pub max_tokens: u32,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            max_rounds: 5,
            max_tokens: 4096,
        }
    }
}
