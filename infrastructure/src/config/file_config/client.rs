//! Generation client configuration from TOML (`[client]` section)

use council_domain::core::expert::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw generation client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// Base URL used by experts without their own endpoint
    pub base_url: String,
    /// Upper bound on one generation call, in seconds
    pub timeout_seconds: u64,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: 180,
        }
    }
}

impl FileClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
