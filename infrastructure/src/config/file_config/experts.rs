//! Expert registrations from TOML (`[[experts]]` array)

use council_domain::Expert;
use serde::{Deserialize, Serialize};

/// One registered backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExpertConfig {
    /// Model name, sent to the backend as the model identity
    pub name: String,
    /// Base URL of the generation API (defaults to `client.base_url`)
    pub endpoint: Option<String>,
}

impl FileExpertConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: None,
        }
    }

    pub fn to_expert(&self, default_endpoint: &str) -> Expert {
        Expert::new(
            self.name.trim(),
            self.endpoint.as_deref().unwrap_or(default_endpoint),
        )
    }
}

/// Parse `NAME` or `NAME=URL`; every input yields a registration
impl From<&str> for FileExpertConfig {
    fn from(s: &str) -> Self {
        match s.split_once('=') {
            Some((name, endpoint)) if !endpoint.trim().is_empty() => Self {
                name: name.trim().to_string(),
                endpoint: Some(endpoint.trim().to_string()),
            },
            Some((name, _)) => Self::named(name.trim()),
            None => Self::named(s.trim()),
        }
    }
}

impl From<&Expert> for FileExpertConfig {
    fn from(expert: &Expert) -> Self {
        Self {
            name: expert.name().to_string(),
            endpoint: Some(expert.endpoint().to_string()),
        }
    }
}
