//! Expert value object representing one generation backend

use serde::{Deserialize, Serialize};

/// Default base URL of a local generation API
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api";

/// A registered text-generation backend (Value Object)
///
/// The name doubles as the model identity sent to the backend and is
/// unique within a [`Council`](crate::Council). The endpoint is the base URL
/// of the backend's generation API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expert {
    name: String,
    endpoint: String,
}

impl Expert {
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Create an expert served by the default local endpoint
    pub fn local(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_ENDPOINT)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The default roster: three locally served models
    pub fn default_experts() -> Vec<Expert> {
        vec![
            Expert::local("gemma2:9b"),
            Expert::local("hermes3:latest"),
            Expert::local("aya-expanse:latest"),
        ]
    }

    /// The critic of the default roster
    pub fn default_critic() -> &'static str {
        "gemma2:9b"
    }
}

impl std::fmt::Display for Expert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
