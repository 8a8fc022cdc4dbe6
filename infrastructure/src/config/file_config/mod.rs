//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on demand.

mod client;
mod experts;
mod output;
mod session;

pub use client::FileClientConfig;
pub use experts::FileExpertConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use session::FileSessionConfig;

use council_application::SessionParams;
use council_domain::{Council, DomainError, Expert};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("client.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("session.max_rounds cannot be 0")]
    InvalidMaxRounds,

    #[error("session.max_tokens cannot be 0")]
    InvalidMaxTokens,

    #[error("expert name cannot be empty")]
    EmptyExpertName,

    #[error(transparent)]
    Council(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Name of the expert that critiques and synthesizes
    pub critic: String,
    /// Registered experts, in processing order
    pub experts: Vec<FileExpertConfig>,
    /// Session loop settings
    pub session: FileSessionConfig,
    /// Generation client settings
    pub client: FileClientConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            critic: Expert::default_critic().to_string(),
            experts: Expert::default_experts()
                .iter()
                .map(|e| FileExpertConfig::named(e.name()))
                .collect(),
            session: FileSessionConfig::default(),
            client: FileClientConfig::default(),
            output: FileOutputConfig::default(),
        }
    }
}

impl FileConfig {
    /// Validate scalar settings and the expert roster.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.client.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.session.max_rounds == 0 {
            return Err(ConfigValidationError::InvalidMaxRounds);
        }
        if self.session.max_tokens == 0 {
            return Err(ConfigValidationError::InvalidMaxTokens);
        }
        if self.experts.iter().any(|e| e.name.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyExpertName);
        }
        self.to_council()?;
        Ok(())
    }

    /// Resolve experts, filling in the client's base URL where no endpoint is set
    pub fn to_experts(&self) -> Vec<Expert> {
        self.experts
            .iter()
            .map(|e| e.to_expert(&self.client.base_url))
            .collect()
    }

    /// Build the validated council
    pub fn to_council(&self) -> Result<Council, DomainError> {
        Council::new(self.to_experts(), &self.critic)
    }

    pub fn to_session_params(&self) -> SessionParams {
        SessionParams::default()
            .with_max_rounds(self.session.max_rounds)
            .with_max_output_tokens(self.session.max_tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
critic = "llama3"

[[experts]]
name = "llama3"

[[experts]]
name = "mistral"
endpoint = "http://gpu-box:11434/api"

[session]
max_rounds = 2
max_tokens = 512

[client]
base_url = "http://localhost:9999/api"
timeout_seconds = 30

[output]
format = "json"
color = false
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.critic, "llama3");
        assert_eq!(config.session.max_rounds, 2);
        assert_eq!(config.client.timeout_seconds, 30);
        assert_eq!(config.output.format, FileOutputFormat::Json);
        assert!(!config.output.color);
        assert!(!config.output.show_progress);

        let experts = config.to_experts();
        assert_eq!(experts[0].endpoint(), "http://localhost:9999/api");
        assert_eq!(experts[1].endpoint(), "http://gpu-box:11434/api");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[session]
max_rounds = 1
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.max_rounds, 1);
        // Defaults should apply
        assert_eq!(config.session.max_tokens, 4096);
        assert_eq!(config.experts.len(), 3);
        assert_eq!(config.critic, "gemma2:9b");
        assert_eq!(config.client.timeout_seconds, 180);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        let council = config.to_council().unwrap();
        assert_eq!(council.critic().name(), "gemma2:9b");
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let mut config = FileConfig::default();
        config.client.timeout_seconds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));

        let mut config = FileConfig::default();
        config.session.max_rounds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidMaxRounds));

        let mut config = FileConfig::default();
        config.session.max_tokens = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidMaxTokens));
    }

    #[test]
    fn test_validate_rejects_unknown_critic() {
        let config = FileConfig {
            critic: "nobody".to_string(),
            ..FileConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::Council(
                DomainError::CriticNotRegistered("nobody".to_string())
            ))
        );
    }

    #[test]
    fn test_validate_rejects_empty_expert_name() {
        let mut config = FileConfig::default();
        config.experts.push(FileExpertConfig::named(""));
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyExpertName));
    }
}
