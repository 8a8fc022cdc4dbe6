//! LLM Gateway port
//!
//! Defines the interface for issuing generation calls to expert backends.
//!
//! Every failure of a single call is reported as a [`GatewayError`] value
//! naming the backend; nothing is retried. Callers branch on the variant,
//! never on the rendered message.

use async_trait::async_trait;
use council_domain::Expert;
use std::time::Duration;
use thiserror::Error;

/// Failure of one generation call
///
/// The `Display` form is the user-facing failure line for the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Error: Unable to generate response for {backend}.")]
    Connection { backend: String, message: String },

    #[error("Error: Request to {backend} timed out.")]
    Timeout { backend: String, after: Duration },

    #[error("Error: Unable to generate response for {backend} (HTTP {status}).")]
    Http { backend: String, status: u16 },

    #[error("Error: Unable to generate response for {backend}.")]
    MalformedPayload { backend: String, message: String },

    #[error("Error: No backend registered as {backend}.")]
    UnknownBackend { backend: String },

    #[error("Error: Unable to generate response for {backend}.")]
    Other { backend: String, message: String },
}

impl GatewayError {
    /// Name of the backend the failed call was addressed to
    pub fn backend(&self) -> &str {
        match self {
            GatewayError::Connection { backend, .. }
            | GatewayError::Timeout { backend, .. }
            | GatewayError::Http { backend, .. }
            | GatewayError::MalformedPayload { backend, .. }
            | GatewayError::UnknownBackend { backend }
            | GatewayError::Other { backend, .. } => backend,
        }
    }

    /// Underlying cause, for diagnostics
    pub fn detail(&self) -> String {
        match self {
            GatewayError::Connection { message, .. }
            | GatewayError::MalformedPayload { message, .. }
            | GatewayError::Other { message, .. } => message.clone(),
            GatewayError::Timeout { after, .. } => format!("no response within {:?}", after),
            GatewayError::Http { status, .. } => format!("HTTP status {}", status),
            GatewayError::UnknownBackend { .. } => "backend not registered".to_string(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, GatewayError::Timeout { .. })
    }
}

/// One generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Advisory bound the backend may ignore
    pub max_output_tokens: u32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, max_output_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            max_output_tokens,
        }
    }
}

/// Gateway for generation calls
///
/// This port defines how the application layer reaches expert backends.
/// Implementations (adapters) live in the infrastructure layer and must
/// bound each call's duration themselves.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Generate text from one expert; `Ok` holds the trimmed reply
    async fn generate(
        &self,
        expert: &Expert,
        request: GenerationRequest,
    ) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_lines_name_the_backend() {
        let timeout = GatewayError::Timeout {
            backend: "gemma2:9b".to_string(),
            after: Duration::from_secs(180),
        };
        assert_eq!(timeout.to_string(), "Error: Request to gemma2:9b timed out.");
        assert!(timeout.is_timeout());

        let connection = GatewayError::Connection {
            backend: "hermes3:latest".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            connection.to_string(),
            "Error: Unable to generate response for hermes3:latest."
        );
        assert_eq!(connection.backend(), "hermes3:latest");
        assert_eq!(connection.detail(), "connection refused");
    }
}
