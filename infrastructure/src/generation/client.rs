//! HTTP client for one expert's `/generate` endpoint

use super::payload::{GenerateBody, NdjsonDecoder, decode_single};
use council_application::GatewayError;
use council_domain::Expert;
use futures::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;
use tracing::{debug, warn};

/// Upper bound on a single generation call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// Issues generation calls to a single expert backend
///
/// Connections are not pooled: every call opens its own connection and
/// releases it when the response is consumed or the call fails.
#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    expert: Expert,
    http: reqwest::Client,
    timeout: Duration,
}

impl HttpGenerationClient {
    pub fn new(expert: Expert, timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self::with_http(expert, Self::build_http()?, timeout))
    }

    /// Create a client sharing an existing `reqwest::Client`
    pub fn with_http(expert: Expert, http: reqwest::Client, timeout: Duration) -> Self {
        Self {
            expert,
            http,
            timeout,
        }
    }

    /// Build the underlying HTTP client with pooling disabled
    pub fn build_http() -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
    }

    fn url(&self) -> String {
        format!("{}/generate", self.expert.endpoint().trim_end_matches('/'))
    }

    /// Generate text for `prompt`, returning the trimmed reply
    pub async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GatewayError> {
        let backend = self.expert.name();
        debug!(backend, max_tokens, "Sending generation request");

        let result = match tokio::time::timeout(self.timeout, self.request(prompt, max_tokens)).await
        {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout {
                backend: backend.to_string(),
                after: self.timeout,
            }),
        };

        match result {
            Ok(text) => {
                debug!(backend, chars = text.len(), "Generation completed");
                Ok(text.trim().to_string())
            }
            Err(e) => {
                warn!(backend, error = %e.detail(), "Generation call failed");
                Err(e)
            }
        }
    }

    async fn request(&self, prompt: &str, max_tokens: u32) -> Result<String, GatewayError> {
        let body = GenerateBody {
            model: self.expert.name(),
            prompt,
            max_tokens,
        };

        let response = self
            .http
            .post(self.url())
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Http {
                backend: self.expert.name().to_string(),
                status: status.as_u16(),
            });
        }

        let streamed = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("ndjson"));

        if streamed {
            let mut decoder = NdjsonDecoder::new();
            let mut stream = response.bytes_stream();
            while let Some(chunk) = stream.next().await {
                let chunk = chunk.map_err(|e| self.transport_error(e))?;
                decoder.feed(&chunk).map_err(|e| self.payload_error(e))?;
            }
            decoder.finish().map_err(|e| self.payload_error(e))
        } else {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| self.transport_error(e))?;
            decode_single(&bytes).map_err(|e| self.payload_error(e))
        }
    }

    fn transport_error(&self, error: reqwest::Error) -> GatewayError {
        let backend = self.expert.name().to_string();
        if error.is_timeout() {
            GatewayError::Timeout {
                backend,
                after: self.timeout,
            }
        } else {
            GatewayError::Connection {
                backend,
                message: error.to_string(),
            }
        }
    }

    fn payload_error(&self, error: serde_json::Error) -> GatewayError {
        GatewayError::MalformedPayload {
            backend: self.expert.name().to_string(),
            message: error.to_string(),
        }
    }
}
