//! [`LlmGateway`] implementation over HTTP generation clients

use super::client::HttpGenerationClient;
use async_trait::async_trait;
use council_application::{GatewayError, GenerationRequest, LlmGateway};
use council_domain::Expert;
use std::collections::HashMap;
use std::time::Duration;

/// Routes each generation call to the client registered under the expert's name
pub struct HttpLlmGateway {
    clients: HashMap<String, HttpGenerationClient>,
}

impl HttpLlmGateway {
    /// Create one client per expert, all sharing a single unpooled HTTP client
    pub fn new(experts: &[Expert], timeout: Duration) -> reqwest::Result<Self> {
        let http = HttpGenerationClient::build_http()?;
        let clients = experts
            .iter()
            .map(|expert| {
                (
                    expert.name().to_string(),
                    HttpGenerationClient::with_http(expert.clone(), http.clone(), timeout),
                )
            })
            .collect();
        Ok(Self { clients })
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[async_trait]
impl LlmGateway for HttpLlmGateway {
    async fn generate(
        &self,
        expert: &Expert,
        request: GenerationRequest,
    ) -> Result<String, GatewayError> {
        let client = self
            .clients
            .get(expert.name())
            .ok_or_else(|| GatewayError::UnknownBackend {
                backend: expert.name().to_string(),
            })?;
        client
            .generate(&request.prompt, request.max_output_tokens)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::client::DEFAULT_TIMEOUT;
    use crate::generation::client::tests::{json_response, serve_once};

    #[tokio::test]
    async fn test_unknown_backend() {
        let gateway = HttpLlmGateway::new(&Expert::default_experts(), DEFAULT_TIMEOUT).unwrap();
        assert_eq!(gateway.len(), 3);

        let err = gateway
            .generate(&Expert::local("phi3"), GenerationRequest::new("q", 16))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::UnknownBackend {
                backend: "phi3".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_routes_to_expert_endpoint() {
        let (url, server) = serve_once(vec![json_response(r#"{"response":"hi"}"#)]).await;
        let expert = Expert::new("mistral", url);
        let gateway = HttpLlmGateway::new(&[expert.clone()], DEFAULT_TIMEOUT).unwrap();

        let text = gateway
            .generate(&expert, GenerationRequest::new("hello", 32))
            .await
            .unwrap();
        assert_eq!(text, "hi");
        assert!(server.await.unwrap().contains(r#""model":"mistral""#));
    }
}
