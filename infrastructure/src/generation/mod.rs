//! HTTP generation backends
//!
//! - [`client::HttpGenerationClient`] issues one `/generate` call against one expert
//! - [`gateway::HttpLlmGateway`] implements the [`LlmGateway`](council_application::LlmGateway)
//!   port by routing each call to the expert's client

pub mod client;
pub mod gateway;
mod payload;
