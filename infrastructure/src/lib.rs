//! Infrastructure layer for expert-council
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the HTTP generation client and gateway, plus
//! configuration file loading.

pub mod config;
pub mod generation;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileClientConfig, FileConfig, FileExpertConfig,
    FileOutputConfig, FileOutputFormat, FileSessionConfig,
};
pub use generation::{
    client::{DEFAULT_TIMEOUT, HttpGenerationClient},
    gateway::HttpLlmGateway,
};
