//! Application layer for expert-council
//!
//! This crate contains the deliberation use case, port definitions, and
//! session parameters. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionParams;
pub use ports::{
    llm_gateway::{GatewayError, GenerationRequest, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
    question_source::{InputError, QueuedQuestions, QuestionSource},
};
pub use use_cases::run_deliberation::{
    EndReason, RunDeliberationError, RunDeliberationUseCase, SessionOutcome,
};
