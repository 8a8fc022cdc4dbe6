//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No experts configured for the council")]
    NoExperts,

    #[error("Invalid expert: {0}")]
    InvalidExpert(String),

    #[error("Expert '{0}' is registered more than once")]
    DuplicateExpert(String),

    #[error("Critic model '{0}' not found among experts.")]
    CriticNotRegistered(String),

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),
}

impl DomainError {
    /// Check if this error comes from roster validation
    pub fn is_roster_error(&self) -> bool {
        !matches!(self, DomainError::InvalidQuestion(_))
    }
}
