//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question put to the council (Value Object)
///
/// Always holds non-blank, trimmed text. Blank input from the user ends the
/// session instead of producing a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question {
    content: String,
}

impl Question {
    /// Parse raw user input into a question
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        Self::try_new(input)
            .ok_or_else(|| DomainError::InvalidQuestion("question cannot be blank".to_string()))
    }

    /// Try to create a question, returning None for blank input
    pub fn try_new(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_is_trimmed() {
        let q = Question::parse("  What is Rust?\n").unwrap();
        assert_eq!(q.content(), "What is Rust?");
    }

    #[test]
    fn test_blank_question_rejected() {
        assert!(Question::try_new("").is_none());
        assert!(Question::try_new(" \t\n").is_none());
        assert!(matches!(
            Question::parse("   "),
            Err(DomainError::InvalidQuestion(_))
        ));
    }
}
