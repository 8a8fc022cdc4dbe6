//! Structured reply value object

use super::confidence::FAILURE_CONFIDENCE;
use super::phase::Phase;
use serde::{Deserialize, Serialize};

/// A model reply reduced to a confidence level and cleaned text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredReply {
    /// Self-reported confidence (nominally 1-5, not clamped)
    pub confidence: u32,
    /// Reply text with the confidence annotation stripped
    pub text: String,
}

impl StructuredReply {
    pub fn new(confidence: u32, text: impl Into<String>) -> Self {
        Self {
            confidence,
            text: text.into(),
        }
    }

    /// Reply standing in for a generation call that failed
    pub fn apology(phase: &Phase) -> Self {
        Self::new(FAILURE_CONFIDENCE, Apology::for_phase(phase).text())
    }
}

/// Fixed texts used in place of replies that could not be generated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Apology {
    Answer,
    Critique,
    FinalAnswer,
}

impl Apology {
    pub fn for_phase(phase: &Phase) -> Self {
        match phase {
            Phase::Initial => Apology::Answer,
            Phase::Critique => Apology::Critique,
            Phase::Synthesis => Apology::FinalAnswer,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Apology::Answer => "Sorry, I couldn't generate an answer.",
            Apology::Critique => "Unable to provide critique.",
            Apology::FinalAnswer => "Sorry, I couldn't generate the final answer.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apology_has_minimum_confidence() {
        let reply = StructuredReply::apology(&Phase::Initial);
        assert_eq!(reply.confidence, 1);
        assert_eq!(reply.text, "Sorry, I couldn't generate an answer.");
    }

    #[test]
    fn test_apology_text_per_phase() {
        assert_eq!(
            StructuredReply::apology(&Phase::Critique).text,
            "Unable to provide critique."
        );
        assert_eq!(
            StructuredReply::apology(&Phase::Synthesis).text,
            "Sorry, I couldn't generate the final answer."
        );
    }
}
