//! Generation phases of a deliberation round

use serde::{Deserialize, Serialize};

/// Phase of a deliberation round
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Initial collection - every expert answers the question
    Initial,
    /// Critique - the critic evaluates every other expert's answer
    Critique,
    /// Synthesis - the critic writes the final answer
    Synthesis,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Initial => "initial",
            Phase::Critique => "critique",
            Phase::Synthesis => "synthesis",
        }
    }

    /// Console header shown when the phase starts
    pub fn display_name(&self) -> &str {
        match self {
            Phase::Initial => "Initial Expert Responses",
            Phase::Critique => "Critique by the Main Model",
            Phase::Synthesis => "Generating Final Answer by the Main Model",
        }
    }

    /// Console header shown before the phase's results, when it differs from the start header
    pub fn result_name(&self) -> Option<&str> {
        match self {
            Phase::Synthesis => Some("Final Answer"),
            Phase::Initial | Phase::Critique => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesis_has_separate_result_header() {
        assert_eq!(
            Phase::Synthesis.display_name(),
            "Generating Final Answer by the Main Model"
        );
        assert_eq!(Phase::Synthesis.result_name(), Some("Final Answer"));
        assert_eq!(Phase::Initial.result_name(), None);
        assert_eq!(Phase::Critique.result_name(), None);
    }
}
