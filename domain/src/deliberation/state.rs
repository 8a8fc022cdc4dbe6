//! Session state machine

/// State of a deliberation session
///
/// ```text
/// AwaitingQuestion -> InitialCollection -> Critique -> Synthesis
///        ^                                                 |
///        +------------------ (rounds left) ----------------+
///
/// AwaitingQuestion --(blank input)--> Terminal
/// Synthesis --(round limit reached)--> Terminal
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    AwaitingQuestion,
    InitialCollection,
    Critique,
    Synthesis,
    Terminal,
}

impl SessionState {
    /// Transition out of `AwaitingQuestion` after reading a line
    pub fn after_input(input: &str) -> Self {
        if input.trim().is_empty() {
            SessionState::Terminal
        } else {
            SessionState::InitialCollection
        }
    }

    /// Transition out of `Synthesis` once a round is complete
    pub fn after_synthesis(rounds_completed: usize, max_rounds: usize) -> Self {
        if rounds_completed >= max_rounds {
            SessionState::Terminal
        } else {
            SessionState::AwaitingQuestion
        }
    }

    /// Advance through the fixed generation phases of a round
    pub fn advance(self) -> Self {
        match self {
            SessionState::InitialCollection => SessionState::Critique,
            SessionState::Critique => SessionState::Synthesis,
            other => other,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_terminates() {
        assert_eq!(SessionState::after_input(""), SessionState::Terminal);
        assert_eq!(SessionState::after_input("  \n"), SessionState::Terminal);
        assert_eq!(
            SessionState::after_input("Why?"),
            SessionState::InitialCollection
        );
    }

    #[test]
    fn test_round_limit() {
        assert_eq!(
            SessionState::after_synthesis(1, 5),
            SessionState::AwaitingQuestion
        );
        assert_eq!(SessionState::after_synthesis(5, 5), SessionState::Terminal);
    }

    #[test]
    fn test_phase_progression() {
        let state = SessionState::InitialCollection.advance();
        assert_eq!(state, SessionState::Critique);
        assert_eq!(state.advance(), SessionState::Synthesis);
        assert_eq!(SessionState::Terminal.advance(), SessionState::Terminal);
        assert!(SessionState::Terminal.is_terminal());
    }
}
