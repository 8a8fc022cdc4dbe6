//! Session parameters — use case loop control.
//!
//! [`SessionParams`] groups the static parameters that control the round
//! loop in [`RunDeliberationUseCase`](crate::use_cases::run_deliberation::RunDeliberationUseCase).
//! The per-call wait bound belongs to the generation client, not here.

use serde::{Deserialize, Serialize};

/// Session loop control parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionParams {
    /// Maximum number of rounds before the session ends on its own.
    pub max_rounds: usize,
    /// Advisory output length passed with every generation request.
    pub max_output_tokens: u32,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            max_rounds: 5,
            max_output_tokens: 4096,
        }
    }
}

impl SessionParams {
    pub fn with_max_rounds(mut self, max: usize) -> Self {
        self.max_rounds = max;
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }
}
