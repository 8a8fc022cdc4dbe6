//! Domain layer for expert-council
//!
//! This crate contains the core deliberation entities, value objects and
//! rules. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Council
//!
//! A [`Council`] is the validated roster of experts taking part in a
//! deliberation, together with the designated critic. The critic is always
//! one of the experts.
//!
//! ## Round
//!
//! Each user question runs one round:
//!
//! 1. **Initial**: every expert answers independently and reports a confidence
//! 2. **Critique**: the critic evaluates every other expert's answer
//! 3. **Synthesis**: the critic writes the final answer from everything above
//!
//! Free-text replies are turned into a [`StructuredReply`] by
//! [`extract_confidence`], and every step is appended to the [`Transcript`].

pub mod core;
pub mod deliberation;
pub mod prompt;

// Re-export commonly used types
pub use core::{error::DomainError, expert::Expert, question::Question};
pub use deliberation::{
    confidence::{DEFAULT_CONFIDENCE, FAILURE_CONFIDENCE, extract_confidence},
    council::Council,
    phase::Phase,
    reply::{Apology, StructuredReply},
    round::{Critique, ExpertReply, RoundRecord},
    state::SessionState,
    transcript::{Transcript, TranscriptEntry},
};
pub use prompt::PromptTemplate;
