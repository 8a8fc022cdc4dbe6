//! Deliberation subdomain: the round protocol's entities and rules.
//!
//! - [`council::Council`] — validated expert roster with critic designation
//! - [`confidence`] — confidence marker extraction from free text
//! - [`reply::StructuredReply`] — confidence plus cleaned text
//! - [`round::RoundRecord`] — everything produced for one question
//! - [`transcript::Transcript`] — append-only session log
//! - [`state::SessionState`] — round state machine
//! - [`phase::Phase`] — the three generation phases of a round

pub mod confidence;
pub mod council;
pub mod phase;
pub mod reply;
pub mod round;
pub mod state;
pub mod transcript;
