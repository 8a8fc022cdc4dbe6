//! Core domain concepts shared across all subdomains.
//!
//! - [`expert::Expert`] — one registered text-generation backend
//! - [`question::Question`] — a validated question to pose to the council
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod expert;
pub mod question;
pub mod string;
