//! Prompt domain
//!
//! Templates for generating prompts at each phase of a deliberation round.

mod template;

pub use template::PromptTemplate;
