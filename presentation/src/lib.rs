//! Presentation layer for expert-council
//!
//! This crate contains CLI definitions, console output formatting,
//! progress reporters, and terminal question input.

pub mod cli;
pub mod input;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use input::terminal::TerminalQuestionSource;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
