//! Console output formatter for deliberation sessions

use colored::Colorize;
use council_application::{EndReason, SessionOutcome};
use council_domain::{Phase, Transcript, TranscriptEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryStyle {
    Question,
    Reply,
    /// Stand-in text for a failed call
    Apology,
}

/// Formats session events for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Header printed before the question of a round is read
    pub fn iteration_header(round: usize) -> String {
        format!("\n{}", format!("--- Iteration {} ---", round).cyan().bold())
    }

    /// Header printed when a phase starts
    pub fn phase_header(phase: &Phase) -> String {
        format!(
            "\n{}",
            format!("--- {} ---", phase.display_name()).cyan().bold()
        )
    }

    /// Header printed once a phase's calls are done, before its entries
    pub fn result_header(phase: &Phase) -> Option<String> {
        phase
            .result_name()
            .map(|name| format!("\n{}", format!("--- {} ---", name).cyan().bold()))
    }

    /// One transcript entry as a console line
    pub fn entry_line(entry: &TranscriptEntry) -> String {
        let line = entry.to_string();
        match Self::entry_style(entry) {
            EntryStyle::Question => line.dimmed().to_string(),
            EntryStyle::Apology => line.yellow().to_string(),
            EntryStyle::Reply => line,
        }
    }

    fn entry_style(entry: &TranscriptEntry) -> EntryStyle {
        match entry {
            TranscriptEntry::User { .. } => EntryStyle::Question,
            _ if !entry.is_generated() => EntryStyle::Apology,
            _ => EntryStyle::Reply,
        }
    }

    /// Closing lines of a session
    pub fn session_end(outcome: &SessionOutcome) -> String {
        let mut output = String::new();
        if outcome.end_reason == EndReason::UserEnded {
            output.push_str("Interaction ended by the user.\n");
        }
        output.push_str(&format!("\n{}", "--- Interaction Completed ---".cyan().bold()));
        output
    }

    /// Format the whole transcript as JSON
    pub fn format_json(transcript: &Transcript) -> String {
        serde_json::to_string_pretty(transcript).unwrap_or_else(|_| "[]".to_string())
    }
}
