//! Progress notification port
//!
//! Defines the interface for reporting what happens during a deliberation
//! session: phase progress and every transcript entry as it is appended.

use crate::use_cases::run_deliberation::SessionOutcome;
use council_domain::{Expert, Phase, TranscriptEntry};

/// Callback for progress updates during a deliberation session
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain text, nothing at all).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called when a generation call completes within a phase
    fn on_task_complete(&self, phase: &Phase, expert: &Expert, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase);

    // ==================== Session Callbacks ====================

    /// Called before the question for a round is read.
    fn on_round_start(&self, _round: usize) {}

    /// Called for each entry right after it is appended to the transcript.
    fn on_entry(&self, _phase: Option<&Phase>, _entry: &TranscriptEntry) {}

    /// Called once when the session reaches its terminal state.
    fn on_session_end(&self, _outcome: &SessionOutcome) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_task_complete(&self, _phase: &Phase, _expert: &Expert, _success: bool) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
}
