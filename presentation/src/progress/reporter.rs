//! Progress reporting for deliberation sessions

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use council_application::{ProgressNotifier, SessionOutcome};
use council_domain::{Expert, Phase, TranscriptEntry};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports a session on the console with a progress bar per phase
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
    echo_questions: bool,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
            echo_questions: false,
        }
    }

    /// Print each round's question as a transcript line (for one-shot runs)
    pub fn with_question_echo(mut self, echo: bool) -> Self {
        self.echo_questions = echo;
        self
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn print(&self, line: &str) {
        self.multi.suspend(|| println!("{}", line));
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        self.print(&ConsoleFormatter::phase_header(phase));

        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(phase.as_str().to_string());
        pb.set_message("waiting for experts...");

        if let Ok(mut slot) = self.phase_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_task_complete(&self, _phase: &Phase, expert: &Expert, success: bool) {
        if let Ok(slot) = self.phase_bar.lock() {
            if let Some(pb) = slot.as_ref() {
                let status = if success {
                    format!("{} {}", "v".green(), expert)
                } else {
                    format!("{} {}", "x".red(), expert)
                };
                pb.set_message(status);
                pb.inc(1);
            }
        }
    }

    fn on_phase_complete(&self, phase: &Phase) {
        if let Ok(mut slot) = self.phase_bar.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_and_clear();
                self.multi.remove(&pb);
            }
        }
        if let Some(header) = ConsoleFormatter::result_header(phase) {
            self.print(&header);
        }
    }

    fn on_round_start(&self, round: usize) {
        self.print(&ConsoleFormatter::iteration_header(round));
    }

    fn on_entry(&self, _phase: Option<&Phase>, entry: &TranscriptEntry) {
        if matches!(entry, TranscriptEntry::User { .. }) && !self.echo_questions {
            return;
        }
        self.print(&ConsoleFormatter::entry_line(entry));
    }

    fn on_session_end(&self, outcome: &SessionOutcome) {
        self.print(&ConsoleFormatter::session_end(outcome));
    }
}

/// Plain text progress (no bars), used with `--quiet`
pub struct SimpleProgress {
    echo_questions: bool,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self {
            echo_questions: false,
        }
    }

    pub fn with_question_echo(mut self, echo: bool) -> Self {
        self.echo_questions = echo;
        self
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, _total_tasks: usize) {
        println!("{}", ConsoleFormatter::phase_header(phase));
    }

    fn on_task_complete(&self, _phase: &Phase, _expert: &Expert, _success: bool) {}

    fn on_phase_complete(&self, phase: &Phase) {
        if let Some(header) = ConsoleFormatter::result_header(phase) {
            println!("{}", header);
        }
    }

    fn on_round_start(&self, round: usize) {
        println!("{}", ConsoleFormatter::iteration_header(round));
    }

    fn on_entry(&self, _phase: Option<&Phase>, entry: &TranscriptEntry) {
        if matches!(entry, TranscriptEntry::User { .. }) && !self.echo_questions {
            return;
        }
        println!("{}", ConsoleFormatter::entry_line(entry));
    }

    fn on_session_end(&self, outcome: &SessionOutcome) {
        println!("{}", ConsoleFormatter::session_end(outcome));
    }
}
