//! Run Deliberation use case
//!
//! Orchestrates the multi-round council session: initial answers from every
//! expert, critiques of the other experts by the critic, and the critic's
//! final synthesis, recording every step in the transcript.

use crate::config::SessionParams;
use crate::ports::llm_gateway::{GatewayError, GenerationRequest, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::question_source::{InputError, QuestionSource};
use council_domain::{
    Council, Critique, DomainError, Expert, ExpertReply, Phase, PromptTemplate, Question,
    RoundRecord, SessionState, StructuredReply, Transcript, TranscriptEntry, extract_confidence,
};
use council_domain::core::string::truncate;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that can end a deliberation session
///
/// Failures of individual generation calls are not among them: those are
/// absorbed into apology replies and the round carries on.
#[derive(Error, Debug)]
pub enum RunDeliberationError {
    #[error("Invalid council: {0}")]
    Config(#[from] DomainError),

    #[error("Failed to read question: {0}")]
    Input(#[from] InputError),
}

/// Why a session reached its terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The user entered a blank line
    UserEnded,
    /// The configured number of rounds was completed
    RoundLimit,
}

/// Result of a completed session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub rounds_completed: usize,
    pub end_reason: EndReason,
}

impl SessionOutcome {
    /// Completion notice reported to the caller
    pub fn message(&self) -> &'static str {
        "Interaction successfully completed."
    }
}

/// A generation call waiting to be issued within a phase
struct PendingCall {
    /// Backend that receives the prompt
    author: Expert,
    /// Expert the call is about (reported to progress)
    subject: Expert,
    prompt: String,
}

/// Use case for running a council deliberation session
pub struct RunDeliberationUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    council: Council,
    params: SessionParams,
    state: SessionState,
    transcript: Transcript,
    rounds: Vec<RoundRecord>,
}

impl<G: LlmGateway + 'static> RunDeliberationUseCase<G> {
    pub fn new(gateway: Arc<G>, council: Council, params: SessionParams) -> Self {
        Self {
            gateway,
            council,
            params,
            state: SessionState::AwaitingQuestion,
            transcript: Transcript::new(),
            rounds: Vec::new(),
        }
    }

    /// Build the council from raw registrations, failing before any round
    /// if the critic is not one of the experts.
    pub fn from_experts(
        gateway: Arc<G>,
        experts: Vec<Expert>,
        critic: &str,
        params: SessionParams,
    ) -> Result<Self, RunDeliberationError> {
        let council = Council::new(experts, critic)?;
        Ok(Self::new(gateway, council, params))
    }

    pub fn council(&self) -> &Council {
        &self.council
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Every completed round, oldest first
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// Run the session with default (no-op) progress
    pub async fn interact(
        &mut self,
        input: &mut dyn QuestionSource,
    ) -> Result<SessionOutcome, RunDeliberationError> {
        self.interact_with_progress(input, &NoProgress).await
    }

    /// Run rounds until the user enters a blank line or the round cap is hit
    pub async fn interact_with_progress(
        &mut self,
        input: &mut dyn QuestionSource,
        progress: &dyn ProgressNotifier,
    ) -> Result<SessionOutcome, RunDeliberationError> {
        info!(
            "Starting deliberation with {} experts, critic {}",
            self.council.len(),
            self.council.critic()
        );

        let mut rounds_completed = 0;
        let mut end_reason = EndReason::RoundLimit;

        self.state = if self.params.max_rounds == 0 {
            SessionState::Terminal
        } else {
            SessionState::AwaitingQuestion
        };

        while !self.state.is_terminal() {
            let round = self.rounds.len() + 1;
            progress.on_round_start(round);

            let line = input.read_question(round).await?;
            self.state = SessionState::after_input(&line);

            let Some(question) = Question::try_new(&line) else {
                info!("Interaction ended by the user");
                end_reason = EndReason::UserEnded;
                break;
            };

            self.run_round(question, progress).await;
            rounds_completed += 1;
            self.state = SessionState::after_synthesis(rounds_completed, self.params.max_rounds);
        }

        self.state = SessionState::Terminal;
        let outcome = SessionOutcome {
            rounds_completed,
            end_reason,
        };
        info!(
            "Deliberation finished after {} round(s): {:?}",
            outcome.rounds_completed, outcome.end_reason
        );
        progress.on_session_end(&outcome);
        Ok(outcome)
    }

    /// Run one full round for a question and record it
    pub async fn run_round(
        &mut self,
        question: Question,
        progress: &dyn ProgressNotifier,
    ) -> RoundRecord {
        let number = self.rounds.len() + 1;
        info!("Round {}: {}", number, truncate(question.content(), 80));

        self.record(None, TranscriptEntry::user(&question), progress);

        self.state = SessionState::InitialCollection;
        let answers = self.phase_initial(&question, progress).await;

        self.state = self.state.advance();
        let critiques = self.phase_critique(&question, &answers, progress).await;

        self.state = self.state.advance();
        let final_answer = self
            .phase_synthesis(&question, &answers, &critiques, progress)
            .await;

        let record = RoundRecord {
            number,
            question,
            answers,
            critiques,
            final_answer,
        };
        if record.failed_calls() > 0 {
            warn!(
                "Round {} completed with {} failed call(s)",
                number,
                record.failed_calls()
            );
        }
        self.rounds.push(record.clone());
        record
    }

    /// Phase 1: every expert answers in parallel
    async fn phase_initial(
        &mut self,
        question: &Question,
        progress: &dyn ProgressNotifier,
    ) -> Vec<ExpertReply> {
        info!("Phase 1: Initial Collection");
        let phase = Phase::Initial;
        let prompt = PromptTemplate::initial_query(question.content());

        let calls = self
            .council
            .experts()
            .iter()
            .map(|expert| PendingCall {
                author: expert.clone(),
                subject: expert.clone(),
                prompt: prompt.clone(),
            })
            .collect();

        let results = self.fan_out(&phase, calls, progress).await;

        let answers: Vec<ExpertReply> = self
            .council
            .experts()
            .iter()
            .zip(results)
            .map(|(expert, result)| {
                let (reply, generated) = Self::structure(&phase, result);
                ExpertReply::new(expert.name(), reply, generated)
            })
            .collect();

        for answer in &answers {
            self.record(Some(&phase), TranscriptEntry::answer(answer), progress);
        }
        answers
    }

    /// Phase 2: the critic evaluates every other expert's answer in parallel
    async fn phase_critique(
        &mut self,
        question: &Question,
        answers: &[ExpertReply],
        progress: &dyn ProgressNotifier,
    ) -> Vec<Critique> {
        info!("Phase 2: Critique");
        let phase = Phase::Critique;
        let critic = self.council.critic().clone();

        let targets: Vec<(Expert, &ExpertReply)> = self
            .council
            .experts()
            .iter()
            .zip(answers)
            .filter(|(expert, _)| !self.council.is_critic(expert))
            .map(|(expert, answer)| (expert.clone(), answer))
            .collect();

        if targets.is_empty() {
            debug!("Critic is the only expert, skipping critique phase");
            return Vec::new();
        }

        let calls = targets
            .iter()
            .map(|(expert, answer)| PendingCall {
                author: critic.clone(),
                subject: expert.clone(),
                prompt: PromptTemplate::critique_prompt(
                    question.content(),
                    expert.name(),
                    &answer.reply.text,
                ),
            })
            .collect();

        let results = self.fan_out(&phase, calls, progress).await;

        let critiques: Vec<Critique> = targets
            .iter()
            .zip(results)
            .map(|((expert, _), result)| {
                let (reply, generated) = Self::structure(&phase, result);
                Critique::new(critic.name(), expert.name(), reply, generated)
            })
            .collect();

        for critique in &critiques {
            self.record(Some(&phase), TranscriptEntry::critique(critique), progress);
        }
        critiques
    }

    /// Phase 3: the critic synthesizes the final answer
    async fn phase_synthesis(
        &mut self,
        question: &Question,
        answers: &[ExpertReply],
        critiques: &[Critique],
        progress: &dyn ProgressNotifier,
    ) -> ExpertReply {
        info!("Phase 3: Synthesis");
        let phase = Phase::Synthesis;
        let critic = self.council.critic().clone();

        let call = PendingCall {
            author: critic.clone(),
            subject: critic.clone(),
            prompt: PromptTemplate::synthesis_prompt(
                question.content(),
                answers,
                critic.name(),
                critiques,
            ),
        };

        let result = self
            .fan_out(&phase, vec![call], progress)
            .await
            .into_iter()
            .next()
            .unwrap_or_else(|| Err(Self::lost_call(&critic)));

        let (reply, generated) = Self::structure(&phase, result);
        let final_answer = ExpertReply::new(critic.name(), reply, generated);
        self.record(
            Some(&phase),
            TranscriptEntry::final_answer(&final_answer),
            progress,
        );
        final_answer
    }

    /// Launch every call, wait for all of them, and return the results in
    /// the order the calls were given, whatever order they finished in.
    async fn fan_out(
        &self,
        phase: &Phase,
        calls: Vec<PendingCall>,
        progress: &dyn ProgressNotifier,
    ) -> Vec<Result<String, GatewayError>> {
        progress.on_phase_start(phase, calls.len());

        let mut join_set = JoinSet::new();

        for (index, call) in calls.iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let author = call.author.clone();
            let request = GenerationRequest::new(call.prompt.clone(), self.params.max_output_tokens);

            join_set.spawn(async move {
                let result = gateway.generate(&author, request).await;
                (index, result)
            });
        }

        let mut slots: Vec<Option<Result<String, GatewayError>>> = vec![None; calls.len()];

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, result)) => {
                    let call = &calls[index];
                    match &result {
                        Ok(_) => debug!("{} call to {} succeeded", phase.as_str(), call.author),
                        Err(e) => warn!(
                            "{} call to {} failed: {} ({})",
                            phase.as_str(),
                            call.author,
                            e,
                            e.detail()
                        ),
                    }
                    progress.on_task_complete(phase, &call.subject, result.is_ok());
                    slots[index] = Some(result);
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        // A panicked task leaves its slot empty; it counts as a failed call.
        let results = slots
            .into_iter()
            .zip(&calls)
            .map(|(slot, call)| {
                slot.unwrap_or_else(|| {
                    progress.on_task_complete(phase, &call.subject, false);
                    Err(Self::lost_call(&call.author))
                })
            })
            .collect();

        progress.on_phase_complete(phase);
        results
    }

    /// Turn a call result into a reply; failures become the phase's apology
    fn structure(phase: &Phase, result: Result<String, GatewayError>) -> (StructuredReply, bool) {
        match result {
            Ok(text) => (extract_confidence(&text), true),
            Err(_) => (StructuredReply::apology(phase), false),
        }
    }

    fn lost_call(author: &Expert) -> GatewayError {
        GatewayError::Other {
            backend: author.name().to_string(),
            message: "generation task did not complete".to_string(),
        }
    }

    fn record(
        &mut self,
        phase: Option<&Phase>,
        entry: TranscriptEntry,
        progress: &dyn ProgressNotifier,
    ) {
        self.transcript.push(entry);
        if let Some(entry) = self.transcript.entries().last() {
            progress.on_entry(phase, entry);
        }
    }
}
