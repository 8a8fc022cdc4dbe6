//! Transcript: the ordered, append-only record of a session

use super::reply::StructuredReply;
use super::round::{Critique, ExpertReply};
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// One line of the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TranscriptEntry {
    /// The user's question
    User { question: Question },
    /// An expert's initial answer
    Answer {
        expert: String,
        reply: StructuredReply,
        /// False when the call failed and `reply` is the apology
        generated: bool,
    },
    /// The critic's evaluation of another expert's answer
    Critique {
        critic: String,
        target: String,
        reply: StructuredReply,
        generated: bool,
    },
    /// The critic's synthesized final answer
    FinalAnswer {
        critic: String,
        reply: StructuredReply,
        generated: bool,
    },
}

impl TranscriptEntry {
    pub fn user(question: &Question) -> Self {
        TranscriptEntry::User {
            question: question.clone(),
        }
    }

    pub fn answer(answer: &ExpertReply) -> Self {
        TranscriptEntry::Answer {
            expert: answer.expert.clone(),
            reply: answer.reply.clone(),
            generated: answer.generated,
        }
    }

    pub fn critique(critique: &Critique) -> Self {
        TranscriptEntry::Critique {
            critic: critique.critic.clone(),
            target: critique.target.clone(),
            reply: critique.reply.clone(),
            generated: critique.generated,
        }
    }

    pub fn final_answer(answer: &ExpertReply) -> Self {
        TranscriptEntry::FinalAnswer {
            critic: answer.expert.clone(),
            reply: answer.reply.clone(),
            generated: answer.generated,
        }
    }

    /// The structured reply carried by this entry, if any
    pub fn reply(&self) -> Option<&StructuredReply> {
        match self {
            TranscriptEntry::User { .. } => None,
            TranscriptEntry::Answer { reply, .. }
            | TranscriptEntry::Critique { reply, .. }
            | TranscriptEntry::FinalAnswer { reply, .. } => Some(reply),
        }
    }

    /// Whether the entry holds backend output; false for a failed call's apology.
    /// The user's question counts as generated.
    pub fn is_generated(&self) -> bool {
        match self {
            TranscriptEntry::User { .. } => true,
            TranscriptEntry::Answer { generated, .. }
            | TranscriptEntry::Critique { generated, .. }
            | TranscriptEntry::FinalAnswer { generated, .. } => *generated,
        }
    }
}

impl std::fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscriptEntry::User { question } => write!(f, "User: {}", question),
            TranscriptEntry::Answer { expert, reply, .. } => write!(
                f,
                "{} (Confidence {}): {}",
                expert, reply.confidence, reply.text
            ),
            TranscriptEntry::Critique {
                critic,
                target,
                reply,
                ..
            } => write!(
                f,
                "{} critiques {} (Confidence {}): {}",
                critic, target, reply.confidence, reply.text
            ),
            TranscriptEntry::FinalAnswer { critic, reply, .. } => write!(
                f,
                "Final answer from {} (Confidence {}): {}",
                critic, reply.confidence, reply.text
            ),
        }
    }
}

/// Ordered, append-only sequence of entries across all rounds
///
/// Entries are never removed; they live as long as the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render every entry as one line each
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}
