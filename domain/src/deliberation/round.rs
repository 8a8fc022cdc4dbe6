//! Round record: everything produced for one question

use super::reply::StructuredReply;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// One expert's reply within a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpertReply {
    /// The expert that authored the reply
    pub expert: String,
    pub reply: StructuredReply,
    /// Whether the generation call succeeded (false means `reply` is an apology)
    pub generated: bool,
}

impl ExpertReply {
    pub fn new(expert: impl Into<String>, reply: StructuredReply, generated: bool) -> Self {
        Self {
            expert: expert.into(),
            reply,
            generated,
        }
    }
}

/// The critic's evaluation of one other expert's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Critique {
    /// The critic that authored the critique
    pub critic: String,
    /// The expert whose answer was critiqued
    pub target: String,
    pub reply: StructuredReply,
    pub generated: bool,
}

impl Critique {
    pub fn new(
        critic: impl Into<String>,
        target: impl Into<String>,
        reply: StructuredReply,
        generated: bool,
    ) -> Self {
        Self {
            critic: critic.into(),
            target: target.into(),
            reply,
            generated,
        }
    }
}

/// Complete record of one round (Entity)
///
/// `answers` and `critiques` are in expert registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number within the session
    pub number: usize,
    pub question: Question,
    pub answers: Vec<ExpertReply>,
    pub critiques: Vec<Critique>,
    pub final_answer: ExpertReply,
}

impl RoundRecord {
    /// Look up an initial answer by expert name
    pub fn answer_of(&self, expert: &str) -> Option<&ExpertReply> {
        self.answers.iter().find(|a| a.expert == expert)
    }

    /// Look up the critique of an expert's answer
    pub fn critique_of(&self, expert: &str) -> Option<&Critique> {
        self.critiques.iter().find(|c| c.target == expert)
    }

    /// Number of generation calls that failed this round
    pub fn failed_calls(&self) -> usize {
        self.answers.iter().filter(|a| !a.generated).count()
            + self.critiques.iter().filter(|c| !c.generated).count()
            + usize::from(!self.final_answer.generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deliberation::phase::Phase;

    #[test]
    fn test_lookups_and_failed_calls() {
        let record = RoundRecord {
            number: 1,
            question: Question::parse("Why?").unwrap(),
            answers: vec![
                ExpertReply::new("e1", StructuredReply::new(4, "because"), true),
                ExpertReply::new("e2", StructuredReply::apology(&Phase::Initial), false),
            ],
            critiques: vec![Critique::new(
                "e1",
                "e2",
                StructuredReply::new(3, "no answer given"),
                true,
            )],
            final_answer: ExpertReply::new("e1", StructuredReply::new(5, "because"), true),
        };

        assert_eq!(record.answer_of("e1").unwrap().reply.confidence, 4);
        assert!(record.answer_of("e3").is_none());
        assert_eq!(record.critique_of("e2").unwrap().critic, "e1");
        assert_eq!(record.failed_calls(), 1);
    }
}
