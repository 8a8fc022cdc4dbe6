//! Prompt templates for the deliberation flow

use crate::deliberation::round::{Critique, ExpertReply};

/// Templates for generating prompts at each phase
///
/// Every prompt ends by asking for a confidence level from 1 to 5 so the
/// reply can be run through [`extract_confidence`](crate::extract_confidence).
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for the initial collection phase
    pub fn initial_query(question: &str) -> String {
        format!(
            "Please answer the following question accurately and concisely. \
             Also, indicate your confidence level from 1 to 5.\n\
             Question: {}\n\
             Answer with confidence level:",
            question
        )
    }

    /// Prompt asking the critic to evaluate one expert's answer
    pub fn critique_prompt(question: &str, expert: &str, answer: &str) -> String {
        format!(
            "Question: {question}\n\
             Expert {expert}'s answer: {answer}\n\
             Task: Evaluate Expert {expert}'s answer for inaccuracies, omissions, or possible improvements. \
             Also, indicate your confidence level in the critique from 1 to 5.\n\
             Critique with confidence level:"
        )
    }

    /// Prompt asking the critic for the final answer
    pub fn synthesis_prompt(
        question: &str,
        answers: &[ExpertReply],
        critic: &str,
        critiques: &[Critique],
    ) -> String {
        let responses = answers
            .iter()
            .map(|a| {
                format!(
                    "{} (Confidence {}): {}",
                    a.expert, a.reply.confidence, a.reply.text
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let combined_critiques = critiques
            .iter()
            .map(|c| {
                format!(
                    "Critique for {}: {} (Confidence {})",
                    c.target, c.reply.text, c.reply.confidence
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Question: {question}\n\
             Initial expert responses:\n\
             {responses}\n\
             Critiques by {critic}:\n\
             {combined_critiques}\n\
             Task: Based on the provided critiques, formulate the most accurate and comprehensive answer to the question. \
             Indicate your confidence level from 1 to 5.\n\
             Final answer with confidence level:"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deliberation::reply::StructuredReply;

    #[test]
    fn test_initial_query_format() {
        let prompt = PromptTemplate::initial_query("What is Rust?");
        assert!(prompt.contains("Question: What is Rust?"));
        assert!(prompt.contains("confidence level from 1 to 5"));
    }

    #[test]
    fn test_critique_prompt_names_the_expert() {
        let prompt = PromptTemplate::critique_prompt("What is Rust?", "hermes3", "A language.");
        assert!(prompt.contains("Expert hermes3's answer: A language."));
        assert!(prompt.contains("Evaluate Expert hermes3's answer"));
    }

    #[test]
    fn test_synthesis_prompt_lists_answers_and_critiques() {
        let answers = vec![
            ExpertReply::new("e1", StructuredReply::new(4, "A"), true),
            ExpertReply::new("e2", StructuredReply::new(2, "B"), true),
        ];
        let critiques = vec![Critique::new("e1", "e2", StructuredReply::new(3, "Weak."), true)];

        let prompt = PromptTemplate::synthesis_prompt("Q?", &answers, "e1", &critiques);
        assert!(prompt.contains("e1 (Confidence 4): A\ne2 (Confidence 2): B"));
        assert!(prompt.contains("Critiques by e1:\nCritique for e2: Weak. (Confidence 3)"));
        assert!(prompt.ends_with("Final answer with confidence level:"));
    }
}
