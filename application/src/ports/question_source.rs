//! Question source port
//!
//! The interactive input collaborator: one line of text per round. A blank
//! line ends the session.
//!
//! # Built-in Implementations
//!
//! - [`QueuedQuestions`] - serves a fixed list, then blank lines
//!
//! For terminal input, see `TerminalQuestionSource` in the presentation layer.

use async_trait::async_trait;
use std::collections::VecDeque;
use thiserror::Error;

/// Failure to obtain the next line of input
#[derive(Error, Debug)]
pub enum InputError {
    #[error("I/O error reading input: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for reading the user's question for each round
#[async_trait]
pub trait QuestionSource: Send {
    /// Read the raw line for the given 1-based round
    ///
    /// End of input must be reported as an empty string, not an error.
    async fn read_question(&mut self, round: usize) -> Result<String, InputError>;
}

/// Question source backed by a fixed list of questions
///
/// Used for one-shot invocations and in tests. Once the list is exhausted
/// every read returns an empty line.
#[derive(Debug, Clone, Default)]
pub struct QueuedQuestions {
    queue: VecDeque<String>,
}

impl QueuedQuestions {
    pub fn new<I, S>(questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: questions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

#[async_trait]
impl QuestionSource for QueuedQuestions {
    async fn read_question(&mut self, _round: usize) -> Result<String, InputError> {
        Ok(self.queue.pop_front().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_queue_then_blank() {
        let mut source = QueuedQuestions::new(["first", "second"]);
        assert_eq!(source.read_question(1).await.unwrap(), "first");
        assert_eq!(source.read_question(2).await.unwrap(), "second");
        assert_eq!(source.remaining(), 0);
        assert_eq!(source.read_question(3).await.unwrap(), "");
    }
}
