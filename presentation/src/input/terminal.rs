//! Terminal question input
//!
//! Lines are read on a dedicated OS thread and handed over through a channel.
//! A blocking read on that thread never holds up runtime shutdown, so the
//! process can exit while a prompt is still waiting (e.g. on Ctrl-C).

use async_trait::async_trait;
use council_application::{InputError, QuestionSource};
use std::io::{self, BufRead, BufReader, Write};
use tokio::sync::mpsc;

const PROMPT: &str = "Enter your question (or press Enter to finish): ";

/// Reads one line per round, prompting on stdout
///
/// End of input reads as a blank line, which ends the session.
pub struct TerminalQuestionSource {
    lines: mpsc::Receiver<io::Result<String>>,
}

impl TerminalQuestionSource {
    pub fn stdin() -> Self {
        Self::from_reader(BufReader::new(io::stdin()))
    }

    /// Serve lines from any blocking reader, read on a background thread
    pub fn from_reader<R: BufRead + Send + 'static>(reader: R) -> Self {
        let (tx, rx) = mpsc::channel(1);
        std::thread::spawn(move || read_lines(reader, tx));
        Self { lines: rx }
    }
}

/// Forward lines until EOF, a read error, or the receiving side is gone
fn read_lines<R: BufRead>(mut reader: R, tx: mpsc::Sender<io::Result<String>>) {
    loop {
        let mut line = String::new();
        let item = match reader.read_line(&mut line) {
            Ok(0) => return,
            Ok(_) => Ok(line),
            Err(e) => Err(e),
        };
        let failed = item.is_err();
        if tx.blocking_send(item).is_err() || failed {
            return;
        }
    }
}

#[async_trait]
impl QuestionSource for TerminalQuestionSource {
    async fn read_question(&mut self, _round: usize) -> Result<String, InputError> {
        {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", PROMPT)?;
            stdout.flush()?;
        }

        match self.lines.recv().await {
            Some(Ok(line)) => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
            Some(Err(e)) => Err(InputError::Io(e)),
            // Reader thread finished: end of input
            None => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::sync::mpsc as std_mpsc;
    use std::time::Duration;

    /// Blocking reader fed chunk by chunk from the test
    struct FedReader {
        chunks: std_mpsc::Receiver<Vec<u8>>,
        pending: Vec<u8>,
    }

    impl Read for FedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pending.is_empty() {
                match self.chunks.recv() {
                    Ok(chunk) => self.pending = chunk,
                    Err(_) => return Ok(0),
                }
            }
            let n = buf.len().min(self.pending.len());
            buf[..n].copy_from_slice(&self.pending[..n]);
            self.pending.drain(..n);
            Ok(n)
        }
    }

    #[tokio::test]
    async fn test_reads_lines_then_blank_on_eof() {
        let mut source = TerminalQuestionSource::from_reader(io::Cursor::new(
            b"What is Rust?\r\n\nlast".to_vec(),
        ));

        assert_eq!(source.read_question(1).await.unwrap(), "What is Rust?");
        assert_eq!(source.read_question(2).await.unwrap(), "");
        assert_eq!(source.read_question(3).await.unwrap(), "last");
        assert_eq!(source.read_question(4).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_pending_read_can_be_abandoned() {
        let (feed, chunks) = std_mpsc::channel();
        let mut source = TerminalQuestionSource::from_reader(BufReader::new(FedReader {
            chunks,
            pending: Vec::new(),
        }));

        // Nothing typed yet: the wait is cancellable instead of pinning the runtime.
        let waited = tokio::time::timeout(Duration::from_millis(50), source.read_question(1)).await;
        assert!(waited.is_err());

        feed.send(b"late question\n".to_vec()).unwrap();
        assert_eq!(source.read_question(1).await.unwrap(), "late question");

        drop(feed);
        assert_eq!(source.read_question(2).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_source_can_be_dropped_while_reader_blocks() {
        let (_feed, chunks) = std_mpsc::channel::<Vec<u8>>();
        let mut source = TerminalQuestionSource::from_reader(BufReader::new(FedReader {
            chunks,
            pending: Vec::new(),
        }));

        let waited = tokio::time::timeout(Duration::from_millis(20), source.read_question(1)).await;
        assert!(waited.is_err());
        // The reader thread is still blocked; dropping the source must not wait for it.
        drop(source);
    }
}
