//! Wire format of the `/generate` endpoint

use serde::{Deserialize, Serialize};

/// Request body
#[derive(Debug, Serialize)]
pub(crate) struct GenerateBody<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub max_tokens: u32,
}

/// A whole response object, or one line of a streamed response
#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateChunk {
    #[serde(default)]
    pub response: Option<String>,
}

/// Decode a single (non-streamed) response body
pub(crate) fn decode_single(body: &[u8]) -> Result<String, serde_json::Error> {
    let chunk: GenerateChunk = serde_json::from_slice(body)?;
    Ok(chunk.response.unwrap_or_default())
}

/// Incremental decoder for newline-delimited JSON bodies
///
/// Bytes are buffered until a newline arrives, so a line split across
/// network chunks (or a multi-byte character split across them) decodes once.
#[derive(Debug, Default)]
pub(crate) struct NdjsonDecoder {
    buffer: Vec<u8>,
    text: String,
}

impl NdjsonDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one network chunk, decoding every complete line it finishes
    pub fn feed(&mut self, bytes: &[u8]) -> Result<(), serde_json::Error> {
        self.buffer.extend_from_slice(bytes);
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            self.decode_line(&line)?;
        }
        Ok(())
    }

    /// Decode the trailing partial line (if any) and return the concatenated text
    pub fn finish(mut self) -> Result<String, serde_json::Error> {
        let rest = std::mem::take(&mut self.buffer);
        self.decode_line(&rest)?;
        Ok(self.text)
    }

    fn decode_line(&mut self, line: &[u8]) -> Result<(), serde_json::Error> {
        if line.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }
        let chunk: GenerateChunk = serde_json::from_slice(line)?;
        if let Some(fragment) = chunk.response {
            self.text.push_str(&fragment);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_serialization() {
        let body = GenerateBody {
            model: "gemma2:9b",
            prompt: "Hi",
            max_tokens: 4096,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"model": "gemma2:9b", "prompt": "Hi", "max_tokens": 4096})
        );
    }

    #[test]
    fn test_decode_single() {
        assert_eq!(decode_single(br#"{"response":"Paris"}"#).unwrap(), "Paris");
        assert_eq!(decode_single(br#"{"done":true}"#).unwrap(), "");
        assert!(decode_single(b"not json").is_err());
    }

    #[test]
    fn test_ndjson_lines_split_across_chunks() {
        let mut decoder = NdjsonDecoder::new();
        decoder.feed(br#"{"response":"Hel"#).unwrap();
        decoder.feed(b"lo\"}\n{\"response\":\" wor").unwrap();
        decoder.feed(b"ld\"}\n\n{\"done\":true}\n").unwrap();
        assert_eq!(decoder.finish().unwrap(), "Hello world");
    }

    #[test]
    fn test_ndjson_trailing_line_without_newline() {
        let mut decoder = NdjsonDecoder::new();
        decoder.feed(b"{\"response\":\"a\"}\n{\"response\":\"b\"}").unwrap();
        assert_eq!(decoder.finish().unwrap(), "ab");
    }

    #[test]
    fn test_ndjson_multibyte_split() {
        let encoded = "{\"response\":\"caf\u{e9}\"}\n".as_bytes();
        let split = encoded.len() - 4;
        let mut decoder = NdjsonDecoder::new();
        decoder.feed(&encoded[..split]).unwrap();
        decoder.feed(&encoded[split..]).unwrap();
        assert_eq!(decoder.finish().unwrap(), "café");
    }

    #[test]
    fn test_ndjson_rejects_garbage_line() {
        let mut decoder = NdjsonDecoder::new();
        assert!(decoder.feed(b"{\"response\":\"a\"}\n<html>\n").is_err());
    }
}
