//! Confidence extraction from free-form model replies.
//!
//! Models are asked to self-report a confidence level from 1 to 5, but they
//! do so in whatever shape they like: `Confidence: 4`, `confidence 5`,
//! `CONFIDENCE:3` at the start, middle or end of the reply. This is pure
//! text processing with a safe default, no I/O.

use super::reply::StructuredReply;
use regex::Regex;
use std::sync::LazyLock;

/// Confidence assumed when a reply carries no usable marker
pub const DEFAULT_CONFIDENCE: u32 = 3;

/// Confidence assigned to replies that could not be generated at all
pub const FAILURE_CONFIDENCE: u32 = 1;

static CONFIDENCE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)confidence[:\s]*([0-9]+)").unwrap());

/// Split a raw reply into a confidence level and the cleaned text.
///
/// The first `confidence` marker (any case, optionally followed by colons
/// and/or whitespace, then ASCII digits) supplies the confidence. Every
/// marker-plus-digits span is removed from the text, which is then trimmed.
/// Without a marker the confidence is [`DEFAULT_CONFIDENCE`] and the text is
/// only trimmed. Values are not clamped; a digit run too large to represent
/// falls back to the default.
///
/// # Examples
///
/// ```
/// use council_domain::extract_confidence;
///
/// let reply = extract_confidence("Paris is the capital. Confidence: 5");
/// assert_eq!(reply.confidence, 5);
/// assert_eq!(reply.text, "Paris is the capital.");
///
/// let reply = extract_confidence("  No idea, honestly.  ");
/// assert_eq!(reply.confidence, 3);
/// assert_eq!(reply.text, "No idea, honestly.");
/// ```
pub fn extract_confidence(raw: &str) -> StructuredReply {
    let Some(captures) = CONFIDENCE_MARKER.captures(raw) else {
        return StructuredReply::new(DEFAULT_CONFIDENCE, raw.trim());
    };

    let confidence = captures
        .get(1)
        .and_then(|digits| digits.as_str().parse::<u32>().ok())
        .unwrap_or(DEFAULT_CONFIDENCE);

    let cleaned = CONFIDENCE_MARKER.replace_all(raw, "");
    StructuredReply::new(confidence, cleaned.trim())
}
