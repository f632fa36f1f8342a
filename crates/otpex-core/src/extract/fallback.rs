//! Seam for an external fallback candidate producer.
//!
//! The original system could consult a numeric-entity recognizer when
//! pattern matching came up short of context. That producer stays a
//! black box here: it hands back digit strings, nothing more, and its
//! failure is never fatal to an extraction.

use crate::error::FallbackError;
use crate::models::{Candidate, ExtractionMethod};

/// An external source of additional OTP candidates.
///
/// Implementations may do I/O or model inference internally; latency
/// and timeout handling are their own concern.
pub trait FallbackProducer: Send + Sync {
    /// Propose digit-string candidates for the given message text.
    fn produce(&self, text: &str) -> Result<Vec<String>, FallbackError>;
}

/// Convert producer output into pool candidates.
///
/// Out-of-range or non-digit strings are discarded. Offsets resolve to
/// the first occurrence of the value in the text, 0 when the producer
/// invented a value absent from the message.
pub fn merge_fallback_values(
    values: Vec<String>,
    text: &str,
    min_length: usize,
    max_length: usize,
) -> Vec<Candidate> {
    values
        .into_iter()
        .filter(|v| {
            v.len() >= min_length
                && v.len() <= max_length
                && v.bytes().all(|b| b.is_ascii_digit())
        })
        .map(|value| {
            let offset = text.find(&value).unwrap_or(0);
            Candidate {
                value,
                pattern_id: None,
                offset,
                origin: ExtractionMethod::Fallback,
            }
        })
        .collect()
}
