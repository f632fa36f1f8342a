//! Candidate generation: applying the pattern set to raw message text.

use tracing::trace;

use crate::models::{Candidate, ExtractionMethod};

use super::patterns::{CaptureRule, PatternSet};

/// Generates raw OTP candidates from message text.
///
/// Pure function of the text and the pattern set: every pattern runs,
/// every non-overlapping match is considered, and candidates come out
/// in pattern order then left-to-right. Duplicate values are kept;
/// deduplication is a selection concern.
pub struct CandidateGenerator<'a> {
    patterns: &'a PatternSet,
    min_length: usize,
    max_length: usize,
}

impl<'a> CandidateGenerator<'a> {
    /// Create a generator over the given pattern set with the default
    /// 4-8 digit length constraint.
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self {
            patterns,
            min_length: 4,
            max_length: 8,
        }
    }

    /// Set the accepted candidate length range.
    pub fn with_length_range(mut self, min: usize, max: usize) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Run every pattern over the text and collect accepted candidates.
    pub fn generate(&self, text: &str) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for (pattern_id, pattern) in self.patterns.iter() {
            for caps in pattern.regex.captures_iter(text) {
                let matched = match pattern.capture {
                    CaptureRule::WholeMatch => caps.get(0),
                    CaptureRule::FirstGroup => caps.get(1),
                };

                let Some(matched) = matched else { continue };
                let value = matched.as_str();

                if !self.accepts(value) {
                    continue;
                }

                trace!(pattern_id, value, offset = matched.start(), "candidate");
                candidates.push(Candidate {
                    value: value.to_string(),
                    pattern_id: Some(pattern_id),
                    offset: matched.start(),
                    origin: ExtractionMethod::Pattern,
                });
            }
        }

        candidates
    }

    fn accepts(&self, value: &str) -> bool {
        value.len() >= self.min_length
            && value.len() <= self.max_length
            && value.bytes().all(|b| b.is_ascii_digit())
    }
}
