//! The ordered pattern set used to propose OTP candidates.
//!
//! All patterns always run; later, more specific patterns exist to add
//! highly-confident candidates, not to suppress the generic one. The
//! scorer, not pattern precedence, determines the winner.

use lazy_static::lazy_static;
use regex::Regex;

/// How to obtain the digit string from a pattern match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureRule {
    /// The whole match is the code.
    WholeMatch,
    /// The first captured group is the code.
    FirstGroup,
}

/// A single ordered matcher in the pattern set.
#[derive(Debug)]
pub struct OtpPattern {
    /// Compiled case-insensitive regex.
    pub regex: Regex,
    /// Which part of a match carries the digit string.
    pub capture: CaptureRule,
}

/// The ordered, immutable set of OTP matchers.
///
/// Compiled once per process and shared read-only across threads.
#[derive(Debug)]
pub struct PatternSet {
    patterns: Vec<OtpPattern>,
}

impl PatternSet {
    fn with_defaults() -> Self {
        use CaptureRule::{FirstGroup, WholeMatch};

        let defs: [(&str, CaptureRule); 7] = [
            // Bare run of 4-8 digits, unconstrained context.
            (r"\b\d{4,8}\b", WholeMatch),
            // Keyword-prefixed code: "code: 123456", "OTP 4821".
            (r"(?i)(?:code|otp|pin|verify)[:\s-]*(\d{4,8})", FirstGroup),
            // Keyword-suffixed code: "123456 is your code".
            (r"(?i)(\d{4,8})[\s-]*(?:is|your|code|otp|pin)", FirstGroup),
            // "your code 123456" phrasing.
            (r"(?i)your[\s-]*(?:code|otp|pin)[\s-]*(\d{4,8})", FirstGroup),
            // Validity-qualified 6-digit code: "123456 valid for".
            (r"(?i)(\d{6})\s*(?:valid|expires)", FirstGroup),
            // Confirmation-qualified code.
            (r"(?i)confirmation[:\s]*(\d{4,8})", FirstGroup),
            // Count-qualified short code: "4821 digit code".
            (r"(?i)(\d{4})\s*(?:digits?|code)", FirstGroup),
        ];

        let patterns = defs
            .iter()
            .map(|(source, capture)| OtpPattern {
                // The sources above are fixed literals; compilation
                // cannot fail at runtime.
                regex: Regex::new(source).unwrap(),
                capture: *capture,
            })
            .collect();

        Self { patterns }
    }

    /// Iterate patterns in precedence order with their stable ids.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &OtpPattern)> {
        self.patterns.iter().enumerate()
    }

    /// Number of patterns in the set.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the set is empty (never true for the default set).
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

lazy_static! {
    /// Process-wide compiled pattern set.
    pub static ref OTP_PATTERNS: PatternSet = PatternSet::with_defaults();

    /// A 3+-digit run immediately followed by a validity keyword, used
    /// by the scorer's validity-context signal.
    pub static ref VALIDITY_CONTEXT: Regex =
        Regex::new(r"(?i)\d{3,}(?:valid|expires)").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_set_has_seven_patterns() {
        assert_eq!(OTP_PATTERNS.len(), 7);
        assert!(!OTP_PATTERNS.is_empty());
    }

    #[test]
    fn test_bare_digit_run_is_whole_match() {
        let (id, pattern) = OTP_PATTERNS.iter().next().unwrap();
        assert_eq!(id, 0);
        assert_eq!(pattern.capture, CaptureRule::WholeMatch);
        assert!(pattern.regex.is_match("482913"));
        assert!(!pattern.regex.is_match("123"));
    }

    #[test]
    fn test_keyword_prefixed_pattern_captures_digits() {
        let (_, pattern) = OTP_PATTERNS.iter().nth(1).unwrap();
        let caps = pattern.regex.captures("Your code: 482913").unwrap();
        assert_eq!(&caps[1], "482913");
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let (_, pattern) = OTP_PATTERNS.iter().nth(1).unwrap();
        assert!(pattern.regex.is_match("OTP 4829"));
        assert!(pattern.regex.is_match("otp 4829"));
    }

    #[test]
    fn test_validity_pattern_is_six_digits_only() {
        let (_, pattern) = OTP_PATTERNS.iter().nth(4).unwrap();
        assert!(pattern.regex.is_match("739482 valid for 10 minutes"));
        let caps = pattern.regex.captures("12345678 expires soon").unwrap();
        // Only the trailing six digits qualify.
        assert_eq!(&caps[1], "345678");
    }

    #[test]
    fn test_validity_context_requires_adjacency() {
        assert!(VALIDITY_CONTEXT.is_match("code 123valid"));
        assert!(!VALIDITY_CONTEXT.is_match("code 123 valid"));
    }
}
