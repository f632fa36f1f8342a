//! Result types produced by the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Where an extracted value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// Matched by one of the built-in text patterns.
    Pattern,
    /// Contributed by an external fallback candidate producer.
    Fallback,
    /// No candidate was found.
    None,
}

impl Default for ExtractionMethod {
    fn default() -> Self {
        Self::None
    }
}

/// A raw digit-string candidate before scoring.
///
/// Invariant: `value` consists only of ASCII digits and its length is
/// in [4, 8]. The generator enforces this before constructing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The digit string proposed as an OTP.
    pub value: String,

    /// Index of the matching pattern in the pattern set.
    /// `None` for fallback-produced candidates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_id: Option<usize>,

    /// Byte offset of the match start in the source text.
    pub offset: usize,

    /// Which producer contributed this candidate.
    pub origin: ExtractionMethod,
}

/// Contextual signals that contributed to a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalTag {
    /// Code-indicating keywords present in the message.
    Keyword,
    /// Candidate sits mid-message rather than at an edge.
    Position,
    /// Candidate has one of the two common OTP lengths (4 or 6).
    Length,
    /// Candidate is a near-constant digit run (penalty).
    RepeatedDigit,
    /// Message states an expiry for the code.
    ValidityContext,
}

/// A candidate together with its computed confidence.
///
/// Invariant: `0.0 <= confidence <= 1.0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// The scored candidate.
    #[serde(flatten)]
    pub candidate: Candidate,

    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,

    /// Signals that contributed to the score.
    pub signals: Vec<SignalTag>,
}

/// Outcome of a single extraction call.
///
/// Serializes to a flat record with fields `otp`, `confidence`,
/// `method` and (when requested) `all_candidates`, which the web layer
/// returns directly as a JSON body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Best OTP candidate, absent when nothing matched.
    pub otp: Option<String>,

    /// Confidence of the best candidate, rounded to 2 decimal places.
    /// Always 0.0 when `otp` is absent.
    pub confidence: f32,

    /// How the winning candidate was produced.
    pub method: ExtractionMethod,

    /// Full ranked candidate list for auditing, populated only by
    /// detailed extraction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_candidates: Option<Vec<ScoredCandidate>>,
}

impl ExtractionResult {
    /// The result returned when no candidate exists.
    pub fn none() -> Self {
        Self {
            otp: None,
            confidence: 0.0,
            method: ExtractionMethod::None,
            all_candidates: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_none_result_shape() {
        let result = ExtractionResult::none();
        assert_eq!(result.otp, None);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.method, ExtractionMethod::None);
        assert!(result.all_candidates.is_none());
    }

    #[test]
    fn test_result_serializes_flat() {
        let result = ExtractionResult {
            otp: Some("739482".to_string()),
            confidence: 0.85,
            method: ExtractionMethod::Pattern,
            all_candidates: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["otp"], "739482");
        assert_eq!(json["method"], "pattern");
        assert!(json.get("all_candidates").is_none());
    }

    #[test]
    fn test_scored_candidate_flattens_candidate_fields() {
        let scored = ScoredCandidate {
            candidate: Candidate {
                value: "1234".to_string(),
                pattern_id: Some(0),
                offset: 3,
                origin: ExtractionMethod::Pattern,
            },
            confidence: 0.4,
            signals: vec![SignalTag::Length],
        };

        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["value"], "1234");
        assert_eq!(json["pattern_id"], 0);
        assert_eq!(json["signals"][0], "length");
    }
}
