//! Configuration structures for the extraction pipeline.
//!
//! Every scoring weight lives here as a named field so tuning never
//! requires touching the algorithm's structure.

use serde::{Deserialize, Serialize};

/// Main configuration for the otpex pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Confidence scoring configuration.
    pub scoring: ScoringConfig,

    /// Minimum accepted candidate length.
    pub min_otp_length: usize,

    /// Maximum accepted candidate length.
    pub max_otp_length: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            min_otp_length: 4,
            max_otp_length: 8,
        }
    }
}

/// Weights and thresholds for the confidence scorer.
///
/// The default is the canonical configuration: 7 keywords at 0.15
/// each, capped at 0.4. [`ScoringConfig::extended`] selects the richer
/// keyword list observed in later heuristic revisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Code-indicating keywords counted once each when present.
    pub keywords: Vec<String>,

    /// Score contributed per present keyword.
    pub keyword_weight: f32,

    /// Upper bound on the total keyword contribution.
    pub keyword_cap: f32,

    /// Bonus for a candidate appearing mid-message.
    pub position_bonus: f32,

    /// The match must start strictly after this many bytes.
    pub position_leading_margin: usize,

    /// The match must end strictly before `text_len` minus this.
    pub position_trailing_margin: usize,

    /// Bonus for candidates of a preferred length.
    pub length_bonus: f32,

    /// Candidate lengths that receive the length bonus.
    pub preferred_lengths: Vec<usize>,

    /// Penalty for candidates with too few distinct digits.
    pub repeated_digit_penalty: f32,

    /// Candidates with fewer distinct digits than this are penalized.
    pub min_distinct_digits: usize,

    /// Bonus when the message states an expiry for a digit run.
    pub validity_bonus: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            keywords: ["code", "otp", "pin", "verify", "confirm", "sent", "message"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            keyword_weight: 0.15,
            keyword_cap: 0.4,
            position_bonus: 0.25,
            position_leading_margin: 5,
            position_trailing_margin: 10,
            length_bonus: 0.2,
            preferred_lengths: vec![4, 6],
            repeated_digit_penalty: 0.3,
            min_distinct_digits: 2,
            validity_bonus: 0.15,
        }
    }
}

impl ScoringConfig {
    /// The extended keyword variant: four extra account-related terms
    /// at a lower per-keyword weight with a higher cap.
    pub fn extended() -> Self {
        Self {
            keywords: [
                "code", "otp", "pin", "verify", "confirm", "sent", "message",
                "security", "login", "account", "password",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            keyword_weight: 0.1,
            keyword_cap: 0.5,
            ..Self::default()
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_canonical_variant() {
        let config = ScoringConfig::default();
        assert_eq!(config.keywords.len(), 7);
        assert_eq!(config.keyword_weight, 0.15);
        assert_eq!(config.keyword_cap, 0.4);
    }

    #[test]
    fn test_extended_variant() {
        let config = ScoringConfig::extended();
        assert_eq!(config.keywords.len(), 11);
        assert_eq!(config.keyword_weight, 0.1);
        assert_eq!(config.keyword_cap, 0.5);
        // Shared weights stay at the canonical values.
        assert_eq!(config.position_bonus, 0.25);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = ExtractorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ExtractorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.min_otp_length, 4);
        assert_eq!(parsed.max_otp_length, 8);
        assert_eq!(parsed.scoring.keywords, config.scoring.keywords);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: ExtractorConfig =
            serde_json::from_str(r#"{"min_otp_length": 5}"#).unwrap();
        assert_eq!(parsed.min_otp_length, 5);
        assert_eq!(parsed.max_otp_length, 8);
    }
}
