//! Confidence scoring for OTP candidates.
//!
//! Four additive/subtractive signals plus an optional validity-context
//! bonus, each independently computable, summed and clamped to [0, 1].

use crate::models::{ScoringConfig, SignalTag};

use super::patterns::VALIDITY_CONTEXT;

/// Computes a bounded confidence score for a candidate digit string
/// against the original message text.
pub struct ConfidenceScorer {
    config: ScoringConfig,
}

impl ConfidenceScorer {
    /// Create a scorer with the canonical default weights.
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }

    /// Create a scorer with explicit weights.
    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score a candidate value, returning only the number.
    pub fn score(&self, text: &str, value: &str) -> f32 {
        self.score_with_signals(text, value).0
    }

    /// Score a candidate value and report which signals applied.
    ///
    /// Must be called with the original, unmodified text; the position
    /// signal depends on exact offsets.
    pub fn score_with_signals(&self, text: &str, value: &str) -> (f32, Vec<SignalTag>) {
        let mut score = 0.0f32;
        let mut signals = Vec::new();
        let text_lower = text.to_lowercase();

        // Keyword signal: each configured keyword counts once when
        // present anywhere in the message.
        let present = self
            .config
            .keywords
            .iter()
            .filter(|k| text_lower.contains(k.as_str()))
            .count();
        if present > 0 {
            score += (present as f32 * self.config.keyword_weight).min(self.config.keyword_cap);
            signals.push(SignalTag::Keyword);
        }

        // Position signal: boilerplate and footer numbers cluster at
        // the edges of a message, so reward mid-message placement.
        if let Some(pos) = text_lower.find(value) {
            let end = pos + value.len();
            if pos > self.config.position_leading_margin
                && end + self.config.position_trailing_margin < text_lower.len()
            {
                score += self.config.position_bonus;
                signals.push(SignalTag::Position);
            }
        }

        // Length signal: 4 and 6 are the common real-world OTP lengths.
        if self.config.preferred_lengths.contains(&value.len()) {
            score += self.config.length_bonus;
            signals.push(SignalTag::Length);
        }

        // Repeated-digit penalty: near-constant runs like "000000" are
        // placeholders, not codes.
        if distinct_digits(value) < self.config.min_distinct_digits {
            score -= self.config.repeated_digit_penalty;
            signals.push(SignalTag::RepeatedDigit);
        }

        // Validity-context signal: the message states an expiry.
        if VALIDITY_CONTEXT.is_match(&text_lower) {
            score += self.config.validity_bonus;
            signals.push(SignalTag::ValidityContext);
        }

        (score.clamp(0.0, 1.0), signals)
    }
}

impl Default for ConfidenceScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn distinct_digits(value: &str) -> usize {
    let mut seen = [false; 10];
    for b in value.bytes().filter(u8::is_ascii_digit) {
        seen[usize::from(b - b'0')] = true;
    }
    seen.iter().filter(|s| **s).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn score(text: &str, value: &str) -> f32 {
        ConfidenceScorer::new().score(text, value)
    }

    #[test]
    fn test_bare_code_scores_low() {
        // No keywords, no position room, only the length bonus.
        assert_eq!(score("482913", "482913"), 0.2);
    }

    #[test]
    fn test_keyword_boost_ordering() {
        let bare = score("482913", "482913");
        let rich = score(
            "Your verification code is 482913, please confirm",
            "482913",
        );
        assert!(rich > bare);
    }

    #[test]
    fn test_keyword_contribution_is_capped() {
        // All seven keywords present: 7 * 0.15 capped at 0.4.
        let text = "code otp pin verify confirm sent message 48291365 thanks and goodbye";
        let (score, signals) = ConfidenceScorer::new().score_with_signals(text, "48291365");
        assert!(signals.contains(&SignalTag::Keyword));
        // 0.4 keyword + 0.25 position, no length bonus for 8 digits.
        assert!((score - 0.65).abs() < 1e-6);
    }

    #[test]
    fn test_position_signal_margins() {
        let scorer = ConfidenceScorer::new();
        // Starts at byte 0: no position bonus.
        let (_, signals) = scorer.score_with_signals("482913 appears at the start here", "482913");
        assert!(!signals.contains(&SignalTag::Position));

        // Mid-message: bonus applies.
        let (_, signals) =
            scorer.score_with_signals("the code 482913 arrives mid message", "482913");
        assert!(signals.contains(&SignalTag::Position));

        // Too close to the end: no bonus.
        let (_, signals) = scorer.score_with_signals("ends with 482913", "482913");
        assert!(!signals.contains(&SignalTag::Position));
    }

    #[test]
    fn test_length_preference() {
        let six = score("your code is 482913, use it soon ok", "482913");
        let eight = score("your code is 48291344, use it soon", "48291344");
        assert!(six > eight);
    }

    #[test]
    fn test_repeated_digit_penalty() {
        let varied = score("your code is 482913, verify now", "482913");
        let repeated = score("your code is 000000, verify now", "000000");
        assert!(repeated < varied);

        let (_, signals) =
            ConfidenceScorer::new().score_with_signals("your code is 000000, verify now", "000000");
        assert!(signals.contains(&SignalTag::RepeatedDigit));
    }

    #[test]
    fn test_two_distinct_digits_escape_penalty() {
        let (_, signals) = ConfidenceScorer::new().score_with_signals("code 121212 sent", "121212");
        assert!(!signals.contains(&SignalTag::RepeatedDigit));
    }

    #[test]
    fn test_validity_context_signal() {
        let scorer = ConfidenceScorer::new();
        let (_, signals) =
            scorer.score_with_signals("Your OTP is 739482, valid for 10 minutes.", "739482");
        // "739482, valid" has intervening characters, so the strict
        // adjacency form does not fire...
        assert!(!signals.contains(&SignalTag::ValidityContext));

        // ...but the adjacent form does.
        let (_, signals) = scorer.score_with_signals("Your OTP 739482valid 10 min", "739482");
        assert!(signals.contains(&SignalTag::ValidityContext));
    }

    #[test]
    fn test_score_is_clamped_to_unit_interval() {
        let scorer = ConfidenceScorer::new();
        // Only penalties apply: clamped at 0, not negative.
        let (score, _) = scorer.score_with_signals("11111111", "11111111");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let scorer = ConfidenceScorer::new();
        let text = "Your verification code is 482913, please confirm";
        assert_eq!(scorer.score(text, "482913"), scorer.score(text, "482913"));
    }
}
