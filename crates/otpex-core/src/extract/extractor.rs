//! The extraction façade tying patterns, scoring and selection
//! together.

use tracing::{debug, warn};

use crate::models::{ExtractionResult, ExtractorConfig};

use super::fallback::{merge_fallback_values, FallbackProducer};
use super::generator::CandidateGenerator;
use super::patterns::OTP_PATTERNS;
use super::scorer::ConfidenceScorer;
use super::selector::select;

/// OTP extractor combining pattern candidates with an optional
/// fallback producer.
pub struct OtpExtractor {
    config: ExtractorConfig,
    scorer: ConfidenceScorer,
    fallback: Option<Box<dyn FallbackProducer>>,
}

impl OtpExtractor {
    /// Create an extractor with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create an extractor with explicit configuration.
    pub fn with_config(config: ExtractorConfig) -> Self {
        let scorer = ConfidenceScorer::with_config(config.scoring.clone());
        Self {
            config,
            scorer,
            fallback: None,
        }
    }

    /// Attach a fallback candidate producer.
    pub fn with_fallback(mut self, producer: Box<dyn FallbackProducer>) -> Self {
        self.fallback = Some(producer);
        self
    }

    /// Extract the best OTP candidate from a message body.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        self.run(text, false)
    }

    /// Extract with the full ranked candidate list for auditing.
    pub fn extract_detailed(&self, text: &str) -> ExtractionResult {
        self.run(text, true)
    }

    fn run(&self, text: &str, with_audit: bool) -> ExtractionResult {
        let generator = CandidateGenerator::new(&OTP_PATTERNS)
            .with_length_range(self.config.min_otp_length, self.config.max_otp_length);
        let mut candidates = generator.generate(text);

        debug!(
            pattern_candidates = candidates.len(),
            text_len = text.len(),
            "generated candidates"
        );

        if let Some(producer) = &self.fallback {
            match producer.produce(text) {
                Ok(values) => {
                    candidates.extend(merge_fallback_values(
                        values,
                        text,
                        self.config.min_otp_length,
                        self.config.max_otp_length,
                    ));
                }
                Err(err) => {
                    // Degrade to pattern-only candidates.
                    warn!("fallback producer failed: {err}");
                }
            }
        }

        select(candidates, text, &self.scorer, with_audit)
    }
}

impl Default for OtpExtractor {
    fn default() -> Self {
        Self::new()
    }
}
