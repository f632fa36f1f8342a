//! The extraction-and-scoring engine.
//!
//! Four layers, each depending only on the one before it: the ordered
//! [`patterns::PatternSet`], the [`generator::CandidateGenerator`]
//! that applies it, the [`scorer::ConfidenceScorer`] that ranks
//! candidates, and the [`selector`] that picks one best answer. The
//! [`extractor::OtpExtractor`] façade ties them together and merges in
//! an optional [`fallback::FallbackProducer`].

pub mod extractor;
pub mod fallback;
pub mod generator;
pub mod patterns;
pub mod scorer;
pub mod selector;

pub use extractor::OtpExtractor;
pub use fallback::FallbackProducer;
pub use generator::CandidateGenerator;
pub use patterns::{CaptureRule, OtpPattern, PatternSet, OTP_PATTERNS};
pub use scorer::ConfidenceScorer;
pub use selector::select;
