//! Core library for SMS OTP extraction.
//!
//! This crate provides:
//! - An ordered, process-wide pattern set proposing digit-string
//!   candidates from noisy message text
//! - A tunable confidence scorer combining independent contextual
//!   signals (keywords, position, length, repeated digits, validity)
//! - Deterministic selection of a single best candidate, with an
//!   optional ranked audit list
//! - A seam for an external fallback candidate producer
//!
//! The whole pipeline is a pure, synchronous computation: no I/O, no
//! shared mutable state, safe to call concurrently.

pub mod error;
pub mod extract;
pub mod models;

pub use error::{FallbackError, OtpexError, Result};
pub use extract::{ConfidenceScorer, FallbackProducer, OtpExtractor};
pub use models::{
    Candidate, ExtractionMethod, ExtractionResult, ExtractorConfig, ScoredCandidate,
    ScoringConfig, SignalTag,
};
