//! Data models for OTP extraction results and configuration.

pub mod config;
pub mod result;

pub use config::{ExtractorConfig, ScoringConfig};
pub use result::{
    Candidate, ExtractionMethod, ExtractionResult, ScoredCandidate, SignalTag,
};
