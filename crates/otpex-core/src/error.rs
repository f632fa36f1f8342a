//! Error types for the otpex-core library.

use thiserror::Error;

/// Main error type for the otpex library.
///
/// Extraction itself is total over its input domain: any string,
/// including the empty string, produces a result rather than an error.
/// The variants here cover the edges around the core (configuration
/// loading and the optional fallback producer).
#[derive(Error, Debug)]
pub enum OtpexError {
    /// Fallback candidate producer error.
    #[error("fallback error: {0}")]
    Fallback(#[from] FallbackError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors reported by an external fallback candidate producer.
///
/// These never abort an extraction; the extractor downgrades them to a
/// warning and continues with pattern-based candidates only.
#[derive(Error, Debug)]
pub enum FallbackError {
    /// The producer is configured but cannot be reached.
    #[error("producer unavailable: {0}")]
    Unavailable(String),

    /// The producer ran but returned an unusable response.
    #[error("producer failed: {0}")]
    Failed(String),
}

/// Result type for the otpex library.
pub type Result<T> = std::result::Result<T, OtpexError>;
