//! Shared error type across rtckey crates.

use thiserror::Error;

/// Caller-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Missing or empty credential material, or crypto setup failure.
    Configuration,
    /// A field exceeds its wire-format bit width.
    ValueOutOfRange,
    /// Truncated buffer, invalid base64, or an overrunning declared length.
    Malformed,
    /// Token version tag is not the supported one.
    UnsupportedVersion,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Configuration => "CONFIGURATION",
            ErrorCode::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
            ErrorCode::Malformed => "MALFORMED",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TokenError>;

/// Unified error type used by core and issuer.
///
/// Messages must never carry the app certificate or raw signature bytes.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("value out of range: {0}")]
    ValueOutOfRange(String),
    #[error("malformed input: {0}")]
    Malformed(String),
    #[error("unsupported token version")]
    UnsupportedVersion,
}

impl TokenError {
    /// Map internal error to a stable caller-facing code.
    pub fn code(&self) -> ErrorCode {
        match self {
            TokenError::Configuration(_) => ErrorCode::Configuration,
            TokenError::ValueOutOfRange(_) => ErrorCode::ValueOutOfRange,
            TokenError::Malformed(_) => ErrorCode::Malformed,
            TokenError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
        }
    }
}
