//! Error types for the telemetry codec
//!
//! Provides a unified error type for all decode and encode operations.
//! The host-facing entry points never surface these; they degrade to a
//! partial mapping or an empty byte sequence instead.

use thiserror::Error;

/// Result type alias using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;

/// Unified error type for codec operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    // -------------------------------------------------------------------------
    // Decode Errors
    // -------------------------------------------------------------------------
    #[error("Truncated input: need {needed} bytes at offset {offset}, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Invalid type tag: 0x{0:02x}")]
    InvalidTypeTag(u8),

    #[error("Unsupported protocol version: {0}")]
    UnsupportedVersion(u8),

    #[error("Unknown record kind: {0}")]
    UnknownRecordKind(u8),

    // -------------------------------------------------------------------------
    // Encode Errors
    // -------------------------------------------------------------------------
    #[error("No field to encode")]
    NoFields,

    #[error("Too many fields: {0} (exactly one can be encoded)")]
    TooManyFields(usize),

    #[error("Field name too long: {0} characters (max 4)")]
    NameTooLong(usize),

    #[error("Payload too large: {len} bytes (max {max})")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("Character {0:?} does not fit in a single byte")]
    NotLatin1(char),

    // -------------------------------------------------------------------------
    // Input Parsing Errors
    // -------------------------------------------------------------------------
    #[error("Hex error: {0}")]
    Hex(String),

    #[error("JSON error: {0}")]
    Json(String),
}

impl CodecError {
    /// Whether this error came from an encode precondition check
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            CodecError::NoFields
                | CodecError::TooManyFields(_)
                | CodecError::NameTooLong(_)
                | CodecError::PayloadTooLarge { .. }
                | CodecError::NotLatin1(_)
        )
    }
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        CodecError::Hex(err.to_string())
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::Json(err.to_string())
    }
}
