//! Status code lookup
//!
//! Devices report the outcome of their last operation as a small integer in
//! the `ERR` field. The decoder substitutes the human-readable text.
//!
//! - 0: No response
//! - 1: Success
//! - 2: Error
//! - anything else: `Unknown error: <code>`

use std::fmt;

use serde::{Serialize, Serializer};

use crate::value::{Value, FIXED_POINT_SCALE};

/// Decoded status code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusCode {
    NoResponse,
    Success,
    Error,

    /// Any other value, kept as it was rendered
    Unknown(String),
}

impl StatusCode {
    pub fn from_code(code: u64) -> Self {
        match code {
            0 => StatusCode::NoResponse,
            1 => StatusCode::Success,
            2 => StatusCode::Error,
            other => StatusCode::Unknown(other.to_string()),
        }
    }

    /// Status for an arbitrary decoded value
    ///
    /// Reals with no fractional part count as their integer code; anything
    /// else that is not a non-negative integer is unknown.
    pub fn from_value(value: &Value) -> Self {
        let code = match value {
            Value::Real(fp) if fp.raw() % FIXED_POINT_SCALE == 0 => {
                u64::try_from(fp.trunc()).ok()
            }
            other => other.as_u64(),
        };

        match code {
            Some(code) => Self::from_code(code),
            None => StatusCode::Unknown(value.to_string()),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCode::NoResponse => f.write_str("No response"),
            StatusCode::Success => f.write_str("Success"),
            StatusCode::Error => f.write_str("Error"),
            StatusCode::Unknown(code) => write!(f, "Unknown error: {}", code),
        }
    }
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Human-readable text for a status code
pub fn lookup(code: u64) -> String {
    StatusCode::from_code(code).to_string()
}
