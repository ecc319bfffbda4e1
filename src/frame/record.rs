//! Record definitions
//!
//! A record is one named entry in an uplink frame.

use crate::error::CodecError;
use crate::value::Value;

/// Suffix of the minimum key of a multi record
pub const MIN_SUFFIX: &str = "_min";

/// Suffix of the maximum key of a multi record
pub const MAX_SUFFIX: &str = "_max";

/// Record layout selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RecordKind {
    Single = 0x01,
    Multi = 0x02,
}

impl TryFrom<u8> for RecordKind {
    type Error = CodecError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x01 => Ok(RecordKind::Single),
            0x02 => Ok(RecordKind::Multi),
            other => Err(CodecError::UnknownRecordKind(other)),
        }
    }
}

/// The values carried by a record
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    /// One instantaneous value
    Single(Value),

    /// Aggregate over a measurement interval
    Multi { mean: Value, min: Value, max: Value },
}

/// A decoded record
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Measurement key, already normalised
    pub name: String,

    pub reading: Reading,
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self.reading {
            Reading::Single(_) => RecordKind::Single,
            Reading::Multi { .. } => RecordKind::Multi,
        }
    }

    /// Flatten into mapping entries: `name`, or `name`, `name_min`, `name_max`
    pub fn into_entries(self) -> Vec<(String, Value)> {
        match self.reading {
            Reading::Single(value) => vec![(self.name, value)],
            Reading::Multi { mean, min, max } => {
                let min_key = format!("{}{}", self.name, MIN_SUFFIX);
                let max_key = format!("{}{}", self.name, MAX_SUFFIX);
                vec![(self.name, mean), (min_key, min), (max_key, max)]
            }
        }
    }
}
