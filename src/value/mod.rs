//! Value Module
//!
//! Typed values carried by telemetry records.
//!
//! ## Type Tags
//!
//! ```text
//! ┌──────┬────────┬───────┬──────────────────────────────┐
//! │ Tag  │ Type   │ Width │ Decoded as                   │
//! ├──────┼────────┼───────┼──────────────────────────────┤
//! │ 0x01 │ u8     │   1   │ Unsigned                     │
//! │ 0x02 │ u16    │   2   │ Unsigned                     │
//! │ 0x03 │ u32    │   4   │ Unsigned                     │
//! │ 0x04 │ u64    │   8   │ Unsigned                     │
//! │ 0x11 │ i8     │   1   │ Signed                       │
//! │ 0x12 │ i16    │   2   │ Signed                       │
//! │ 0x13 │ i32    │   4   │ Signed                       │
//! │ 0x14 │ i64    │   8   │ Signed                       │
//! │ 0x15 │ float  │   4   │ Real (i32 / 1000)            │
//! │ 0x16 │ double │   8   │ Real (i64 / 1000)            │
//! │ 0x20 │ string │   8   │ Text (8 Latin-1 characters)  │
//! └──────┴────────┴───────┴──────────────────────────────┘
//! ```
//!
//! All integers are little-endian.

pub mod primitive;
mod tag;

pub use tag::{resolve, TypeSpec, TypeTag};

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::status::StatusCode;

/// Divisor applied to the raw integer of a fixed-point real
pub const FIXED_POINT_SCALE: i64 = 1000;

// =============================================================================
// Fixed-point reals
// =============================================================================

/// A real number stored as an integer count of thousandths
///
/// Kept as the raw integer so that values decoded from the wire are exact;
/// `to_f64` is only used at the edges (JSON, comparisons in tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedPoint {
    raw: i64,
}

impl FixedPoint {
    /// Wrap a raw count of thousandths
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    /// Nearest fixed-point value to `value` (saturating at the i64 range)
    ///
    /// Rounds to thousandths, so a later `trunc` works on the rounded value:
    /// 255.9996 becomes 256.000 and truncates to 256.
    pub fn from_f64(value: f64) -> Self {
        Self {
            raw: (value * FIXED_POINT_SCALE as f64).round() as i64,
        }
    }

    /// Raw count of thousandths
    pub const fn raw(self) -> i64 {
        self.raw
    }

    /// Integer part, truncated toward zero
    pub const fn trunc(self) -> i64 {
        self.raw / FIXED_POINT_SCALE
    }

    pub fn to_f64(self) -> f64 {
        self.raw as f64 / FIXED_POINT_SCALE as f64
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int = self.raw / FIXED_POINT_SCALE;
        let frac = (self.raw % FIXED_POINT_SCALE).unsigned_abs();
        if frac == 0 {
            return write!(f, "{}", int);
        }

        // -0.5 has a zero integer part, so the sign has to come from raw
        let sign = if self.raw < 0 && int == 0 { "-" } else { "" };
        let digits = format!("{:03}", frac);
        write!(f, "{}{}.{}", sign, int, digits.trim_end_matches('0'))
    }
}

impl Serialize for FixedPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

// =============================================================================
// Values
// =============================================================================

/// A single decoded (or to-be-encoded) measurement value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Unsigned integer (tags 0x01..=0x04)
    Unsigned(u64),

    /// Signed integer (tags 0x11..=0x14)
    Signed(i64),

    /// Fixed-point real (tags 0x15, 0x16)
    Real(FixedPoint),

    /// Fixed-length text (tag 0x20), or free text when encoding
    Text(String),

    /// Status text substituted for the value of the status field
    Status(StatusCode),
}

impl Value {
    /// Integer value if this is an integer that fits in u64
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Unsigned(v) => Some(*v),
            Value::Signed(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unsigned(v) => write!(f, "{}", v),
            Value::Signed(v) => write!(f, "{}", v),
            Value::Real(v) => write!(f, "{}", v),
            Value::Text(s) => f.write_str(s),
            Value::Status(code) => write!(f, "{}", code),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(<$target>::from(v))
                }
            }
        )+
    };
}

impl_from_int!(Unsigned, u64, u8, u16, u32, u64);
impl_from_int!(Signed, i64, i8, i16, i32, i64);

impl From<FixedPoint> for Value {
    fn from(v: FixedPoint) -> Self {
        Value::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<StatusCode> for Value {
    fn from(v: StatusCode) -> Self {
        Value::Status(v)
    }
}

// -----------------------------------------------------------------------------
// Serde
// -----------------------------------------------------------------------------

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Unsigned(v) => serializer.serialize_u64(*v),
            Value::Signed(v) => serializer.serialize_i64(*v),
            Value::Real(v) => v.serialize(serializer),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Status(code) => serializer.collect_str(code),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Unsigned(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(match u64::try_from(v) {
            Ok(u) => Value::Unsigned(u),
            Err(_) => Value::Signed(v),
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        if !v.is_finite() {
            return Err(E::custom("non-finite number"));
        }
        Ok(Value::Real(FixedPoint::from_f64(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::Text(v))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}
