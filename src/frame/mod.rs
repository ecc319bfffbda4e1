//! Frame Module
//!
//! Wire format of a telemetry frame as carried in a LoRaWAN uplink.
//!
//! ## Uplink Frame (decoded)
//! ```text
//! ┌─────────────┬──────────┬──────────┬─────────────────────────────┐
//! │ Version (1) │ Name (4) │ Kind (1) │ Values ...                  │
//! └─────────────┴──────────┴──────────┴─────────────────────────────┘
//!                └────────────── repeated until end of frame ───────┘
//! ```
//!
//! ### Record Kinds
//! - 0x01: SINGLE - one value:    Tag (1) + Value (width)
//! - 0x02: MULTI  - mean/min/max: 3 x (Tag (1) + Value (width))
//!
//! Names are 4 ASCII bytes, NUL padded on the right.
//!
//! ## Downlink Frame (encoded)
//! ```text
//! ┌─────────────┬──────────┬─────────────────────────────┐
//! │ Version (1) │ Name (4) │ Payload (untagged)          │
//! └─────────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! The encoder writes no record kind and no type tag, so its output is not
//! readable by the decoder. The two directions are independent.

mod decoder;
mod encoder;
mod name;
mod record;

pub use decoder::{Decoder, Records};
pub use encoder::Encoder;
pub use name::{decode_name, encode_name};
pub use record::{Reading, Record, RecordKind};

use crate::error::CodecError;

/// Size of the version byte
pub const VERSION_LEN: usize = 1;

/// Size of a record name
pub const NAME_LEN: usize = 4;

/// Version byte + name
pub const HEADER_LEN: usize = VERSION_LEN + NAME_LEN;

/// Recognised protocol versions
///
/// Both versions share the same layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ProtocolVersion {
    V1 = 0x01,
    V2 = 0x02,
}

impl TryFrom<u8> for ProtocolVersion {
    type Error = CodecError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x01 => Ok(ProtocolVersion::V1),
            0x02 => Ok(ProtocolVersion::V2),
            other => Err(CodecError::UnsupportedVersion(other)),
        }
    }
}
