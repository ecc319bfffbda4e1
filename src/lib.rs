//! # osm-codec
//!
//! Codec for the compact, self-describing binary telemetry format carried in
//! LoRaWAN application payloads:
//! - Decode an uplink frame into named measurements
//! - Encode one named value into a downlink frame
//! - Bounds-checked reads, with partial results on malformed input
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Network Server Runtime                     │
//! │            decode(port, bytes, variables)                    │
//! │            encode(port, fields, variables)                   │
//! └──────────────┬───────────────────────────────┬──────────────┘
//!                │                               │
//!                ▼                               ▼
//!   ┌────────────────────────┐       ┌────────────────────────┐
//!   │     Frame Decoder      │       │     Frame Encoder      │
//!   │  (record iterator)     │       │  (single field)        │
//!   └───────────┬────────────┘       └───────────┬────────────┘
//!               │                                │
//!        ┌──────┴───────┐                        │
//!        ▼              ▼                        ▼
//!  ┌───────────┐  ┌───────────┐         ┌────────────────┐
//!  │ Type Tag  │  │  Status   │         │  Name codec    │
//!  │  Table    │  │  Lookup   │         │                │
//!  └─────┬─────┘  └───────────┘         └────────────────┘
//!        ▼
//!  ┌───────────┐
//!  │ Primitive │
//!  │ Decoders  │
//!  └───────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use osm_codec::{decode, Value, Variables};
//!
//! let frame = [1, b'H', b'U', b'M', 0, 2, 1, 50, 1, 40, 1, 60];
//! let fields = decode(1, &frame, &Variables::new());
//!
//! assert_eq!(fields.get("HUM"), Some(&Value::Unsigned(50)));
//! assert_eq!(fields.get("HUM_min"), Some(&Value::Unsigned(40)));
//! assert_eq!(fields.get("HUM_max"), Some(&Value::Unsigned(60)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod value;
pub mod status;
pub mod measurements;
pub mod frame;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CodecError, Result};
pub use config::Config;
pub use frame::{Decoder, Encoder, ProtocolVersion};
pub use measurements::{Measurements, Variables};
pub use status::{lookup, StatusCode};
pub use value::{FixedPoint, Value};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of osm-codec
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Network Server Entry Points
// =============================================================================

/// Decode an uplink payload into named measurements
///
/// `port` and `variables` are accepted for the network server's calling
/// convention and are not interpreted. Never fails: malformed input yields
/// whatever was decoded before the problem, and an unsupported protocol
/// version yields an empty mapping.
pub fn decode(port: u8, bytes: &[u8], variables: &Variables) -> Measurements {
    tracing::trace!(
        "Decoding {} bytes on port {} ({} variables)",
        bytes.len(),
        port,
        variables.len()
    );
    Decoder::default().decode(bytes)
}

/// Encode one named value into a downlink payload
///
/// `port` and `variables` are accepted for the network server's calling
/// convention and are not interpreted. Returns an empty sequence when there
/// is not exactly one field, the name is longer than 4 characters or the
/// frame would exceed 56 bytes.
pub fn encode(port: u8, fields: &Measurements, variables: &Variables) -> Vec<u8> {
    tracing::trace!(
        "Encoding {} fields on port {} ({} variables)",
        fields.len(),
        port,
        variables.len()
    );
    Encoder::default().encode(fields)
}
