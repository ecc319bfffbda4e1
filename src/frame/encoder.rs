//! Frame encoder
//!
//! Serialises exactly one named value into a downlink frame:
//! version byte, 4-byte name, then the payload with no record kind and no
//! type tag. Text is written one byte per character; numbers are written as
//! the shortest little-endian byte sequence.

use bytes::{BufMut, BytesMut};

use crate::config::Config;
use crate::error::{CodecError, Result};
use crate::measurements::Measurements;
use crate::value::Value;

use super::name::{encode_name, latin1};
use super::HEADER_LEN;

/// Encodes a single measurement into a downlink frame
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: Config,
}

impl Encoder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encode the only field of `fields`, failing on any precondition
    pub fn try_encode(&self, fields: &Measurements) -> Result<Vec<u8>> {
        let (name, value) = match fields.len() {
            0 => return Err(CodecError::NoFields),
            1 => fields.single().ok_or(CodecError::NoFields)?,
            n => return Err(CodecError::TooManyFields(n)),
        };

        let name = encode_name(name)?;
        let payload = encode_payload(value)?;

        let len = HEADER_LEN + payload.len();
        if len > self.config.max_frame_len {
            return Err(CodecError::PayloadTooLarge {
                len,
                max: self.config.max_frame_len,
            });
        }

        let mut frame = BytesMut::with_capacity(len);
        frame.put_u8(self.config.encode_version as u8);
        frame.put_slice(&name);
        frame.put_slice(&payload);

        Ok(frame.to_vec())
    }

    /// Encode the only field of `fields`, or return an empty frame
    pub fn encode(&self, fields: &Measurements) -> Vec<u8> {
        self.try_encode(fields).unwrap_or_else(|e| {
            tracing::debug!("Frame encode rejected: {}", e);
            Vec::new()
        })
    }
}

fn encode_payload(value: &Value) -> Result<Vec<u8>> {
    match value {
        Value::Text(text) => encode_text(text),
        Value::Status(code) => encode_text(&code.to_string()),
        Value::Unsigned(v) => Ok(encode_unsigned(*v)),
        Value::Signed(v) => Ok(encode_signed(*v)),
        Value::Real(v) => Ok(encode_signed(v.trunc())),
    }
}

fn encode_text(text: &str) -> Result<Vec<u8>> {
    text.chars().map(latin1).collect()
}

/// Shortest little-endian form, at least one byte
fn encode_unsigned(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(8);
    let mut shift = 0u32;
    loop {
        out.push((value >> shift) as u8);
        shift += 8;
        if shift >= u64::BITS || (1u64 << shift) > value {
            return out;
        }
    }
}

/// Negative values fail the magnitude test after the first byte, so only
/// their low byte is written
fn encode_signed(value: i64) -> Vec<u8> {
    match u64::try_from(value) {
        Ok(v) => encode_unsigned(v),
        Err(_) => vec![value as u8],
    }
}
