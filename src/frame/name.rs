//! Record name codec

use crate::error::{CodecError, Result};

use super::NAME_LEN;

/// Decode the 4 raw name bytes into a measurement key
///
/// NUL bytes are dropped, surrounding whitespace trimmed and the first
/// inner space replaced with `_`. A name of only NULs yields an empty key.
pub fn decode_name(raw: &[u8; NAME_LEN]) -> String {
    let name: String = raw
        .iter()
        .filter(|&&b| b != 0)
        .map(|&b| char::from(b))
        .collect();

    name.trim().replacen(' ', "_", 1)
}

/// Encode a key as 4 bytes, left-justified and NUL padded
pub fn encode_name(name: &str) -> Result<[u8; NAME_LEN]> {
    let count = name.chars().count();
    if count > NAME_LEN {
        return Err(CodecError::NameTooLong(count));
    }

    let mut raw = [0u8; NAME_LEN];
    for (slot, c) in raw.iter_mut().zip(name.chars()) {
        *slot = latin1(c)?;
    }
    Ok(raw)
}

/// Single-byte code of a character
pub(crate) fn latin1(c: char) -> Result<u8> {
    u8::try_from(u32::from(c)).map_err(|_| CodecError::NotLatin1(c))
}
