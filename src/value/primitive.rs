//! Primitive value decoders
//!
//! Each decoder reads exactly its type's fixed width starting at `pos` and
//! never mutates the buffer. A read that would run past the end of the
//! buffer fails with [`CodecError::Truncated`].

use crate::error::{CodecError, Result};

use super::FixedPoint;

/// Width of the fixed-length string type
pub const STRING_LEN: usize = 8;

/// Borrow exactly `N` bytes starting at `pos`
fn window<const N: usize>(bytes: &[u8], pos: usize) -> Result<[u8; N]> {
    let truncated = || CodecError::Truncated {
        offset: pos,
        needed: N,
        available: bytes.len().saturating_sub(pos),
    };

    let end = pos.checked_add(N).ok_or_else(truncated)?;
    let slice = bytes.get(pos..end).ok_or_else(truncated)?;
    slice.try_into().map_err(|_| truncated())
}

// =============================================================================
// Unsigned
// =============================================================================

pub fn decode_u8(bytes: &[u8], pos: usize) -> Result<u8> {
    Ok(u8::from_le_bytes(window::<1>(bytes, pos)?))
}

pub fn decode_u16(bytes: &[u8], pos: usize) -> Result<u16> {
    Ok(u16::from_le_bytes(window::<2>(bytes, pos)?))
}

/// Low half at `pos`, high half at `pos + 2`
pub fn decode_u32(bytes: &[u8], pos: usize) -> Result<u32> {
    window::<4>(bytes, pos)?;
    let low = u32::from(decode_u16(bytes, pos)?);
    let high = u32::from(decode_u16(bytes, pos + 2)?);
    Ok(high << 16 | low)
}

/// Low half at `pos`, high half at `pos + 4`
pub fn decode_u64(bytes: &[u8], pos: usize) -> Result<u64> {
    window::<8>(bytes, pos)?;
    let low = u64::from(decode_u32(bytes, pos)?);
    let high = u64::from(decode_u32(bytes, pos + 4)?);
    Ok(high << 32 | low)
}

// =============================================================================
// Signed (two's complement over the unsigned decoder of the same width)
// =============================================================================

pub fn decode_i8(bytes: &[u8], pos: usize) -> Result<i8> {
    Ok(decode_u8(bytes, pos)? as i8)
}

pub fn decode_i16(bytes: &[u8], pos: usize) -> Result<i16> {
    Ok(decode_u16(bytes, pos)? as i16)
}

pub fn decode_i32(bytes: &[u8], pos: usize) -> Result<i32> {
    Ok(decode_u32(bytes, pos)? as i32)
}

pub fn decode_i64(bytes: &[u8], pos: usize) -> Result<i64> {
    Ok(decode_u64(bytes, pos)? as i64)
}

// =============================================================================
// Fixed-point reals
// =============================================================================

/// i32 count of thousandths
pub fn decode_float(bytes: &[u8], pos: usize) -> Result<FixedPoint> {
    Ok(FixedPoint::from_raw(i64::from(decode_i32(bytes, pos)?)))
}

/// i64 count of thousandths
pub fn decode_double(bytes: &[u8], pos: usize) -> Result<FixedPoint> {
    Ok(FixedPoint::from_raw(decode_i64(bytes, pos)?))
}

// =============================================================================
// String
// =============================================================================

/// Eight bytes, one character each, NULs kept
pub fn decode_string(bytes: &[u8], pos: usize) -> Result<String> {
    let raw = window::<STRING_LEN>(bytes, pos)?;
    Ok(raw.iter().copied().map(char::from).collect())
}
