//! Primitive Decoder Tests
//!
//! These tests verify:
//! - Little-endian composition of the unsigned decoders
//! - Two's complement for the signed decoders, including 64-bit
//! - Fixed-point scaling of float/double
//! - Bounds checking at the end of the buffer

use osm_codec::value::primitive::{
    decode_double, decode_float, decode_i16, decode_i32, decode_i64, decode_i8, decode_string,
    decode_u16, decode_u32, decode_u64, decode_u8,
};
use osm_codec::{CodecError, FixedPoint};
use proptest::prelude::*;

// =============================================================================
// Unsigned Tests
// =============================================================================

#[test]
fn test_decode_u8() {
    assert_eq!(decode_u8(&[0x00, 0xAB], 1).unwrap(), 0xAB);
}

#[test]
fn test_decode_u16_little_endian() {
    assert_eq!(decode_u16(&[0xE4, 0x57], 0).unwrap(), 0x57E4);
    assert_eq!(decode_u16(&[0xE4, 0x57], 0).unwrap(), 22500);
}

#[test]
fn test_decode_u32_at_offset() {
    let bytes = [0xFF, 0x78, 0x56, 0x34, 0x12];
    assert_eq!(decode_u32(&bytes, 1).unwrap(), 0x1234_5678);
}

#[test]
fn test_decode_u64_full_range() {
    let bytes = [0xFF; 8];
    assert_eq!(decode_u64(&bytes, 0).unwrap(), u64::MAX);

    let bytes = [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01];
    assert_eq!(decode_u64(&bytes, 0).unwrap(), 0x0102_0304_0506_0708);
}

// =============================================================================
// Signed Tests
// =============================================================================

#[test]
fn test_decode_i8() {
    assert_eq!(decode_i8(&[0x7F], 0).unwrap(), 127);
    assert_eq!(decode_i8(&[0x80], 0).unwrap(), -128);
    assert_eq!(decode_i8(&[0xFF], 0).unwrap(), -1);
}

#[test]
fn test_decode_i16() {
    assert_eq!(decode_i16(&[0xFF, 0x7F], 0).unwrap(), i16::MAX);
    assert_eq!(decode_i16(&[0x00, 0x80], 0).unwrap(), i16::MIN);
    assert_eq!(decode_i16(&[0x18, 0xFC], 0).unwrap(), -1000);
}

#[test]
fn test_decode_i32() {
    assert_eq!(decode_i32(&[0xE4, 0x57, 0x00, 0x00], 0).unwrap(), 22500);
    assert_eq!(decode_i32(&[0x1C, 0xA8, 0xFF, 0xFF], 0).unwrap(), -22500);
}

#[test]
fn test_decode_i64_exact_at_full_width() {
    assert_eq!(decode_i64(&[0xFF; 8], 0).unwrap(), -1);

    let min = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80];
    assert_eq!(decode_i64(&min, 0).unwrap(), i64::MIN);

    let max = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F];
    assert_eq!(decode_i64(&max, 0).unwrap(), i64::MAX);
}

// =============================================================================
// Fixed-point Tests
// =============================================================================

#[test]
fn test_decode_float_scales_by_thousand() {
    let value = decode_float(&[0xE4, 0x57, 0x00, 0x00], 0).unwrap();
    assert_eq!(value, FixedPoint::from_raw(22500));
    assert_eq!(value.to_f64(), 22.5);
    assert_eq!(value.to_string(), "22.5");
}

#[test]
fn test_decode_float_negative() {
    let value = decode_float(&[0x0C, 0xFE, 0xFF, 0xFF], 0).unwrap();
    assert_eq!(value.raw(), -500);
    assert_eq!(value.to_string(), "-0.5");
}

#[test]
fn test_decode_double() {
    let bytes = (-1_234_567i64).to_le_bytes();
    let value = decode_double(&bytes, 0).unwrap();
    assert_eq!(value.raw(), -1_234_567);
    assert_eq!(value.to_string(), "-1234.567");
}

// =============================================================================
// String Tests
// =============================================================================

#[test]
fn test_decode_string_keeps_nuls() {
    let bytes = [b'v', b'1', b'.', b'2', 0, 0, 0, 0];
    assert_eq!(decode_string(&bytes, 0).unwrap(), "v1.2\0\0\0\0");
}

#[test]
fn test_decode_string_latin1() {
    let bytes = [0xB0, b'C', b' ', b' ', b' ', b' ', b' ', b' '];
    assert_eq!(decode_string(&bytes, 0).unwrap(), "\u{b0}C      ");
}

// =============================================================================
// Bounds Tests
// =============================================================================

#[test]
fn test_read_past_end_is_truncated() {
    let err = decode_u32(&[0x01, 0x02, 0x03], 0).unwrap_err();
    assert_eq!(
        err,
        CodecError::Truncated {
            offset: 0,
            needed: 4,
            available: 3
        }
    );
}

#[test]
fn test_read_at_end_is_truncated() {
    assert!(matches!(
        decode_u8(&[0x01], 1),
        Err(CodecError::Truncated { available: 0, .. })
    ));
    assert!(decode_string(&[0u8; 7], 0).is_err());
    assert!(decode_u16(&[], usize::MAX).is_err());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_i32_is_u32_twos_complement(bytes in prop::array::uniform4(any::<u8>())) {
        let unsigned = i64::from(decode_u32(&bytes, 0).unwrap());
        let signed = i64::from(decode_i32(&bytes, 0).unwrap());
        if unsigned < 1 << 31 {
            prop_assert_eq!(signed, unsigned);
        } else {
            prop_assert_eq!(signed, unsigned - (1 << 32));
        }
    }

    #[test]
    fn prop_i16_is_u16_twos_complement(bytes in prop::array::uniform2(any::<u8>())) {
        let unsigned = i32::from(decode_u16(&bytes, 0).unwrap());
        let signed = i32::from(decode_i16(&bytes, 0).unwrap());
        if unsigned < 1 << 15 {
            prop_assert_eq!(signed, unsigned);
        } else {
            prop_assert_eq!(signed, unsigned - (1 << 16));
        }
    }

    #[test]
    fn prop_i64_is_u64_twos_complement(bytes in prop::array::uniform8(any::<u8>())) {
        let unsigned = i128::from(decode_u64(&bytes, 0).unwrap());
        let signed = i128::from(decode_i64(&bytes, 0).unwrap());
        if unsigned < 1 << 63 {
            prop_assert_eq!(signed, unsigned);
        } else {
            prop_assert_eq!(signed, unsigned - (1 << 64));
        }
    }

    #[test]
    fn prop_float_is_i32_over_thousand(bytes in prop::array::uniform4(any::<u8>())) {
        let raw = decode_i32(&bytes, 0).unwrap();
        let real = decode_float(&bytes, 0).unwrap();
        prop_assert_eq!(real.raw(), i64::from(raw));
        prop_assert_eq!(real.to_f64(), f64::from(raw) / 1000.0);
    }

    #[test]
    fn prop_double_is_i64_over_thousand(bytes in prop::array::uniform8(any::<u8>())) {
        let raw = decode_i64(&bytes, 0).unwrap();
        let real = decode_double(&bytes, 0).unwrap();
        prop_assert_eq!(real.raw(), raw);
        prop_assert_eq!(real.to_f64(), raw as f64 / 1000.0);
    }
}
