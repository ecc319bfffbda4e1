//! Type Tag Table Tests
//!
//! These tests verify:
//! - Every valid tag resolves to its documented width
//! - Each decoder reads exactly its width, no more and no less
//! - Unknown tags are rejected

use osm_codec::value::{resolve, TypeTag};
use osm_codec::{CodecError, FixedPoint, Value};

// =============================================================================
// Resolution Tests
// =============================================================================

#[test]
fn test_resolve_widths() {
    let expected = [
        (0x01, 1),
        (0x02, 2),
        (0x03, 4),
        (0x04, 8),
        (0x11, 1),
        (0x12, 2),
        (0x13, 4),
        (0x14, 8),
        (0x15, 4),
        (0x16, 8),
        (0x20, 8),
    ];

    for (tag, width) in expected {
        let spec = resolve(tag).unwrap();
        assert_eq!(spec.width, width, "tag 0x{:02x}", tag);
        assert_eq!(spec.tag as u8, tag);
    }
}

#[test]
fn test_resolve_rejects_unknown_tags() {
    let valid: Vec<u8> = TypeTag::ALL.iter().map(|t| *t as u8).collect();

    for tag in 0..=u8::MAX {
        if valid.contains(&tag) {
            continue;
        }
        assert_eq!(resolve(tag).unwrap_err(), CodecError::InvalidTypeTag(tag));
    }
}

#[test]
fn test_width_agrees_with_decoder() {
    for tag in TypeTag::ALL {
        let spec = tag.spec();
        let exact = vec![0u8; spec.width];
        let short = vec![0u8; spec.width - 1];

        assert!(spec.decode(&exact, 0).is_ok(), "{:?} exact width", tag);
        assert!(spec.decode(&short, 0).is_err(), "{:?} short by one", tag);
        assert_eq!(tag.width(), spec.width);
    }
}

// =============================================================================
// Dispatch Tests
// =============================================================================

#[test]
fn test_decode_families() {
    let bytes = [0xE4, 0x57, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

    assert_eq!(resolve(0x02).unwrap().decode(&bytes, 0).unwrap(), Value::Unsigned(22500));
    assert_eq!(resolve(0x13).unwrap().decode(&bytes, 0).unwrap(), Value::Signed(22500));
    assert_eq!(
        resolve(0x15).unwrap().decode(&bytes, 0).unwrap(),
        Value::Real(FixedPoint::from_raw(22500))
    );
    assert_eq!(
        resolve(0x16).unwrap().decode(&bytes, 0).unwrap(),
        Value::Real(FixedPoint::from_raw(22500))
    );
}

#[test]
fn test_decode_signed_tag_negative() {
    let value = resolve(0x11).unwrap().decode(&[0xFE], 0).unwrap();
    assert_eq!(value, Value::Signed(-2));
}

#[test]
fn test_decode_string_tag() {
    let value = resolve(0x20).unwrap().decode(b"ABCDEFGH", 0).unwrap();
    assert_eq!(value, Value::Text("ABCDEFGH".to_string()));
}
