//! Type tag dispatch table
//!
//! Maps the one-byte type tag to its decoder and byte width. The table is
//! the only place widths are defined; both record kinds go through it.

use crate::error::{CodecError, Result};

use super::primitive::{
    decode_double, decode_float, decode_i16, decode_i32, decode_i64, decode_i8, decode_string,
    decode_u16, decode_u32, decode_u64, decode_u8,
};
use super::Value;

/// Closed set of wire type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeTag {
    U8 = 0x01,
    U16 = 0x02,
    U32 = 0x03,
    U64 = 0x04,
    I8 = 0x11,
    I16 = 0x12,
    I32 = 0x13,
    I64 = 0x14,
    Float = 0x15,
    Double = 0x16,
    Str = 0x20,
}

/// Decoder and width for one tag
#[derive(Clone, Copy)]
pub struct TypeSpec {
    pub tag: TypeTag,
    pub width: usize,
    decoder: fn(&[u8], usize) -> Result<Value>,
}

impl TypeSpec {
    /// Decode one value of this type at `pos`
    pub fn decode(&self, bytes: &[u8], pos: usize) -> Result<Value> {
        (self.decoder)(bytes, pos)
    }
}

impl std::fmt::Debug for TypeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeSpec")
            .field("tag", &self.tag)
            .field("width", &self.width)
            .finish()
    }
}

static TABLE: [TypeSpec; 11] = [
    TypeSpec {
        tag: TypeTag::U8,
        width: 1,
        decoder: |b, p| decode_u8(b, p).map(Value::from),
    },
    TypeSpec {
        tag: TypeTag::U16,
        width: 2,
        decoder: |b, p| decode_u16(b, p).map(Value::from),
    },
    TypeSpec {
        tag: TypeTag::U32,
        width: 4,
        decoder: |b, p| decode_u32(b, p).map(Value::from),
    },
    TypeSpec {
        tag: TypeTag::U64,
        width: 8,
        decoder: |b, p| decode_u64(b, p).map(Value::from),
    },
    TypeSpec {
        tag: TypeTag::I8,
        width: 1,
        decoder: |b, p| decode_i8(b, p).map(Value::from),
    },
    TypeSpec {
        tag: TypeTag::I16,
        width: 2,
        decoder: |b, p| decode_i16(b, p).map(Value::from),
    },
    TypeSpec {
        tag: TypeTag::I32,
        width: 4,
        decoder: |b, p| decode_i32(b, p).map(Value::from),
    },
    TypeSpec {
        tag: TypeTag::I64,
        width: 8,
        decoder: |b, p| decode_i64(b, p).map(Value::from),
    },
    TypeSpec {
        tag: TypeTag::Float,
        width: 4,
        decoder: |b, p| decode_float(b, p).map(Value::from),
    },
    TypeSpec {
        tag: TypeTag::Double,
        width: 8,
        decoder: |b, p| decode_double(b, p).map(Value::from),
    },
    TypeSpec {
        tag: TypeTag::Str,
        width: 8,
        decoder: |b, p| decode_string(b, p).map(Value::from),
    },
];

impl TypeTag {
    /// Every valid tag, in table order
    pub const ALL: [TypeTag; 11] = [
        TypeTag::U8,
        TypeTag::U16,
        TypeTag::U32,
        TypeTag::U64,
        TypeTag::I8,
        TypeTag::I16,
        TypeTag::I32,
        TypeTag::I64,
        TypeTag::Float,
        TypeTag::Double,
        TypeTag::Str,
    ];

    fn index(self) -> usize {
        match self {
            TypeTag::U8 => 0,
            TypeTag::U16 => 1,
            TypeTag::U32 => 2,
            TypeTag::U64 => 3,
            TypeTag::I8 => 4,
            TypeTag::I16 => 5,
            TypeTag::I32 => 6,
            TypeTag::I64 => 7,
            TypeTag::Float => 8,
            TypeTag::Double => 9,
            TypeTag::Str => 10,
        }
    }

    pub fn spec(self) -> &'static TypeSpec {
        &TABLE[self.index()]
    }

    pub fn width(self) -> usize {
        self.spec().width
    }
}

impl TryFrom<u8> for TypeTag {
    type Error = CodecError;

    fn try_from(byte: u8) -> Result<Self> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| *tag as u8 == byte)
            .ok_or(CodecError::InvalidTypeTag(byte))
    }
}

/// Resolve a raw tag byte to its decoder and width
pub fn resolve(tag: u8) -> Result<&'static TypeSpec> {
    TypeTag::try_from(tag).map(TypeTag::spec)
}
