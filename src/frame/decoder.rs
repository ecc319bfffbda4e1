//! Frame decoder
//!
//! Walks an uplink frame record by record. The strict path reports the
//! first problem; the lenient path used by the network server keeps
//! whatever was decoded before it.

use crate::config::Config;
use crate::error::{CodecError, Result};
use crate::measurements::Measurements;
use crate::status::StatusCode;
use crate::value::{resolve, Value};

use super::name::decode_name;
use super::record::{Reading, Record, RecordKind};
use super::{ProtocolVersion, NAME_LEN};

// =============================================================================
// Record iterator
// =============================================================================

/// Iterator over the records of a frame
///
/// Yields at most one error, after which it is exhausted.
#[derive(Debug)]
pub struct Records<'a> {
    bytes: &'a [u8],
    pos: usize,
    version: ProtocolVersion,
    finished: bool,
}

impl<'a> Records<'a> {
    /// Read the version byte and position the cursor on the first record
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        let mut records = Self {
            bytes,
            pos: 0,
            version: ProtocolVersion::V1,
            finished: false,
        };
        records.version = ProtocolVersion::try_from(records.read_u8()?)?;
        Ok(records)
    }

    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// Cursor position in the frame
    pub fn position(&self) -> usize {
        self.pos
    }

    fn truncated(&self, needed: usize) -> CodecError {
        CodecError::Truncated {
            offset: self.pos,
            needed,
            available: self.bytes.len().saturating_sub(self.pos),
        }
    }

    fn read_u8(&mut self) -> Result<u8> {
        let byte = *self.bytes.get(self.pos).ok_or_else(|| self.truncated(1))?;
        self.pos += 1;
        Ok(byte)
    }

    fn read_name(&mut self) -> Result<String> {
        let bytes = self.bytes;
        let raw: &[u8; NAME_LEN] = bytes
            .get(self.pos..self.pos + NAME_LEN)
            .and_then(|slice| slice.try_into().ok())
            .ok_or_else(|| self.truncated(NAME_LEN))?;
        self.pos += NAME_LEN;
        Ok(decode_name(raw))
    }

    /// Tag byte, then the value it describes
    fn read_value(&mut self) -> Result<Value> {
        let spec = resolve(self.read_u8()?)?;
        let value = spec.decode(self.bytes, self.pos)?;
        self.pos += spec.width;
        Ok(value)
    }

    fn read_record(&mut self) -> Result<Record> {
        let name = self.read_name()?;
        let reading = match RecordKind::try_from(self.read_u8()?)? {
            RecordKind::Single => Reading::Single(self.read_value()?),
            RecordKind::Multi => {
                let mean = self.read_value()?;
                let min = self.read_value()?;
                let max = self.read_value()?;
                Reading::Multi { mean, min, max }
            }
        };

        Ok(Record { name, reading })
    }
}

impl Iterator for Records<'_> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.pos >= self.bytes.len() {
            return None;
        }

        match self.read_record() {
            Ok(record) => {
                tracing::trace!("Decoded record {:?} ending at offset {}", record, self.pos);
                Some(Ok(record))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

// =============================================================================
// Decoder
// =============================================================================

/// Decodes uplink frames into measurements
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: Config,
}

impl Decoder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Iterate over the records of a frame
    pub fn records<'a>(&self, bytes: &'a [u8]) -> Result<Records<'a>> {
        Records::new(bytes)
    }

    /// Decode a whole frame, failing on the first problem
    pub fn try_decode(&self, bytes: &[u8]) -> Result<Measurements> {
        let mut out = Measurements::new();
        self.decode_into(bytes, &mut out)?;
        Ok(out)
    }

    /// Decode a frame, returning everything decoded before the first problem
    ///
    /// An unsupported version gives an empty mapping.
    pub fn decode(&self, bytes: &[u8]) -> Measurements {
        let mut out = Measurements::new();
        if let Err(e) = self.decode_into(bytes, &mut out) {
            tracing::debug!(
                "Frame decode stopped after {} fields: {}",
                out.len(),
                e
            );
        }
        out
    }

    fn decode_into(&self, bytes: &[u8], out: &mut Measurements) -> Result<()> {
        for record in self.records(bytes)? {
            self.store(record?, out);
        }
        Ok(())
    }

    fn store(&self, record: Record, out: &mut Measurements) {
        if record.name == self.config.status_field {
            if let Reading::Single(value) = &record.reading {
                let status = StatusCode::from_value(value);
                out.insert(record.name, status);
                return;
            }
        }

        for (key, value) in record.into_entries() {
            out.insert(key, value);
        }
    }
}
