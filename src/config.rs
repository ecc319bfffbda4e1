//! Configuration for the telemetry codec
//!
//! Centralized configuration with defaults matching the deployed format.

use crate::frame::ProtocolVersion;

/// Default cap on an encoded frame: version + name + payload
pub const DEFAULT_MAX_FRAME_LEN: usize = 56;

/// Default name of the field carrying a status code
pub const DEFAULT_STATUS_FIELD: &str = "ERR";

/// Main configuration shared by the decoder and encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Encode Configuration
    // -------------------------------------------------------------------------
    /// Protocol version byte written at the start of every encoded frame
    pub encode_version: ProtocolVersion,

    /// Max encoded frame length in bytes, including the version byte and
    /// the 4 name bytes
    pub max_frame_len: usize,

    // -------------------------------------------------------------------------
    // Decode Configuration
    // -------------------------------------------------------------------------
    /// Single-value record whose integer value is replaced by its status text
    pub status_field: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encode_version: ProtocolVersion::V1,
            max_frame_len: DEFAULT_MAX_FRAME_LEN,
            status_field: DEFAULT_STATUS_FIELD.to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the protocol version emitted by the encoder
    pub fn encode_version(mut self, version: ProtocolVersion) -> Self {
        self.config.encode_version = version;
        self
    }

    /// Set the maximum encoded frame length (in bytes)
    pub fn max_frame_len(mut self, len: usize) -> Self {
        self.config.max_frame_len = len;
        self
    }

    /// Set the name of the status code field
    pub fn status_field(mut self, name: impl Into<String>) -> Self {
        self.config.status_field = name.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
