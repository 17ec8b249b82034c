//! Conversion between configurations and their text forms.
//!
//! A configuration has three text forms:
//!
//! * the canonical json written to disk,
//! * a compressed share string of that json (see [`compressor`]),
//! * a legacy flight-planning export that can only be read, never written.
//!
//! Reading json falls back to the legacy reader, so either form can be fed to
//! [`ConfigurationFormat::from_json`].

use serde::{de::{self, DeserializeOwned}, Deserialize, Serialize};

use crate::error::{FormatError, LegacyImportError};
use crate::presets::AircraftModel;

pub mod compressor;

pub use compressor::{compress_string, decompress_string};

/// Settings that affect how configurations are written. Reading never depends
/// on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecSettings {
    pub pretty_json: bool,
    /// gzip level, 0 (store) to 9 (best).
    pub compression_level: u32,
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self {
            pretty_json: false,
            compression_level: 6,
        }
    }
}

/// Text codec shared by every aircraft configuration type.
pub trait ConfigurationFormat: Serialize + DeserializeOwned {
    const MODEL: AircraftModel;

    /// Reads the legacy flight-planning export into a configuration.
    fn from_legacy_xml(text: &str) -> Result<Self, LegacyImportError>;

    /// Lets sections repair state written by older versions. Runs after every
    /// successful json decode.
    fn after_load(&mut self) {}

    fn to_json(&self) -> Result<String, FormatError> {
        self.to_json_with(&CodecSettings::default())
    }

    fn to_json_with(&self, settings: &CodecSettings) -> Result<String, FormatError> {
        let json = if settings.pretty_json {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    fn from_json(text: &str) -> Result<Self, FormatError> {
        match decode_object::<Self>(text) {
            Ok(mut cfg) => {
                cfg.after_load();
                Ok(cfg)
            }
            Err(json) => {
                tracing::debug!(model = %Self::MODEL, error = %json, "Not configuration json, trying legacy import");
                Self::from_legacy_xml(text).map_err(|xml| FormatError::Unrecognised { json, xml })
            }
        }
    }

    fn to_compressed_string(&self) -> Result<String, FormatError> {
        self.to_compressed_string_with(&CodecSettings::default())
    }

    fn to_compressed_string_with(&self, settings: &CodecSettings) -> Result<String, FormatError> {
        compress_string(&self.to_json_with(settings)?, settings.compression_level)
    }

    fn from_compressed_string(blob: &str) -> Result<Self, FormatError> {
        let json = decompress_string(blob)?;
        Self::from_json(&json)
    }
}

/// Configuration json is always an object; serde would otherwise also accept
/// a struct written as an array.
fn decode_object<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(de::Error::custom("configuration json must be an object"));
    }
    T::deserialize(value)
}
