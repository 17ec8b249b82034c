#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod error;
pub mod format;
pub mod loaders;
pub mod models;
pub mod presets;

pub use error::{FormatError, LegacyImportError, UnknownAircraftModel};
pub use format::{CodecSettings, ConfigurationFormat};
pub use presets::{Aircraft, AircraftModel, Configuration, Preset, PresetStore};

#[cfg(test)]
mod tests;
