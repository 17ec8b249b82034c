//! Aircraft, the presets they own, and the model → configuration dispatch.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, UnknownAircraftModel};
use crate::format::{CodecSettings, ConfigurationFormat};
use crate::models::f16::F16Configuration;

mod aircraft;
mod preset;
pub mod storage;

pub use aircraft::Aircraft;
pub use preset::Preset;
pub use storage::PresetStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftModel {
    F16C,
    /// Known to the tool, but no configuration type exists for it yet.
    FA18C,
}

impl AircraftModel {
    pub const ALL: [AircraftModel; 2] = [AircraftModel::F16C, AircraftModel::FA18C];

    /// Identifier used for storage, e.g. `F16C`.
    pub fn model_name(&self) -> &'static str {
        match self {
            AircraftModel::F16C => "F16C",
            AircraftModel::FA18C => "FA18C",
        }
    }

    /// Name shown to the user, e.g. `F-16C`.
    pub fn display_name(&self) -> &'static str {
        match self {
            AircraftModel::F16C => "F-16C",
            AircraftModel::FA18C => "F/A-18C",
        }
    }

    pub fn is_supported(&self) -> bool {
        match self {
            AircraftModel::F16C => true,
            AircraftModel::FA18C => false,
        }
    }

    /// Empty configuration of the type this model uses.
    ///
    /// # Panics
    ///
    /// If the model has no configuration type. The set of models is fixed at
    /// build time, so this is a defect in the caller, not bad input.
    pub fn default_configuration(&self) -> Configuration {
        match self {
            AircraftModel::F16C => Configuration::F16C(F16Configuration::default()),
            AircraftModel::FA18C => unsupported_model(*self),
        }
    }
}

impl Display for AircraftModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.model_name())
    }
}

impl FromStr for AircraftModel {
    type Err = UnknownAircraftModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AircraftModel::ALL
            .into_iter()
            .find(|model| model.model_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAircraftModel(s.to_string()))
    }
}

pub(crate) fn unsupported_model(model: AircraftModel) -> ! {
    panic!("No configuration type is registered for aircraft model {model}")
}

/// A configuration of whichever type its aircraft model uses.
#[derive(Debug, Clone, PartialEq)]
pub enum Configuration {
    F16C(F16Configuration),
}

impl Configuration {
    pub fn model(&self) -> AircraftModel {
        match self {
            Configuration::F16C(_) => AircraftModel::F16C,
        }
    }

    pub fn as_f16(&self) -> Option<&F16Configuration> {
        match self {
            Configuration::F16C(cfg) => Some(cfg),
        }
    }

    pub fn as_f16_mut(&mut self) -> Option<&mut F16Configuration> {
        match self {
            Configuration::F16C(cfg) => Some(cfg),
        }
    }

    pub fn to_json(&self) -> Result<String, FormatError> {
        self.to_json_with(&CodecSettings::default())
    }

    pub fn to_json_with(&self, settings: &CodecSettings) -> Result<String, FormatError> {
        match self {
            Configuration::F16C(cfg) => cfg.to_json_with(settings),
        }
    }

    pub fn to_compressed_string(&self) -> Result<String, FormatError> {
        self.to_compressed_string_with(&CodecSettings::default())
    }

    pub fn to_compressed_string_with(&self, settings: &CodecSettings) -> Result<String, FormatError> {
        match self {
            Configuration::F16C(cfg) => cfg.to_compressed_string_with(settings),
        }
    }

    /// Reads configuration json, or a legacy export, for `model`.
    ///
    /// # Panics
    ///
    /// If `model` has no configuration type.
    pub fn from_json(model: AircraftModel, text: &str) -> Result<Self, FormatError> {
        match model {
            AircraftModel::F16C => F16Configuration::from_json(text).map(Configuration::F16C),
            AircraftModel::FA18C => unsupported_model(model),
        }
    }

    /// Reads a compressed share string for `model`.
    ///
    /// # Panics
    ///
    /// If `model` has no configuration type.
    pub fn from_compressed_string(model: AircraftModel, blob: &str) -> Result<Self, FormatError> {
        match model {
            AircraftModel::F16C => F16Configuration::from_compressed_string(blob).map(Configuration::F16C),
            AircraftModel::FA18C => unsupported_model(model),
        }
    }
}

impl From<F16Configuration> for Configuration {
    fn from(cfg: F16Configuration) -> Self {
        Configuration::F16C(cfg)
    }
}
