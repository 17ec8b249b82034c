use uuid::Uuid;

use super::{AircraftModel, Configuration};
use crate::error::FormatError;

/// A named configuration owned by one aircraft.
///
/// Names are for display and need not be unique; presets are told apart by
/// their id.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    id: Uuid,
    pub name: String,
    pub configuration: Configuration,
}

impl Preset {
    pub fn new(name: impl Into<String>, configuration: Configuration) -> Self {
        Self::with_id(Uuid::new_v4(), name, configuration)
    }

    /// Restores a preset under the id it was persisted with.
    pub fn with_id(id: Uuid, name: impl Into<String>, configuration: Configuration) -> Self {
        Self {
            id,
            name: name.into(),
            configuration,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn model(&self) -> AircraftModel {
        self.configuration.model()
    }

    /// Deep copy under a fresh id.
    pub fn duplicate(&self) -> Self {
        Self::new(self.name.clone(), self.configuration.clone())
    }

    /// Compressed share string of this preset's configuration.
    pub fn export(&self) -> Result<String, FormatError> {
        self.configuration.to_compressed_string()
    }
}
