use serde::{Deserialize, Serialize};

use crate::error::LegacyImportError;
use crate::format::ConfigurationFormat;
use crate::loaders::combatflite;
use crate::presets::AircraftModel;

pub mod cms;
pub mod harm_hts;
pub mod mfd;
pub mod misc;
pub mod radios;
pub mod waypoints;

pub use cms::CMSystem;
pub use harm_hts::{HARMSystem, HTSSystem};
pub use mfd::MFDSystem;
pub use misc::MiscSystem;
pub use radios::RadioSystem;
pub use waypoints::{Waypoint, WaypointSystem};

/// Everything loaded into an F-16C for one preset.
///
/// Always fully populated: json missing a section, or carrying `null` for
/// one, decodes to that section's default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", from = "F16ConfigurationPatch")]
pub struct F16Configuration {
    pub waypoints: WaypointSystem,
    pub radios: RadioSystem,
    #[serde(rename = "CMS")]
    pub cms: CMSystem,
    #[serde(rename = "MFD")]
    pub mfd: MFDSystem,
    #[serde(rename = "HARM")]
    pub harm: HARMSystem,
    #[serde(rename = "HTS")]
    pub hts: HTSSystem,
    pub misc: MiscSystem,
}

impl F16Configuration {
    /// Replaces every section that is present in `source` and leaves the rest
    /// alone.
    ///
    /// Sections are moved out of `source`, so the two configurations never
    /// share a section afterwards. Pass `source.clone()` to keep the original.
    pub fn copy_configuration(&mut self, source: F16ConfigurationPatch) {
        let F16ConfigurationPatch {
            waypoints,
            radios,
            cms,
            mfd,
            harm,
            hts,
            misc,
        } = source;

        if let Some(waypoints) = waypoints {
            self.waypoints = waypoints;
        }
        if let Some(cms) = cms {
            self.cms = cms;
        }
        if let Some(radios) = radios {
            self.radios = radios;
        }
        if let Some(mfd) = mfd {
            self.mfd = mfd;
        }
        if let Some(harm) = harm {
            self.harm = harm;
        }
        if let Some(hts) = hts {
            self.hts = hts;
        }
        if let Some(misc) = misc {
            self.misc = misc;
        }
    }
}

impl ConfigurationFormat for F16Configuration {
    const MODEL: AircraftModel = AircraftModel::F16C;

    fn from_legacy_xml(text: &str) -> Result<Self, LegacyImportError> {
        combatflite::load_f16(text)
    }

    fn after_load(&mut self) {
        self.cms.after_load();
    }
}

/// One of the seven sections of an [`F16Configuration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Waypoints,
    Radios,
    CMS,
    MFD,
    HARM,
    HTS,
    Misc,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Waypoints,
        Section::Radios,
        Section::CMS,
        Section::MFD,
        Section::HARM,
        Section::HTS,
        Section::Misc,
    ];
}

/// A configuration in which any section may be absent.
///
/// This is what [`F16Configuration::copy_configuration`] consumes, and also
/// the shape json is first decoded into.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct F16ConfigurationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<WaypointSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radios: Option<RadioSystem>,
    #[serde(rename = "CMS", skip_serializing_if = "Option::is_none")]
    pub cms: Option<CMSystem>,
    #[serde(rename = "MFD", skip_serializing_if = "Option::is_none")]
    pub mfd: Option<MFDSystem>,
    #[serde(rename = "HARM", skip_serializing_if = "Option::is_none")]
    pub harm: Option<HARMSystem>,
    #[serde(rename = "HTS", skip_serializing_if = "Option::is_none")]
    pub hts: Option<HTSSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misc: Option<MiscSystem>,
}

impl F16ConfigurationPatch {
    /// Keeps only the listed sections of `cfg`.
    pub fn from_sections(cfg: F16Configuration, sections: &[Section]) -> Self {
        let keep = |section: Section| sections.contains(&section);
        Self {
            waypoints: keep(Section::Waypoints).then_some(cfg.waypoints),
            radios: keep(Section::Radios).then_some(cfg.radios),
            cms: keep(Section::CMS).then_some(cfg.cms),
            mfd: keep(Section::MFD).then_some(cfg.mfd),
            harm: keep(Section::HARM).then_some(cfg.harm),
            hts: keep(Section::HTS).then_some(cfg.hts),
            misc: keep(Section::Misc).then_some(cfg.misc),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl From<F16Configuration> for F16ConfigurationPatch {
    fn from(cfg: F16Configuration) -> Self {
        Self::from_sections(cfg, &Section::ALL)
    }
}

impl From<F16ConfigurationPatch> for F16Configuration {
    fn from(patch: F16ConfigurationPatch) -> Self {
        let mut cfg = F16Configuration::default();
        cfg.copy_configuration(patch);
        cfg
    }
}
