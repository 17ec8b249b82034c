use serde::{Deserialize, Serialize};

pub const PRESET_COUNT: u8 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RadioSystem {
    /// UHF
    #[serde(rename = "COM1")]
    pub com1: Radio,
    /// VHF
    #[serde(rename = "COM2")]
    pub com2: Radio,
}

impl Default for RadioSystem {
    fn default() -> Self {
        Self {
            com1: Radio::with_frequency("305.00"),
            com2: Radio::with_frequency("127.00"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadioMode {
    #[default]
    Preset,
    Manual,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Radio {
    pub presets: Vec<RadioPreset>,
    pub selected_frequency: String,
    pub selected_preset: Option<u8>,
    pub mode: RadioMode,
    pub enable_guard: bool,
}

impl Radio {
    fn with_frequency(frequency: &str) -> Self {
        Self {
            presets: (1..=PRESET_COUNT).map(RadioPreset::empty).collect(),
            selected_frequency: frequency.to_string(),
            selected_preset: Some(1),
            mode: RadioMode::Preset,
            enable_guard: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RadioPreset {
    pub number: u8,
    pub frequency: String,
    pub name: String,
}

impl RadioPreset {
    fn empty(number: u8) -> Self {
        Self {
            number,
            ..Default::default()
        }
    }
}
