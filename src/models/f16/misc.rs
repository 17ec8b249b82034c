use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TacanBand {
    #[default]
    X,
    Y,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tacan {
    pub channel: u8,
    pub band: TacanBand,
}

impl Default for Tacan {
    fn default() -> Self {
        Self {
            channel: 1,
            band: TacanBand::X,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Ils {
    pub frequency: String,
    /// Degrees magnetic
    pub course: u16,
}

impl Default for Ils {
    fn default() -> Self {
        Self {
            frequency: "108.10".to_string(),
            course: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Bullseye {
    pub enabled: bool,
    pub waypoint: u32,
}

/// Switches and values that do not belong to any larger system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MiscSystem {
    /// Pounds of fuel
    pub bingo: u32,
    /// Feet AGL
    pub cara_alow: u32,
    /// Feet MSL
    pub msl_floor: u32,
    pub laser_tgp_code: u16,
    pub laser_lst_code: u16,
    /// Seconds before impact
    pub laser_start_time: u16,
    pub tacan: Tacan,
    pub ils: Ils,
    pub bullseye: Bullseye,
}

impl Default for MiscSystem {
    fn default() -> Self {
        Self {
            bingo: 1500,
            cara_alow: 300,
            msl_floor: 10000,
            laser_tgp_code: 1688,
            laser_lst_code: 1688,
            laser_start_time: 8,
            tacan: Tacan::default(),
            ils: Ils::default(),
            bullseye: Bullseye::default(),
        }
    }
}
