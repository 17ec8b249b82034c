use serde::{Deserialize, Serialize};

pub const HARM_TABLE_COUNT: u8 = 3;
pub const HARM_TABLE_SIZE: usize = 5;
pub const HTS_MANUAL_TABLE_SIZE: usize = 8;
/// Threat classes 1-11 plus the manual table.
pub const HTS_CLASS_COUNT: usize = 12;

/// Emitter tables for the HARM attack display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HARMSystem {
    pub tables: Vec<HarmTable>,
}

impl Default for HARMSystem {
    fn default() -> Self {
        Self {
            tables: vec![
                HarmTable::new(1, [101, 102, 103, 104, 105]),
                HarmTable::new(2, [106, 107, 108, 109, 110]),
                HarmTable::new(3, [111, 112, 113, 114, 115]),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HarmTable {
    pub number: u8,
    /// Emitter ALIC codes
    pub emitters: Vec<u16>,
}

impl HarmTable {
    pub fn new(number: u8, emitters: [u16; HARM_TABLE_SIZE]) -> Self {
        Self {
            number,
            emitters: emitters.to_vec(),
        }
    }
}

/// HARM targeting system threat filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HTSSystem {
    pub manual_table: Vec<u16>,
    pub enabled_classes: Vec<bool>,
}

impl Default for HTSSystem {
    fn default() -> Self {
        Self {
            manual_table: vec![0; HTS_MANUAL_TABLE_SIZE],
            enabled_classes: vec![true; HTS_CLASS_COUNT],
        }
    }
}
