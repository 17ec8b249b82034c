use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MasterMode {
    #[default]
    Nav,
    AirToAir,
    AirToGround,
    DogfightMissile,
    DogfightOverride,
}

impl MasterMode {
    pub const ALL: [MasterMode; 5] = [
        MasterMode::Nav,
        MasterMode::AirToAir,
        MasterMode::AirToGround,
        MasterMode::DogfightMissile,
        MasterMode::DogfightOverride,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MfdPage {
    #[default]
    Blank,
    Hsd,
    Sms,
    Wpn,
    Tgp,
    Fcr,
    Flir,
    Tfr,
    Test,
    Flcs,
    Dte,
    Rcce,
}

/// The three pages assigned to one display's OSB 12-14.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Mfd {
    pub pages: [MfdPage; 3],
    /// Index into `pages`.
    pub selected_page: u8,
}

impl Mfd {
    fn new(pages: [MfdPage; 3], selected_page: u8) -> Self {
        Self { pages, selected_page }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MfdConfiguration {
    pub mode: MasterMode,
    pub left_mfd: Mfd,
    pub right_mfd: Mfd,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MFDSystem {
    pub configurations: Vec<MfdConfiguration>,
}

impl Default for MFDSystem {
    fn default() -> Self {
        use MfdPage::*;

        let configurations = MasterMode::ALL
            .iter()
            .map(|&mode| {
                let (left, right) = match mode {
                    MasterMode::Nav => (Mfd::new([Fcr, Test, Dte], 0), Mfd::new([Sms, Hsd, Blank], 1)),
                    MasterMode::AirToAir | MasterMode::DogfightMissile | MasterMode::DogfightOverride => {
                        (Mfd::new([Fcr, Flcs, Test], 0), Mfd::new([Sms, Hsd, Blank], 1))
                    }
                    MasterMode::AirToGround => (Mfd::new([Fcr, Flcs, Test], 0), Mfd::new([Sms, Hsd, Tgp], 0)),
                };
                MfdConfiguration {
                    mode,
                    left_mfd: left,
                    right_mfd: right,
                }
            })
            .collect();

        Self { configurations }
    }
}

impl MFDSystem {
    pub fn configuration(&self, mode: MasterMode) -> Option<&MfdConfiguration> {
        self.configurations.iter().find(|c| c.mode == mode)
    }

    pub fn configuration_mut(&mut self, mode: MasterMode) -> Option<&mut MfdConfiguration> {
        self.configurations.iter_mut().find(|c| c.mode == mode)
    }
}
