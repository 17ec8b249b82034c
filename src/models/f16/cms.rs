use serde::{Deserialize, Serialize};

/// Programs 1-4 are manual, 5 is slap switch, 6 is the panic program.
pub const PROGRAM_COUNT: u8 = 6;

/// Countermeasures dispenser set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CMSystem {
    pub chaff_bingo: u32,
    pub flare_bingo: u32,
    pub programs: Vec<CMSProgram>,
}

impl Default for CMSystem {
    fn default() -> Self {
        Self {
            chaff_bingo: 10,
            flare_bingo: 10,
            programs: (1..=PROGRAM_COUNT).map(CMSProgram::factory).collect(),
        }
    }
}

impl CMSystem {
    pub fn program(&self, number: u8) -> Option<&CMSProgram> {
        self.programs.iter().find(|p| p.number == number)
    }

    pub fn program_mut(&mut self, number: u8) -> Option<&mut CMSProgram> {
        self.programs.iter_mut().find(|p| p.number == number)
    }

    /// Brings a program list written by any version back to exactly one
    /// program per number in `1..=PROGRAM_COUNT`, in order.
    ///
    /// Out of range numbers are dropped, the first of any duplicates wins and
    /// missing numbers get their factory program. Running it twice changes
    /// nothing.
    pub fn after_load(&mut self) {
        let mut programs: Vec<CMSProgram> = Vec::with_capacity(PROGRAM_COUNT as usize);
        for number in 1..=PROGRAM_COUNT {
            match self.programs.iter().position(|p| p.number == number) {
                Some(idx) => programs.push(self.programs[idx].clone()),
                None => programs.push(CMSProgram::factory(number)),
            }
        }

        if programs != self.programs {
            tracing::warn!(
                loaded = self.programs.len(),
                "Repaired CMS program table written by an older version"
            );
            self.programs = programs;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CMSProgram {
    pub number: u8,
    pub chaff: CMSProgramSettings,
    pub flare: CMSProgramSettings,
}

impl CMSProgram {
    pub fn factory(number: u8) -> Self {
        let (chaff, flare) = match number {
            1 => (CMSProgramSettings::new(1, 0.020, 10, 1.00), CMSProgramSettings::new(1, 0.020, 10, 1.00)),
            2 => (CMSProgramSettings::new(1, 0.020, 10, 0.50), CMSProgramSettings::new(1, 0.020, 10, 0.50)),
            3 => (CMSProgramSettings::new(2, 0.100, 5, 1.00), CMSProgramSettings::new(2, 0.100, 5, 1.00)),
            4 => (CMSProgramSettings::new(2, 0.100, 10, 2.00), CMSProgramSettings::new(2, 0.100, 10, 2.00)),
            5 => (CMSProgramSettings::new(1, 0.020, 1, 0.50), CMSProgramSettings::new(1, 0.020, 1, 0.50)),
            _ => (CMSProgramSettings::new(4, 0.020, 2, 0.50), CMSProgramSettings::new(4, 0.020, 2, 0.50)),
        };
        Self { number, chaff, flare }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CMSProgramSettings {
    pub burst_quantity: u32,
    /// Seconds
    pub burst_interval: f64,
    pub salvo_quantity: u32,
    /// Seconds
    pub salvo_interval: f64,
}

impl CMSProgramSettings {
    pub fn new(burst_quantity: u32, burst_interval: f64, salvo_quantity: u32, salvo_interval: f64) -> Self {
        Self {
            burst_quantity,
            burst_interval,
            salvo_quantity,
            salvo_interval,
        }
    }
}
