use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WaypointSystem {
    pub waypoints: Vec<Waypoint>,
}

impl WaypointSystem {
    pub fn push(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Waypoint {
    /// 1-based, in the order the waypoint was entered or imported.
    pub sequence: u32,
    pub name: String,
    /// `N 38.500`
    pub latitude: String,
    /// `W 077.250`
    pub longitude: String,
    /// Feet
    pub elevation: i32,
}

impl Waypoint {
    pub fn new(sequence: u32, name: impl Into<String>, latitude: impl Into<String>, longitude: impl Into<String>, elevation: i32) -> Self {
        Self {
            sequence,
            name: name.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
            elevation,
        }
    }
}
