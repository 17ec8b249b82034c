//! Reader for the XML mission export of the CombatFlite flight planner.
//!
//! Only waypoints are taken from the export; every other section of the
//! resulting configuration stays at its default.

use crate::error::LegacyImportError;
use crate::models::f16::{F16Configuration, Waypoint};

pub mod document;
pub mod position;

use document::{parse_document, Element};
use position::{meters_to_feet, FormattedPosition};

const ROOT: &str = "Objects";
const WAYPOINT_PATH: [&str; 2] = ["Waypoints", "Waypoint"];

/// Why a single waypoint element was left out of the import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingPosition,
    InvalidLatitude,
    InvalidLongitude,
}

/// A waypoint read from the export, before it is numbered.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedWaypoint {
    pub name: String,
    pub position: FormattedPosition,
    pub elevation_ft: i32,
}

/// Sequence number and outcome for one waypoint element.
pub type WaypointEntry = (u32, Result<ImportedWaypoint, SkipReason>);

/// Every `Objects/Waypoints/Waypoint` element in document order, paired with
/// its 1-based sequence number.
///
/// The sequence number counts every element, including those that were
/// skipped, so skips leave gaps in the numbering.
pub fn read_waypoints(xml: &str) -> Result<Vec<WaypointEntry>, LegacyImportError> {
    let root = parse_document(xml)?;
    if root.name != ROOT {
        return Ok(Vec::new());
    }

    let entries = root
        .select(&WAYPOINT_PATH)
        .into_iter()
        .zip(1u32..)
        .map(|(el, sequence)| (sequence, read_waypoint(el)))
        .collect();

    Ok(entries)
}

fn read_waypoint(el: &Element) -> Result<ImportedWaypoint, SkipReason> {
    let name = el.child("Name").map(|n| last_line(&n.value())).unwrap_or_default();

    let pos = el.child("Position").ok_or(SkipReason::MissingPosition)?;
    let lat = parse_number::<f64>(pos, "Latitude")
        .filter(|lat| lat.is_finite())
        .ok_or(SkipReason::InvalidLatitude)?;
    let lon = parse_number::<f64>(pos, "Longitude")
        .filter(|lon| lon.is_finite())
        .ok_or(SkipReason::InvalidLongitude)?;
    let altitude_m = parse_number::<f32>(pos, "Altitude")
        .filter(|alt| alt.is_finite())
        .unwrap_or(0.0);

    Ok(ImportedWaypoint {
        name,
        position: FormattedPosition::from_decimal_degrees(lat, lon),
        elevation_ft: meters_to_feet(altitude_m as f64),
    })
}

fn parse_number<T: std::str::FromStr>(parent: &Element, name: &str) -> Option<T> {
    parent.child(name)?.value().trim().parse().ok()
}

/// Multi-line labels keep only their last line.
fn last_line(name: &str) -> String {
    name.rsplit('\n').next().unwrap_or_default().to_string()
}

/// Builds an F-16 configuration holding the waypoints of a CombatFlite export.
///
/// A document that is not well-formed XML fails as a whole. Individual
/// waypoints without a usable position are skipped.
pub fn load_f16(xml: &str) -> Result<F16Configuration, LegacyImportError> {
    let mut cfg = F16Configuration::default();
    let mut skipped = 0usize;

    for (sequence, entry) in read_waypoints(xml)? {
        match entry {
            Ok(wpt) => cfg.waypoints.push(Waypoint::new(
                sequence,
                wpt.name,
                wpt.position.latitude,
                wpt.position.longitude,
                wpt.elevation_ft,
            )),
            Err(reason) => {
                skipped += 1;
                tracing::debug!(sequence, ?reason, "Skipping CombatFlite waypoint");
            }
        }
    }

    tracing::info!(imported = cfg.waypoints.len(), skipped, "Imported CombatFlite waypoints");

    Ok(cfg)
}
