pub const FEET_PER_METER: f64 = 3.28084;

/// A decimal-degree fix converted to the strings the waypoint model stores.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedPosition {
    pub latitude: String,
    pub longitude: String,
}

impl FormattedPosition {
    pub fn from_decimal_degrees(lat: f64, lon: f64) -> Self {
        Self {
            latitude: format_latitude(lat),
            longitude: format_longitude(lon),
        }
    }
}

/// `N 38.500` style. Zero and negative values are southern.
pub fn format_latitude(lat: f64) -> String {
    let hemisphere = if lat > 0.0 { 'N' } else { 'S' };
    format!("{} {:06.3}", hemisphere, lat.abs())
}

/// `W 077.250` style. Zero and negative values are western.
pub fn format_longitude(lon: f64) -> String {
    let hemisphere = if lon > 0.0 { 'E' } else { 'W' };
    format!("{} {:07.3}", hemisphere, lon.abs())
}

/// Metres to whole feet, rounded down.
pub fn meters_to_feet(meters: f64) -> i32 {
    (meters * FEET_PER_METER).floor() as i32
}
