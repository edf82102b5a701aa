//! Station catalog input types.

use serde::{Deserialize, Serialize};

/// A named geographic point, typically a weather station.
///
/// Produced by an external station catalog; the sampling and reprojection
/// code treats it as an opaque labelled coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationPoint {
    /// Identifying label (e.g., WMO id or station name).
    pub label: String,
    /// Longitude in degrees east.
    pub lon: f64,
    /// Latitude in degrees north.
    pub lat: f64,
}

impl StationPoint {
    /// Create a new station point.
    pub fn new(label: impl Into<String>, lon: f64, lat: f64) -> Self {
        Self {
            label: label.into(),
            lon,
            lat,
        }
    }
}
