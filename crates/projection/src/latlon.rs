//! Regular lat/lon (plate carrée) grids.
//!
//! The transform is the identity up to a longitude wrapping convention;
//! native coordinates are degrees. Global model grids commonly start at
//! 0°E and run east (GFS), regional ones use signed longitudes.

use serde::{Deserialize, Serialize};

use crate::ProjectionError;

/// Longitude wrapping convention for the native x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LonWrap {
    /// x in [-180, 180)
    #[default]
    Signed,
    /// x in [0, 360)
    ZeroTo360,
}

/// Identity projection for regular lat/lon grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LatLon {
    /// Wrapping convention applied to longitudes on the forward transform.
    pub wrap: LonWrap,
}

impl LatLon {
    /// Signed-longitude convention, x in [-180, 180).
    pub fn new() -> Self {
        Self {
            wrap: LonWrap::Signed,
        }
    }

    /// Eastward convention, x in [0, 360), as used by global grids like GFS.
    pub fn zero_to_360() -> Self {
        Self {
            wrap: LonWrap::ZeroTo360,
        }
    }

    /// Convert geographic coordinates (degrees) to native coordinates (degrees).
    pub fn forward(&self, lon_deg: f64, lat_deg: f64) -> Result<(f64, f64), ProjectionError> {
        if !(lat_deg.abs() <= 90.0) {
            return Err(ProjectionError::OutsideValidRegion {
                lon: lon_deg,
                lat: lat_deg,
            });
        }

        Ok((self.wrap_lon(lon_deg), lat_deg))
    }

    /// Convert native coordinates (degrees) back to geographic coordinates.
    pub fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjectionError> {
        if !(y.abs() <= 90.0) {
            return Err(ProjectionError::NoPreimage { x, y });
        }

        Ok((self.wrap_lon(x), y))
    }

    fn wrap_lon(&self, lon_deg: f64) -> f64 {
        let (lo, hi) = match self.wrap {
            LonWrap::Signed => (-180.0, 180.0),
            LonWrap::ZeroTo360 => (0.0, 360.0),
        };

        let mut lon = lon_deg;
        while lon >= hi {
            lon -= 360.0;
        }
        while lon < lo {
            lon += 360.0;
        }
        lon
    }
}
