//! Map projections for forecast grids.
//!
//! Implements the projection math from scratch without external dependencies.
//! Each projection is a pure transform pair between geographic coordinates
//! (longitude/latitude in degrees) and the projection's native plane
//! coordinates (meters, or degrees for the identity lat/lon case).

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod lambert;
pub mod latlon;
pub mod polar;

pub use lambert::LambertConformal;
pub use latlon::{LatLon, LonWrap};
pub use polar::{Hemisphere, PolarStereographic};

/// Mean spherical Earth radius used by NWP grids (meters).
pub const EARTH_RADIUS_M: f64 = 6_371_229.0;

/// Errors produced by coordinate transforms.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProjectionError {
    /// The geographic point lies outside the projection's valid region.
    #[error("geographic point ({lon}, {lat}) is outside the projection's valid region")]
    OutsideValidRegion { lon: f64, lat: f64 },

    /// The native point does not correspond to any geographic location.
    #[error("native point ({x}, {y}) has no geographic preimage")]
    NoPreimage { x: f64, y: f64 },
}

/// A map projection family with its numeric parameters.
///
/// Closed set of supported projections; callers dispatch on the variant
/// rather than through runtime-registered transforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    /// Regular lat/lon (plate carrée) grid; native coordinates are degrees.
    LatLon(LatLon),
    /// Lambert Conformal Conic; native coordinates are meters.
    LambertConformal(LambertConformal),
    /// Polar Stereographic; native coordinates are meters.
    PolarStereographic(PolarStereographic),
}

impl Projection {
    /// Convert geographic coordinates (degrees) to native plane coordinates.
    pub fn forward(&self, lon_deg: f64, lat_deg: f64) -> Result<(f64, f64), ProjectionError> {
        match self {
            Projection::LatLon(p) => p.forward(lon_deg, lat_deg),
            Projection::LambertConformal(p) => p.forward(lon_deg, lat_deg),
            Projection::PolarStereographic(p) => p.forward(lon_deg, lat_deg),
        }
    }

    /// Convert native plane coordinates back to geographic coordinates (degrees).
    pub fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjectionError> {
        match self {
            Projection::LatLon(p) => p.inverse(x, y),
            Projection::LambertConformal(p) => p.inverse(x, y),
            Projection::PolarStereographic(p) => p.inverse(x, y),
        }
    }

    /// Check if native coordinates are geographic degrees rather than meters.
    pub fn is_geographic(&self) -> bool {
        matches!(self, Projection::LatLon(_))
    }
}

/// Normalize a longitude difference in radians to [-π, π].
pub(crate) fn normalize_lon_rad(mut dlon: f64) -> f64 {
    use std::f64::consts::PI;
    while dlon > PI {
        dlon -= 2.0 * PI;
    }
    while dlon < -PI {
        dlon += 2.0 * PI;
    }
    dlon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_dispatch_matches_inner() {
        let inner = LambertConformal::hrrr();
        let proj = Projection::LambertConformal(inner.clone());

        let (x1, y1) = proj.forward(-97.5, 38.5).unwrap();
        let (x2, y2) = inner.forward(-97.5, 38.5).unwrap();
        assert_eq!((x1, y1), (x2, y2));
    }

    #[test]
    fn test_is_geographic() {
        assert!(Projection::LatLon(LatLon::new()).is_geographic());
        assert!(!Projection::LambertConformal(LambertConformal::hrrr()).is_geographic());
    }

    #[test]
    fn test_normalize_lon_rad() {
        use std::f64::consts::PI;
        assert!((normalize_lon_rad(3.0 * PI) - PI).abs() < 1e-12);
        assert!((normalize_lon_rad(-3.0 * PI) + PI).abs() < 1e-12);
        assert_eq!(normalize_lon_rad(0.5), 0.5);
    }
}
