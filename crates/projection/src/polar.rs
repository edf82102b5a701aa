//! Polar Stereographic projection.
//!
//! Used by high-latitude forecast grids (e.g., the NCEP northern-hemisphere
//! grids true at 60°N). The plane is tangent or secant at one pole and the
//! opposite pole has no finite image.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use serde::{Deserialize, Serialize};

use crate::{normalize_lon_rad, ProjectionError, EARTH_RADIUS_M};

/// Which pole the projection plane is centered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
}

/// Polar Stereographic projection parameters.
///
/// Spherical earth form, true at the standard parallel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarStereographic {
    /// Central meridian in radians
    pub lon0: f64,
    /// Standard parallel (latitude of true scale) in radians
    pub lat_ts: f64,
    /// Pole at the projection center
    pub hemisphere: Hemisphere,
    /// Earth radius (meters)
    pub earth_radius: f64,
    /// Scale factor at the pole derived from the standard parallel
    k0: f64,
}

impl PolarStereographic {
    /// Create a new Polar Stereographic projection.
    ///
    /// # Arguments
    /// * `lon0_deg` - Central meridian (degrees)
    /// * `lat_ts_deg` - Standard parallel / latitude of true scale (degrees);
    ///   its sign is ignored, the hemisphere argument decides the aspect
    /// * `hemisphere` - Pole at the projection center
    pub fn new(lon0_deg: f64, lat_ts_deg: f64, hemisphere: Hemisphere) -> Self {
        let lon0 = lon0_deg.to_radians();
        let lat_ts = lat_ts_deg.abs().to_radians();

        // True scale at lat_ts: k(φ) = 2·k0 / (1 + sin φ)
        let k0 = (1.0 + lat_ts.sin()) / 2.0;

        Self {
            lon0,
            lat_ts,
            hemisphere,
            earth_radius: EARTH_RADIUS_M,
            k0,
        }
    }

    /// NCEP northern-hemisphere projection: true at 60°N, central meridian 105°W.
    pub fn ncep_north() -> Self {
        Self::new(-105.0, 60.0, Hemisphere::North)
    }

    /// Convert geographic coordinates (degrees) to plane coordinates (meters).
    pub fn forward(&self, lon_deg: f64, lat_deg: f64) -> Result<(f64, f64), ProjectionError> {
        let lon = lon_deg.to_radians();
        let lat = lat_deg.to_radians();

        let outside = ProjectionError::OutsideValidRegion {
            lon: lon_deg,
            lat: lat_deg,
        };

        // Fold the south aspect onto the north-aspect math
        let lat_eff = match self.hemisphere {
            Hemisphere::North => lat,
            Hemisphere::South => -lat,
        };

        // The opposite pole has no finite image; tan(π/2) is merely huge in
        // floating point, so it must be rejected before the tangent.
        if !(lat_eff > -FRAC_PI_2 + 1e-10) {
            return Err(outside);
        }

        let t = (FRAC_PI_4 - lat_eff / 2.0).tan();
        if !(t >= 0.0) {
            return Err(outside);
        }

        let dlon = normalize_lon_rad(lon - self.lon0);
        let rho = 2.0 * self.earth_radius * self.k0 * t;

        let x = rho * dlon.sin();
        let y = match self.hemisphere {
            Hemisphere::North => -rho * dlon.cos(),
            Hemisphere::South => rho * dlon.cos(),
        };

        Ok((x, y))
    }

    /// Convert plane coordinates (meters) back to geographic coordinates (degrees).
    pub fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjectionError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ProjectionError::NoPreimage { x, y });
        }

        let rho = (x * x + y * y).sqrt();
        let c = 2.0 * (rho / (2.0 * self.earth_radius * self.k0)).atan();

        let (lat, dlon) = match self.hemisphere {
            Hemisphere::North => (FRAC_PI_2 - c, x.atan2(-y)),
            Hemisphere::South => (c - FRAC_PI_2, x.atan2(y)),
        };

        let lon = normalize_lon_rad(self.lon0 + dlon);

        Ok((lon.to_degrees(), lat.to_degrees()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pole_is_plane_origin() {
        let proj = PolarStereographic::ncep_north();
        let (x, y) = proj.forward(0.0, 90.0).unwrap();
        assert!(x.abs() < 1e-6);
        assert!(y.abs() < 1e-6);
    }

    #[test]
    fn test_central_meridian_points_down() {
        let proj = PolarStereographic::ncep_north();
        // On the central meridian, x = 0 and y < 0 (grid north up the meridian)
        let (x, y) = proj.forward(-105.0, 60.0).unwrap();
        assert!(x.abs() < 1e-6, "x should be ~0, got {}", x);
        assert!(y < 0.0, "y should be negative, got {}", y);
    }

    #[test]
    fn test_roundtrip_north() {
        let proj = PolarStereographic::ncep_north();

        for &(lon, lat) in &[(-105.0, 60.0), (-60.0, 75.0), (10.0, 45.0), (170.0, 82.5)] {
            let (x, y) = proj.forward(lon, lat).unwrap();
            let (lon2, lat2) = proj.inverse(x, y).unwrap();
            assert!((lon - lon2).abs() < 1e-8, "lon roundtrip: {} vs {}", lon, lon2);
            assert!((lat - lat2).abs() < 1e-8, "lat roundtrip: {} vs {}", lat, lat2);
        }
    }

    #[test]
    fn test_roundtrip_south() {
        let proj = PolarStereographic::new(0.0, -71.0, Hemisphere::South);

        let (x, y) = proj.forward(45.0, -80.0).unwrap();
        let (lon, lat) = proj.inverse(x, y).unwrap();
        assert!((lon - 45.0).abs() < 1e-8);
        assert!((lat - (-80.0)).abs() < 1e-8);
    }

    #[test]
    fn test_opposite_pole_fails() {
        let proj = PolarStereographic::ncep_north();
        assert!(proj.forward(0.0, -90.0).is_err());
    }

    #[test]
    fn test_true_scale_distance_sanity() {
        let proj = PolarStereographic::ncep_north();
        // Distance from the pole to 60°N along the central meridian:
        // 2·R·k0·tan(15°) ≈ 3186 km
        let (_, y) = proj.forward(-105.0, 60.0).unwrap();
        assert!((y.abs() - 3.186e6).abs() < 5e4, "got {}", y.abs());
    }
}
