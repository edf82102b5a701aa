//! Lambert Conformal Conic projection.
//!
//! This projection is commonly used for weather data including HRRR.
//! It maps a cone tangent or secant to the Earth's surface onto a flat plane.
//!
//! Native coordinates are meters on the projection plane. The plane origin
//! sits on the central meridian at the reference latitude; a grid's own
//! offset from that origin is carried by the grid geometry, not here.

use std::f64::consts::{FRAC_PI_4, PI};

use serde::{Deserialize, Serialize};

use crate::{normalize_lon_rad, ProjectionError, EARTH_RADIUS_M};

/// Lambert Conformal Conic projection parameters.
///
/// Spherical earth form. Valid for points on the cone's side of the
/// equatorial plane; the pole opposite the standard parallels has no
/// finite image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambertConformal {
    /// Central meridian (LoV) in radians
    pub lon0: f64,
    /// Reference latitude in radians (plane origin latitude)
    pub lat0: f64,
    /// First standard parallel in radians
    pub latin1: f64,
    /// Second standard parallel in radians
    pub latin2: f64,
    /// Earth radius (meters)
    pub earth_radius: f64,
    /// Cone constant (n)
    n: f64,
    /// F constant
    f: f64,
    /// Rho at the reference latitude
    rho0: f64,
}

impl LambertConformal {
    /// Create a new Lambert Conformal projection.
    ///
    /// # Arguments
    /// * `lon0_deg` - Central meridian / orientation of the grid (degrees)
    /// * `lat0_deg` - Reference latitude, the plane origin (degrees)
    /// * `latin1_deg` - First standard parallel (degrees)
    /// * `latin2_deg` - Second standard parallel (degrees, equal to the
    ///   first for a tangent cone)
    pub fn new(lon0_deg: f64, lat0_deg: f64, latin1_deg: f64, latin2_deg: f64) -> Self {
        let lon0 = lon0_deg.to_radians();
        let lat0 = lat0_deg.to_radians();
        let latin1 = latin1_deg.to_radians();
        let latin2 = latin2_deg.to_radians();

        let earth_radius = EARTH_RADIUS_M;

        // Compute cone constant n
        let n = if (latin1 - latin2).abs() < 1e-10 {
            // Tangent cone (single standard parallel)
            latin1.sin()
        } else {
            // Secant cone (two standard parallels)
            let ln_ratio = (latin1.cos() / latin2.cos()).ln();
            let tan_ratio =
                ((FRAC_PI_4 + latin2 / 2.0).tan() / (FRAC_PI_4 + latin1 / 2.0).tan()).ln();
            ln_ratio / tan_ratio
        };

        // Compute F constant
        let f = (latin1.cos() * (FRAC_PI_4 + latin1 / 2.0).tan().powf(n)) / n;

        // Rho at the reference latitude
        let rho0 = earth_radius * f / (FRAC_PI_4 + lat0 / 2.0).tan().powf(n);

        Self {
            lon0,
            lat0,
            latin1,
            latin2,
            earth_radius,
            n,
            f,
            rho0,
        }
    }

    /// HRRR CONUS projection: tangent cone at 38.5°N, central meridian 97.5°W.
    pub fn hrrr() -> Self {
        Self::new(-97.5, 38.5, 38.5, 38.5)
    }

    /// Convert geographic coordinates (degrees) to plane coordinates (meters).
    pub fn forward(&self, lon_deg: f64, lat_deg: f64) -> Result<(f64, f64), ProjectionError> {
        let lat = lat_deg.to_radians();
        let lon = lon_deg.to_radians();

        let outside = ProjectionError::OutsideValidRegion {
            lon: lon_deg,
            lat: lat_deg,
        };

        // tan(π/4 + φ/2) is non-positive outside [-90°, 90°]; a negative
        // base under powf would produce NaN rather than a clean failure.
        let t = (FRAC_PI_4 + lat / 2.0).tan();
        if !(t >= 0.0) {
            return Err(outside);
        }

        let dlon = normalize_lon_rad(lon - self.lon0);

        // Compute rho for this latitude
        let rho = self.earth_radius * self.f / t.powf(self.n);

        // Compute theta (angle from central meridian)
        let theta = self.n * dlon;

        let x = rho * theta.sin();
        let y = self.rho0 - rho * theta.cos();

        // The pole opposite the cone maps to infinity
        if !x.is_finite() || !y.is_finite() {
            return Err(outside);
        }

        Ok((x, y))
    }

    /// Convert plane coordinates (meters) back to geographic coordinates (degrees).
    pub fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjectionError> {
        let dy = self.rho0 - y;

        let mut rho = (x * x + dy * dy).sqrt();
        if self.n < 0.0 {
            rho = -rho;
        }

        // rho == 0 is the pole under the cone apex
        if rho == 0.0 {
            let pole = if self.n >= 0.0 { 90.0 } else { -90.0 };
            return Ok((self.lon0.to_degrees(), pole));
        }

        let theta = if self.n >= 0.0 {
            x.atan2(dy)
        } else {
            (-x).atan2(-dy)
        };

        let lat = 2.0 * (self.earth_radius * self.f / rho).powf(1.0 / self.n).atan() - PI / 2.0;
        let lon = normalize_lon_rad(self.lon0 + theta / self.n);

        if !lat.is_finite() {
            return Err(ProjectionError::NoPreimage { x, y });
        }

        Ok((lon.to_degrees(), lat.to_degrees()))
    }
}
