//! Point interpolation of fields at station locations.

use field_common::StationPoint;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::field::GeoField;

/// Interpolation method for point sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMethod {
    /// Bilinear interpolation over the four surrounding grid points.
    #[default]
    Bilinear,
    /// Value of the grid point whose center is nearest in native
    /// coordinates; distance ties resolve to the smaller row-major index.
    Nearest,
}

impl InterpolationMethod {
    /// Parse from string (case-insensitive), defaulting to bilinear.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "nearest" => Self::Nearest,
            _ => Self::Bilinear,
        }
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bilinear => write!(f, "bilinear"),
            Self::Nearest => write!(f, "nearest"),
        }
    }
}

/// Result of sampling a field at one station.
///
/// `value` is `None` when the station falls outside the grid coverage, the
/// transform fails, or the surrounding grid values are missing. Off-grid
/// stations are expected input, not errors; a batch always yields one
/// sample per station in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub station: StationPoint,
    pub value: Option<f32>,
}

impl Sample {
    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }
}

/// Sample a field at a list of stations.
///
/// Stations are independent, so the batch fans out in parallel; the output
/// order matches the input order regardless.
pub fn interpolate(
    field: &GeoField,
    points: &[StationPoint],
    method: InterpolationMethod,
) -> Vec<Sample> {
    points
        .par_iter()
        .map(|point| sample_one(field, point, method))
        .collect()
}

fn sample_one(field: &GeoField, point: &StationPoint, method: InterpolationMethod) -> Sample {
    let station = point.clone();
    let domain = field.domain();

    let (x, y) = match domain.projection().forward(point.lon, point.lat) {
        Ok(native) => native,
        Err(_) => return Sample {
            station,
            value: None,
        },
    };

    let (fi, fj) = domain.to_grid_index(x, y);
    if !domain.contains_index(fi, fj) {
        // No extrapolation off the grid
        return Sample {
            station,
            value: None,
        };
    }

    let (nx, ny) = domain.dimensions();
    let value = match method {
        InterpolationMethod::Bilinear => bilinear(field.values(), nx, ny, fi, fj),
        InterpolationMethod::Nearest => {
            let i = nearest_index(fi);
            let j = nearest_index(fj);
            field.values()[j * nx + i]
        }
    };

    Sample {
        station,
        value: (!value.is_nan()).then_some(value),
    }
}

/// Bilinear interpolation at fractional indices within the grid.
///
/// Exact grid points degenerate to the stored value; a NaN anywhere in the
/// stencil yields NaN.
fn bilinear(values: &[f32], nx: usize, ny: usize, fi: f64, fj: f64) -> f32 {
    let i0 = fi.floor() as usize;
    let j0 = fj.floor() as usize;
    let i1 = (i0 + 1).min(nx - 1);
    let j1 = (j0 + 1).min(ny - 1);

    let xf = (fi - i0 as f64) as f32;
    let yf = (fj - j0 as f64) as f32;

    let v00 = values[j0 * nx + i0];
    let v10 = values[j0 * nx + i1];
    let v01 = values[j1 * nx + i0];
    let v11 = values[j1 * nx + i1];

    if v00.is_nan() || v10.is_nan() || v01.is_nan() || v11.is_nan() {
        return f32::NAN;
    }

    let top = v00 * (1.0 - xf) + v10 * xf;
    let bottom = v01 * (1.0 - xf) + v11 * xf;
    top * (1.0 - yf) + bottom * yf
}

/// Nearest integer index with midpoint ties resolved downward.
fn nearest_index(f: f64) -> usize {
    (f - 0.5).ceil().max(0.0) as usize
}
