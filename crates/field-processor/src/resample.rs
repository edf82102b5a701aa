//! Resolution reduction for preview rendering.
//!
//! Resampling exists to cut render cost; analytical products (means,
//! anomalies) must always be computed from the un-resampled field.

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, Result};
use crate::field::GeoField;

/// Method used to reduce grid resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResampleMethod {
    /// Pick every factor-th row and column. Fast, preserves exact values,
    /// and keeps the output axes an exact subset of the source axes.
    #[default]
    Subsample,
    /// NaN-aware average of each factor x factor block. Smoother previews
    /// at the cost of value changes; block edges at the grid boundary are
    /// clipped rather than padded.
    BlockMean,
}

/// Reduce a field's resolution by an integer stride.
///
/// The output domain has `ceil(nx/factor) x ceil(ny/factor)` points, cell
/// size scaled by `factor`, and the same origin and projection as the
/// source. A factor of 1 returns a field equal to the input.
pub fn resample(field: &GeoField, factor: usize, method: ResampleMethod) -> Result<GeoField> {
    if factor == 0 {
        return Err(FieldError::invalid_geometry(
            "resample factor must be at least 1",
        ));
    }
    if factor == 1 {
        return Ok(field.clone());
    }

    let (nx, ny) = field.domain().dimensions();
    let coarse = field.domain().coarsened(factor)?;
    let (out_nx, out_ny) = coarse.dimensions();

    let src = field.values();
    let mut output = vec![f32::NAN; out_nx * out_ny];

    for out_j in 0..out_ny {
        for out_i in 0..out_nx {
            let in_i = out_i * factor;
            let in_j = out_j * factor;

            output[out_j * out_nx + out_i] = match method {
                ResampleMethod::Subsample => src[in_j * nx + in_i],
                ResampleMethod::BlockMean => {
                    block_mean(src, nx, in_i, in_j, (in_i + factor).min(nx), (in_j + factor).min(ny))
                }
            };
        }
    }

    tracing::debug!(
        factor,
        method = ?method,
        src_dims = ?(nx, ny),
        out_dims = ?(out_nx, out_ny),
        "resampled field"
    );

    Ok(GeoField::from_parts(
        std::sync::Arc::new(coarse),
        output,
        field.units().to_string(),
    ))
}

/// NaN-aware mean over the half-open block `[i0, i1) x [j0, j1)`.
///
/// If every value in the block is NaN, returns NaN.
fn block_mean(src: &[f32], nx: usize, i0: usize, j0: usize, i1: usize, j1: usize) -> f32 {
    let mut sum = 0.0f64;
    let mut count = 0u32;

    for j in j0..j1 {
        for i in i0..i1 {
            let v = src[j * nx + i];
            if !v.is_nan() {
                sum += v as f64;
                count += 1;
            }
        }
    }

    if count == 0 {
        f32::NAN
    } else {
        (sum / count as f64) as f32
    }
}
