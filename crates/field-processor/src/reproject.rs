//! Reprojection of station coordinates for overlay placement.
//!
//! Pure coordinate conversion, kept separate from value sampling so marker
//! placement and value extraction compose independently: a label can be
//! drawn at the reprojected coordinate while showing a value produced by
//! the interpolator.

use field_common::{Extent, StationPoint};

use crate::domain::Domain;

/// A station mapped into a domain's native coordinate system.
///
/// `position` is `None` when the transform fails for that point; one bad
/// station never aborts the batch, the renderer just skips the marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPoint {
    pub station: StationPoint,
    pub position: Option<(f64, f64)>,
}

impl PlacedPoint {
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Check whether the marker lands inside a view extent.
    pub fn within(&self, extent: &Extent) -> bool {
        match self.position {
            Some((x, y)) => extent.contains(x, y),
            None => false,
        }
    }
}

/// Map geographic station coordinates into the domain's native coordinates.
///
/// A direct application of the domain projection's forward transform to
/// each point, preserving input order. No interpolation is performed.
pub fn reproject(points: &[StationPoint], domain: &Domain) -> Vec<PlacedPoint> {
    points
        .iter()
        .map(|point| PlacedPoint {
            station: point.clone(),
            position: domain.projection().forward(point.lon, point.lat).ok(),
        })
        .collect()
}
