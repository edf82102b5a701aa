//! Grid domain: projection plus grid geometry.

use std::fmt;

use field_common::Extent;
use projection::Projection;

use crate::error::{FieldError, Result};

/// Immutable description of a rectangular grid in a projection's native
/// coordinate system.
///
/// Grid point `(i, j)` sits at native coordinates
/// `(x0 + i·dx, y0 + j·dy)`. Constructed once per forecast read and shared
/// (via `Arc`) by every field on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    projection: Projection,
    nx: usize,
    ny: usize,
    dx: f64,
    dy: f64,
    x0: f64,
    y0: f64,
}

impl Domain {
    /// Create a new domain, rejecting malformed grid geometry.
    pub fn new(
        projection: Projection,
        nx: usize,
        ny: usize,
        dx: f64,
        dy: f64,
        x0: f64,
        y0: f64,
    ) -> Result<Self> {
        if nx == 0 || ny == 0 {
            return Err(FieldError::invalid_geometry(format!(
                "grid dimensions must be at least 1x1, got {}x{}",
                nx, ny
            )));
        }
        if !(dx > 0.0 && dx.is_finite()) || !(dy > 0.0 && dy.is_finite()) {
            return Err(FieldError::invalid_geometry(format!(
                "cell size must be positive and finite, got ({}, {})",
                dx, dy
            )));
        }
        if !x0.is_finite() || !y0.is_finite() {
            return Err(FieldError::invalid_geometry(format!(
                "grid origin must be finite, got ({}, {})",
                x0, y0
            )));
        }

        Ok(Self {
            projection,
            nx,
            ny,
            dx,
            dy,
            x0,
            y0,
        })
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Grid dimensions (nx, ny).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Cell size (dx, dy) in native units.
    pub fn cell_size(&self) -> (f64, f64) {
        (self.dx, self.dy)
    }

    /// Native coordinates of the first grid point.
    pub fn origin(&self) -> (f64, f64) {
        (self.x0, self.y0)
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    pub fn is_empty(&self) -> bool {
        // nx, ny >= 1 is enforced at construction
        false
    }

    /// X axis values: `x[i] = x0 + i·dx`.
    pub fn axis_x(&self) -> Vec<f64> {
        (0..self.nx).map(|i| self.x0 + i as f64 * self.dx).collect()
    }

    /// Y axis values: `y[j] = y0 + j·dy`.
    pub fn axis_y(&self) -> Vec<f64> {
        (0..self.ny).map(|j| self.y0 + j as f64 * self.dy).collect()
    }

    /// Native-coordinate extent covered by the grid points.
    pub fn extent(&self) -> Extent {
        Extent::new(
            self.x0,
            self.y0,
            self.x0 + (self.nx - 1) as f64 * self.dx,
            self.y0 + (self.ny - 1) as f64 * self.dy,
        )
    }

    /// Native extent of an index sub-range, for a zoomed fixed-aspect view.
    ///
    /// Both ranges are inclusive; returns `None` if the range is empty or
    /// falls outside the grid.
    pub fn index_extent(&self, i0: usize, i1: usize, j0: usize, j1: usize) -> Option<Extent> {
        if i0 > i1 || j0 > j1 || i1 >= self.nx || j1 >= self.ny {
            return None;
        }

        Some(Extent::new(
            self.x0 + i0 as f64 * self.dx,
            self.y0 + j0 as f64 * self.dy,
            self.x0 + i1 as f64 * self.dx,
            self.y0 + j1 as f64 * self.dy,
        ))
    }

    /// Native coordinates of grid point `(i, j)`.
    pub fn native_of(&self, i: usize, j: usize) -> Option<(f64, f64)> {
        if i >= self.nx || j >= self.ny {
            return None;
        }

        Some((
            self.x0 + i as f64 * self.dx,
            self.y0 + j as f64 * self.dy,
        ))
    }

    /// Fractional grid indices corresponding to native coordinates `(x, y)`.
    ///
    /// The integer parts identify the cell, the fractional parts the offset
    /// within it. Results outside `[0, nx-1] x [0, ny-1]` are off-grid.
    pub fn to_grid_index(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.x0) / self.dx, (y - self.y0) / self.dy)
    }

    /// Check fractional indices against the grid coverage.
    pub fn contains_index(&self, fi: f64, fj: f64) -> bool {
        fi >= 0.0 && fi <= (self.nx - 1) as f64 && fj >= 0.0 && fj <= (self.ny - 1) as f64
    }

    /// 1D offset of grid point `(i, j)` in a row-major value array
    /// (x varies fastest).
    pub fn flat_index(&self, i: usize, j: usize) -> usize {
        j * self.nx + i
    }

    /// Derive the reduced-resolution domain produced by resampling with the
    /// given stride: `ceil(n/factor)` points per axis, cell size scaled by
    /// `factor`, same origin and projection.
    pub fn coarsened(&self, factor: usize) -> Result<Domain> {
        if factor == 0 {
            return Err(FieldError::invalid_geometry(
                "resample factor must be at least 1",
            ));
        }

        Domain::new(
            self.projection.clone(),
            (self.nx + factor - 1) / factor,
            (self.ny + factor - 1) / factor,
            self.dx * factor as f64,
            self.dy * factor as f64,
            self.x0,
            self.y0,
        )
    }

    /// Approximate geographic bounding box of the grid.
    ///
    /// The grid's geographic outline is generally curved, so corners alone
    /// are not enough; corners and edge samples are combined, as a view hint
    /// for the external renderer.
    pub fn geographic_bounds(&self) -> Result<Extent> {
        let mut min_lon = f64::MAX;
        let mut max_lon = f64::MIN;
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;

        let last_i = (self.nx - 1) as f64;
        let last_j = (self.ny - 1) as f64;

        let mut visit = |fi: f64, fj: f64| -> Result<()> {
            let x = self.x0 + fi * self.dx;
            let y = self.y0 + fj * self.dy;
            let (lon, lat) = self.projection.inverse(x, y)?;
            min_lon = min_lon.min(lon);
            max_lon = max_lon.max(lon);
            min_lat = min_lat.min(lat);
            max_lat = max_lat.max(lat);
            Ok(())
        };

        // Sample along all four edges (corners included)
        for t in 0..=10 {
            let frac = t as f64 / 10.0;
            visit(frac * last_i, 0.0)?;
            visit(frac * last_i, last_j)?;
            visit(0.0, frac * last_j)?;
            visit(last_i, frac * last_j)?;
        }

        Ok(Extent::new(min_lon, min_lat, max_lon, max_lat))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} grid, cell ({}, {}), origin ({}, {})",
            self.nx, self.ny, self.dx, self.dy, self.x0, self.y0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projection::{LambertConformal, LatLon};

    fn unit_domain(nx: usize, ny: usize) -> Domain {
        Domain::new(
            Projection::LatLon(LatLon::new()),
            nx,
            ny,
            1.0,
            1.0,
            0.0,
            0.0,
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let proj = Projection::LatLon(LatLon::new());
        assert!(Domain::new(proj.clone(), 0, 10, 1.0, 1.0, 0.0, 0.0).is_err());
        assert!(Domain::new(proj, 10, 0, 1.0, 1.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_rejects_bad_cell_size() {
        let proj = Projection::LatLon(LatLon::new());
        assert!(Domain::new(proj.clone(), 3, 3, 0.0, 1.0, 0.0, 0.0).is_err());
        assert!(Domain::new(proj.clone(), 3, 3, 1.0, -1.0, 0.0, 0.0).is_err());
        assert!(Domain::new(proj, 3, 3, f64::NAN, 1.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_axes_and_extent() {
        let domain = Domain::new(
            Projection::LatLon(LatLon::new()),
            3,
            2,
            0.5,
            0.25,
            10.0,
            20.0,
        )
        .unwrap();

        assert_eq!(domain.axis_x(), vec![10.0, 10.5, 11.0]);
        assert_eq!(domain.axis_y(), vec![20.0, 20.25]);
        assert_eq!(domain.extent(), Extent::new(10.0, 20.0, 11.0, 20.25));
    }

    #[test]
    fn test_to_grid_index_exact_on_axis_points() {
        let domain = Domain::new(
            Projection::LatLon(LatLon::new()),
            4,
            3,
            0.25,
            0.5,
            -10.0,
            30.0,
        )
        .unwrap();

        for j in 0..3 {
            for i in 0..4 {
                let (x, y) = domain.native_of(i, j).unwrap();
                let (fi, fj) = domain.to_grid_index(x, y);
                assert_eq!(fi, i as f64);
                assert_eq!(fj, j as f64);
                assert_eq!(fi.fract(), 0.0);
                assert_eq!(fj.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_contains_index_boundaries() {
        let domain = unit_domain(3, 3);
        assert!(domain.contains_index(0.0, 0.0));
        assert!(domain.contains_index(2.0, 2.0));
        assert!(!domain.contains_index(-0.001, 1.0));
        assert!(!domain.contains_index(2.001, 1.0));
    }

    #[test]
    fn test_flat_index_row_major() {
        let domain = unit_domain(3, 2);
        assert_eq!(domain.flat_index(0, 0), 0);
        assert_eq!(domain.flat_index(2, 0), 2);
        assert_eq!(domain.flat_index(0, 1), 3);
        assert_eq!(domain.flat_index(2, 1), 5);
    }

    #[test]
    fn test_equality_is_exact() {
        let a = unit_domain(3, 3);
        let b = unit_domain(3, 3);
        let c = Domain::new(
            Projection::LatLon(LatLon::new()),
            3,
            3,
            1.0,
            1.0,
            0.0,
            1e-9,
        )
        .unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_equality_includes_projection() {
        let proj_a = Projection::LatLon(LatLon::new());
        let proj_b = Projection::LambertConformal(LambertConformal::hrrr());
        let a = Domain::new(proj_a, 3, 3, 1.0, 1.0, 0.0, 0.0).unwrap();
        let b = Domain::new(proj_b, 3, 3, 1.0, 1.0, 0.0, 0.0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_coarsened() {
        let domain = unit_domain(5, 4);
        let coarse = domain.coarsened(2).unwrap();

        assert_eq!(coarse.dimensions(), (3, 2));
        assert_eq!(coarse.cell_size(), (2.0, 2.0));
        assert_eq!(coarse.origin(), domain.origin());
        assert_eq!(coarse.projection(), domain.projection());
    }

    #[test]
    fn test_index_extent() {
        let domain = unit_domain(10, 10);
        let ext = domain.index_extent(2, 4, 3, 6).unwrap();
        assert_eq!(ext, Extent::new(2.0, 3.0, 4.0, 6.0));

        assert!(domain.index_extent(4, 2, 0, 0).is_none());
        assert!(domain.index_extent(0, 10, 0, 0).is_none());
    }

    #[test]
    fn test_geographic_bounds_latlon_identity() {
        let domain = Domain::new(
            Projection::LatLon(LatLon::new()),
            11,
            5,
            1.0,
            1.0,
            -100.0,
            30.0,
        )
        .unwrap();

        let bounds = domain.geographic_bounds().unwrap();
        assert!((bounds.min_x - (-100.0)).abs() < 1e-9);
        assert!((bounds.max_x - (-90.0)).abs() < 1e-9);
        assert!((bounds.min_y - 30.0).abs() < 1e-9);
        assert!((bounds.max_y - 34.0).abs() < 1e-9);
    }
}
