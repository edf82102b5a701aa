//! Scalar raster fields bound to a domain.

use std::sync::Arc;

use crate::domain::Domain;
use crate::error::{FieldError, Result};

/// A 2D scalar field on a shared domain.
///
/// Values are stored row-major with x varying fastest: the value at grid
/// point `(i, j)` sits at offset `j * nx + i`. Values are physical (any
/// packing scale/offset was applied by the reader); missing data is NaN.
#[derive(Debug, Clone)]
pub struct GeoField {
    domain: Arc<Domain>,
    values: Vec<f32>,
    units: String,
}

impl GeoField {
    /// Create a new field, rejecting a value array that does not match the
    /// domain shape.
    pub fn new(domain: Arc<Domain>, values: Vec<f32>, units: impl Into<String>) -> Result<Self> {
        if values.len() != domain.len() {
            return Err(FieldError::ShapeMismatch {
                expected: domain.len(),
                actual: values.len(),
            });
        }

        Ok(Self {
            domain,
            values,
            units: units.into(),
        })
    }

    /// Internal constructor for derived fields whose shape is correct by
    /// construction.
    pub(crate) fn from_parts(domain: Arc<Domain>, values: Vec<f32>, units: String) -> Self {
        debug_assert_eq!(values.len(), domain.len());
        Self {
            domain,
            values,
            units,
        }
    }

    pub fn domain(&self) -> &Arc<Domain> {
        &self.domain
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at integer grid indices `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        let (nx, ny) = self.domain.dimensions();
        if i >= nx || j >= ny {
            return None;
        }
        self.values.get(self.domain.flat_index(i, j)).copied()
    }

    /// Check that two fields share one domain.
    pub fn same_domain(&self, other: &GeoField) -> bool {
        Arc::ptr_eq(&self.domain, &other.domain) || self.domain == other.domain
    }

    /// Pointwise `v * scale + offset` with a new unit tag.
    ///
    /// Covers physical unit conversion: Kelvin to Celsius is an offset,
    /// geopotential to height a scale.
    pub fn converted(&self, scale: f64, offset: f64, units: impl Into<String>) -> GeoField {
        let values = self
            .values
            .iter()
            .map(|&v| (v as f64 * scale + offset) as f32)
            .collect();

        GeoField::from_parts(self.domain.clone(), values, units.into())
    }

    /// Elementwise difference between two fields on one domain.
    ///
    /// Fields on unequal domains must not be combined; that case fails with
    /// `DomainMismatch` rather than coercing grids.
    pub fn sub_field(&self, other: &GeoField) -> Result<GeoField> {
        if !self.same_domain(other) {
            return Err(FieldError::domain_mismatch(
                self.domain.to_string(),
                other.domain.to_string(),
            ));
        }

        let values = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(&a, &b)| a - b)
            .collect();

        Ok(GeoField::from_parts(
            self.domain.clone(),
            values,
            self.units.clone(),
        ))
    }

    /// Elementwise difference against a scalar (e.g., a reference mean).
    pub fn sub_scalar(&self, rhs: f32) -> GeoField {
        let values = self.values.iter().map(|&v| v - rhs).collect();
        GeoField::from_parts(self.domain.clone(), values, self.units.clone())
    }
}
