//! Incremental aggregation over field time series.
//!
//! Long series (months of daily fields) are reduced one field at a time so
//! callers never have to materialize the whole stack; the accumulator holds
//! one sum and one count per cell, nothing else.

use std::sync::Arc;

use field_common::ValidTime;

use crate::domain::Domain;
use crate::error::{FieldError, Result};
use crate::field::GeoField;

/// Fold-style mean accumulator over fields sharing one domain.
///
/// NaN cells are skipped per cell, so a value missing in one field does not
/// poison the mean of the others. Accumulation order only affects the
/// result through floating-point rounding.
#[derive(Debug, Clone, Default)]
pub struct FieldAccumulator {
    domain: Option<Arc<Domain>>,
    units: String,
    sum: Vec<f64>,
    count: Vec<u32>,
    fields: usize,
}

impl FieldAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields folded in so far.
    pub fn fields(&self) -> usize {
        self.fields
    }

    /// Fold one field into the running aggregate.
    ///
    /// The first field fixes the domain and unit; any later field on an
    /// unequal domain fails with `DomainMismatch`.
    pub fn push(&mut self, field: &GeoField) -> Result<()> {
        match &self.domain {
            None => {
                self.domain = Some(field.domain().clone());
                self.units = field.units().to_string();
                self.sum = vec![0.0; field.len()];
                self.count = vec![0; field.len()];
            }
            Some(domain) => {
                if **domain != **field.domain() {
                    return Err(FieldError::domain_mismatch(
                        domain.to_string(),
                        field.domain().to_string(),
                    ));
                }
            }
        }

        for (k, &v) in field.values().iter().enumerate() {
            if !v.is_nan() {
                self.sum[k] += v as f64;
                self.count[k] += 1;
            }
        }
        self.fields += 1;

        Ok(())
    }

    /// The per-cell mean of everything folded so far.
    ///
    /// `None` before the first push. Cells that were NaN in every field
    /// stay NaN.
    pub fn mean(&self) -> Option<GeoField> {
        let domain = self.domain.clone()?;

        let values = self
            .sum
            .iter()
            .zip(self.count.iter())
            .map(|(&sum, &count)| {
                if count == 0 {
                    f32::NAN
                } else {
                    (sum / count as f64) as f32
                }
            })
            .collect();

        tracing::debug!(fields = self.fields, "computed running mean");

        Some(GeoField::from_parts(domain, values, self.units.clone()))
    }
}

/// An ordered sequence of time-stamped fields on one domain.
///
/// The order is the caller's (normally chronological append); aggregation
/// folds through a [`FieldAccumulator`] rather than holding any separate
/// tabular state.
#[derive(Debug, Clone, Default)]
pub struct FieldSeries {
    entries: Vec<(ValidTime, GeoField)>,
}

impl FieldSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, time: ValidTime, field: GeoField) {
        self.entries.push((time, field));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ValidTime, GeoField)> {
        self.entries.iter()
    }

    /// Mean field over the series; `None` for an empty series.
    pub fn mean(&self) -> Result<Option<GeoField>> {
        let mut acc = FieldAccumulator::new();
        for (_, field) in &self.entries {
            acc.push(field)?;
        }
        Ok(acc.mean())
    }

    /// Per-entry anomaly against the series mean.
    pub fn anomalies(&self) -> Result<Vec<(ValidTime, GeoField)>> {
        let mean = match self.mean()? {
            Some(mean) => mean,
            None => return Ok(Vec::new()),
        };

        self.entries
            .iter()
            .map(|(time, field)| Ok((*time, field.sub_field(&mean)?)))
            .collect()
    }
}
