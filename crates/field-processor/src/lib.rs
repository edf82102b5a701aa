//! Georeferenced forecast fields and their derived products.
//!
//! This crate carries a 2D forecast field from an external reader to an
//! external renderer. It owns the grid/domain data model and the three
//! derived products the renderer and analysis passes need:
//!
//! - **Resampling**: reduced-resolution fields for fast preview rendering
//! - **Point interpolation**: field values at arbitrary station locations
//! - **Reprojection**: station coordinates in the grid's native plane,
//!   for overlay placement
//!
//! # Architecture
//!
//! ```text
//! reader (external)
//!      │  values + grid metadata
//!      ▼
//! Domain ──────────────► GeoField ──┬─► resample() ──► preview GeoField
//!   │  projection + geometry        │
//!   │                               ├─► interpolate() ─► Vec<Sample>
//!   └─► reproject() ─► markers      │
//!                                   └─► FieldAccumulator ─► mean/anomaly
//! ```
//!
//! Everything is a pure function over immutable inputs: fields never mutate
//! in place, batches parallelize per point, and errors come back as typed
//! values rather than logs.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use field_common::StationPoint;
//! use field_processor::{interpolate, Domain, GeoField, InterpolationMethod};
//! use projection::{LatLon, Projection};
//!
//! let domain = Arc::new(Domain::new(
//!     Projection::LatLon(LatLon::new()),
//!     3, 3, 1.0, 1.0, 0.0, 0.0,
//! )?);
//! let field = GeoField::new(domain, (0..9).map(|v| v as f32).collect(), "K")?;
//!
//! let stations = vec![StationPoint::new("mid", 1.5, 1.5)];
//! let samples = interpolate(&field, &stations, InterpolationMethod::Bilinear);
//! assert_eq!(samples[0].value, Some(6.0));
//! # Ok::<(), field_processor::FieldError>(())
//! ```

pub mod aggregate;
pub mod domain;
pub mod error;
pub mod field;
pub mod interpolate;
pub mod reproject;
pub mod resample;

// Re-export commonly used types at crate root
pub use aggregate::{FieldAccumulator, FieldSeries};
pub use domain::Domain;
pub use error::{FieldError, Result};
pub use field::GeoField;
pub use interpolate::{interpolate, InterpolationMethod, Sample};
pub use reproject::{reproject, PlacedPoint};
pub use resample::{resample, ResampleMethod};
