//! Common types shared across the forecast-fields crates.

pub mod extent;
pub mod station;
pub mod time;

pub use extent::Extent;
pub use station::StationPoint;
pub use time::{TimeParseError, ValidTime};
