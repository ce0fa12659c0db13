//! Common types shared across the hwm-wind workspace.
//!
//! This crate holds the domain vocabulary (evaluation points, wind samples,
//! geomagnetic activity pairs), the [`WindModel`] boundary trait that the
//! profile engine drives, and small calendar helpers for converting wall
//! clock times into the year / day-of-year / decimal-hours form the model
//! consumes.

pub mod model;
pub mod point;
pub mod time;

pub use model::{ModelError, ModelInput, RawWinds, WindModel, WindVector};
pub use point::{ApIndex, EvaluationPoint, WindSample};
pub use time::{day_of_year, decimal_hours, instant_parts};
