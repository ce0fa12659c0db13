//! The wind-model boundary.
//!
//! The profile engine never talks to a concrete model directly; it drives
//! anything implementing [`WindModel`]. The trait mirrors the native HWM
//! calling convention: a year-day code, UT seconds, position, solar indices
//! and the geomagnetic activity pair go in, quiet-time and disturbance wind
//! vectors come out. Implementations are expected to be deterministic and
//! side-effect free, and are not required to be thread safe.

use thiserror::Error;

/// Errors surfaced by a model implementation.
///
/// The engine propagates these verbatim: no retry, no fallback value.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The requested point lies outside the model's valid domain.
    #[error("point outside model domain: {0}")]
    OutOfDomain(String),

    /// Any other failure inside the model (missing coefficient data,
    /// degenerate output, native-call failure).
    #[error("model evaluation failed: {0}")]
    EvaluationFailed(String),
}

impl ModelError {
    pub fn out_of_domain(msg: impl Into<String>) -> Self {
        Self::OutOfDomain(msg.into())
    }

    pub fn evaluation_failed(msg: impl Into<String>) -> Self {
        Self::EvaluationFailed(msg.into())
    }
}

/// Inputs for one point evaluation, in the model's native argument forms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelInput {
    /// Century-folded year-day code, `yyddd`.
    pub iyd: i32,
    /// Universal time in seconds of day.
    pub sec: f64,
    pub altitude_km: f64,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Solar local time in hours, `-1` when unused.
    pub solar_local_time: f64,
    /// 81-day average F10.7, `-1` selects the model climatology.
    pub f107a: f64,
    /// F10.7 solar flux index, `-1` selects the model climatology.
    pub f107: f64,
    /// Geomagnetic activity pair `[mode flag, ap]`.
    pub ap: [f64; 2],
}

/// One wind vector, in m/s. Meridional positive northward, zonal positive
/// eastward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindVector {
    pub meridional: f64,
    pub zonal: f64,
}

/// Raw output of one point evaluation: the quiet-time leg and the
/// storm-time disturbance leg, kept separate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawWinds {
    pub quiet: WindVector,
    pub disturbed: WindVector,
}

/// A point-evaluation wind model.
pub trait WindModel {
    /// Evaluate the model at one point.
    fn evaluate(&self, input: &ModelInput) -> Result<RawWinds, ModelError>;

    /// Magnetic local time in hours at the given location and UT.
    ///
    /// Models without quasi-dipole coordinate support return `None`; time
    /// sweeps then simply omit the MLT axis from their results.
    fn magnetic_local_time(
        &self,
        _latitude_deg: f64,
        _longitude_deg: f64,
        _day_of_year: u32,
        _ut_hours: f64,
    ) -> Option<f64> {
        None
    }
}
