//! Evaluation points and wind samples.

use serde::{Deserialize, Serialize};

/// Geomagnetic activity selector, passed to the model as a 2-element pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApIndex {
    /// Mode flag: `-1` selects climatological averaging of the disturbance
    /// winds, any non-negative value enables the storm-time correction.
    pub mode: f64,
    /// 3-hour ap index, consumed when the mode flag requests correction.
    pub ap: f64,
}

impl ApIndex {
    pub fn new(mode: f64, ap: f64) -> Self {
        Self { mode, ap }
    }

    /// Climatological averaging with the given ap index on record.
    pub fn climatological(ap: f64) -> Self {
        Self { mode: -1.0, ap }
    }

    /// Storm-time correction driven by the given ap index.
    pub fn storm(ap: f64) -> Self {
        Self { mode: ap, ap }
    }

    /// The fully quiet pair used for the quiet-time leg of an evaluation.
    pub fn quiet() -> Self {
        Self { mode: -1.0, ap: -1.0 }
    }

    /// The pair in the model's native `[flag, ap]` argument order.
    pub fn as_pair(&self) -> [f64; 2] {
        [self.mode, self.ap]
    }

    /// Whether the storm-time correction is requested.
    pub fn storm_time_enabled(&self) -> bool {
        self.mode >= 0.0
    }
}

impl Default for ApIndex {
    fn default() -> Self {
        Self::climatological(35.0)
    }
}

/// A single point at which the wind model is evaluated.
///
/// Units: altitude in kilometers, latitude/longitude in degrees
/// (`[-90, 90]` / `[-180, 180]`), universal time in decimal hours,
/// day of year in `[1, 366]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationPoint {
    pub year: i32,
    pub day_of_year: u32,
    pub ut_hours: f64,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_km: f64,
    pub ap: ApIndex,
    /// Solar local time in hours, `-1` when unused.
    pub solar_local_time: f64,
    /// F10.7 solar flux index, `-1` selects the model climatology.
    pub f107: f64,
    /// 81-day average F10.7, `-1` selects the model climatology.
    pub f107a: f64,
}

/// Result of one model evaluation, all components in m/s.
///
/// Totals are derived, not stored: quiet-time and disturbance contributions
/// stay separate so diagnostics can break a profile apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    pub quiet_meridional: f64,
    pub quiet_zonal: f64,
    pub disturbed_meridional: f64,
    pub disturbed_zonal: f64,
}

impl WindSample {
    /// Total meridional wind (positive northward).
    pub fn total_meridional(&self) -> f64 {
        self.quiet_meridional + self.disturbed_meridional
    }

    /// Total zonal wind (positive eastward).
    pub fn total_zonal(&self) -> f64 {
        self.quiet_zonal + self.disturbed_zonal
    }
}
