//! Reference-scenario defaults for omitted request fields.
//!
//! The values reproduce the scenario used throughout the model's reference
//! documentation: 1993 day 323 (19 November) at 12.0 UT over Jicamarca
//! (11.95° S, 76.77° W), 300 km altitude, ap pair `[-1, 35]`.

use hwm_common::ApIndex;
use serde::{Deserialize, Serialize};

use crate::grid::AxisRange;

/// Default values consumed by the parameter resolver.
///
/// Immutable by construction: resolvers copy what they need and nothing
/// ever writes back. Callers with a different reference scenario pass their
/// own instance to `resolve_with`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub year: i32,
    pub day_of_year: u32,
    pub ut_hours: f64,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_km: f64,
    pub ap: ApIndex,
    pub solar_local_time: f64,
    pub f107: f64,
    pub f107a: f64,
    pub altitude_range: AxisRange,
    pub latitude_range: AxisRange,
    pub longitude_range: AxisRange,
    pub time_range: AxisRange,
    /// Wider latitude axis used when two dimensions vary at once.
    pub latitude_range_2d: AxisRange,
    /// Wider longitude axis used when two dimensions vary at once.
    pub longitude_range_2d: AxisRange,
    /// Full-day time axis used when two dimensions vary at once.
    pub time_range_2d: AxisRange,
}

impl Defaults {
    /// The reference scenario.
    pub const REFERENCE: Defaults = Defaults {
        year: 1993,
        day_of_year: 323,
        ut_hours: 12.0,
        latitude_deg: -11.95,
        longitude_deg: -76.77,
        altitude_km: 300.0,
        ap: ApIndex {
            mode: -1.0,
            ap: 35.0,
        },
        solar_local_time: -1.0,
        f107: -1.0,
        f107a: -1.0,
        altitude_range: AxisRange {
            min: 0.0,
            max: 400.0,
            step: 25.0,
        },
        latitude_range: AxisRange {
            min: -10.0,
            max: 10.0,
            step: 2.0,
        },
        longitude_range: AxisRange {
            min: -20.0,
            max: 20.0,
            step: 2.0,
        },
        time_range: AxisRange {
            min: 0.0,
            max: 23.0,
            step: 1.0,
        },
        latitude_range_2d: AxisRange {
            min: -40.0,
            max: 40.0,
            step: 5.0,
        },
        longitude_range_2d: AxisRange {
            min: -40.0,
            max: 40.0,
            step: 5.0,
        },
        time_range_2d: AxisRange {
            min: 0.0,
            max: 24.0,
            step: 1.0,
        },
    };
}

impl Default for Defaults {
    fn default() -> Self {
        Self::REFERENCE
    }
}
