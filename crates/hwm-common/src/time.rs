//! Calendar helpers for building model inputs.
//!
//! The engine works in year / day-of-year / decimal-hours space. These
//! helpers convert from `chrono` types for callers that start from wall
//! clock timestamps.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Timelike, Utc};

/// Day of year for a calendar date, `1..=366`.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Clock time as decimal hours, e.g. 11:40:00 -> 11.666...
pub fn decimal_hours(time: NaiveTime) -> f64 {
    f64::from(time.hour())
        + f64::from(time.minute()) / 60.0
        + f64::from(time.second()) / 3600.0
}

/// Split a UTC timestamp into `(year, day_of_year, ut_hours)`.
pub fn instant_parts(instant: DateTime<Utc>) -> (i32, u32, f64) {
    (
        instant.year(),
        instant.ordinal(),
        decimal_hours(instant.time()),
    )
}
