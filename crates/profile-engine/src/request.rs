//! Sweep requests and the parameter resolver.
//!
//! [`ProfileParams`] is the raw user-facing form: every field optional, one
//! numeric `option` selecting what varies. Resolution fills omitted fields
//! from [`Defaults`], validates the option against the arity's legal set
//! and the declared ranges, and produces an immutable request consumed by
//! the grid builder. Resolution is a pure transformation: physically
//! unusual but representable values (0 km altitude, ±90° latitude) pass
//! through untouched; only the option and range invariants can fail.

use hwm_common::{ApIndex, EvaluationPoint};
use serde::{Deserialize, Serialize};

use crate::defaults::Defaults;
use crate::error::{ProfileError, Result};
use crate::grid::AxisRange;

/// A physical dimension a sweep can vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Altitude,
    Latitude,
    Time,
    Longitude,
}

impl Dimension {
    /// 1-D profile option table: 1 = altitude, 2 = latitude, 3 = time
    /// (universal time), 4 = longitude.
    pub fn from_option(option: u8) -> Option<Self> {
        match option {
            1 => Some(Self::Altitude),
            2 => Some(Self::Latitude),
            3 => Some(Self::Time),
            4 => Some(Self::Longitude),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Altitude => "altitude",
            Self::Latitude => "latitude",
            Self::Time => "time",
            Self::Longitude => "longitude",
        }
    }

    /// Overwrite this dimension's field on an evaluation point.
    pub fn apply(&self, point: &mut EvaluationPoint, value: f64) {
        match self {
            Self::Altitude => point.altitude_km = value,
            Self::Latitude => point.latitude_deg = value,
            Self::Time => point.ut_hours = value,
            Self::Longitude => point.longitude_deg = value,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Axis pair for a 2-D sweep option. Axis 1 is the matrix row axis.
///
/// | option | axis 1   | axis 2    |
/// |--------|----------|-----------|
/// | 1      | altitude | time      |
/// | 2      | altitude | latitude  |
/// | 4      | altitude | longitude |
/// | 6      | latitude | longitude |
pub fn axes_for_option(option: u8) -> Option<(Dimension, Dimension)> {
    match option {
        1 => Some((Dimension::Altitude, Dimension::Time)),
        2 => Some((Dimension::Altitude, Dimension::Latitude)),
        4 => Some((Dimension::Altitude, Dimension::Longitude)),
        6 => Some((Dimension::Latitude, Dimension::Longitude)),
        _ => None,
    }
}

/// Raw sweep parameters. Omitted fields fall back to the reference
/// scenario during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileParams {
    /// Sweep selector: 1–4 for 1-D profiles, {1, 2, 4, 6} for 2-D arrays.
    pub option: u8,
    pub year: Option<i32>,
    pub day_of_year: Option<u32>,
    pub ut_hours: Option<f64>,
    pub latitude_deg: Option<f64>,
    pub longitude_deg: Option<f64>,
    pub altitude_km: Option<f64>,
    pub ap: Option<ApIndex>,
    pub solar_local_time: Option<f64>,
    pub f107: Option<f64>,
    pub f107a: Option<f64>,
    pub altitude_range: Option<AxisRange>,
    pub latitude_range: Option<AxisRange>,
    pub longitude_range: Option<AxisRange>,
    pub time_range: Option<AxisRange>,
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self {
            option: 1,
            year: None,
            day_of_year: None,
            ut_hours: None,
            latitude_deg: None,
            longitude_deg: None,
            altitude_km: None,
            ap: None,
            solar_local_time: None,
            f107: None,
            f107a: None,
            altitude_range: None,
            latitude_range: None,
            longitude_range: None,
            time_range: None,
        }
    }
}

impl ProfileParams {
    /// Resolve into a 1-D request using the reference-scenario defaults.
    pub fn resolve(&self) -> Result<ProfileRequest> {
        self.resolve_with(&Defaults::REFERENCE)
    }

    /// Resolve into a 1-D request using the given defaults.
    pub fn resolve_with(&self, defaults: &Defaults) -> Result<ProfileRequest> {
        let dimension =
            Dimension::from_option(self.option).ok_or(ProfileError::InvalidOption {
                option: self.option,
                expected: "1, 2, 3 or 4",
            })?;

        let range = self.range_for(dimension, defaults, false);
        range.validate(dimension.name())?;

        let mut base = self.base_point(defaults);
        // Solar local time is meaningless when UT or longitude vary.
        if matches!(dimension, Dimension::Time | Dimension::Longitude) {
            base.solar_local_time = -1.0;
        }

        Ok(ProfileRequest {
            dimension,
            range,
            base,
        })
    }

    /// Resolve into a 2-D request using the reference-scenario defaults.
    pub fn resolve2d(&self) -> Result<ProfileRequest2D> {
        self.resolve2d_with(&Defaults::REFERENCE)
    }

    /// Resolve into a 2-D request using the given defaults.
    pub fn resolve2d_with(&self, defaults: &Defaults) -> Result<ProfileRequest2D> {
        let axes = axes_for_option(self.option).ok_or(ProfileError::InvalidOption {
            option: self.option,
            expected: "1, 2, 4 or 6",
        })?;

        let range1 = self.range_for(axes.0, defaults, true);
        let range2 = self.range_for(axes.1, defaults, true);
        range1.validate(axes.0.name())?;
        range2.validate(axes.1.name())?;

        let mut base = self.base_point(defaults);
        if [axes.0, axes.1]
            .into_iter()
            .any(|d| matches!(d, Dimension::Time | Dimension::Longitude))
        {
            base.solar_local_time = -1.0;
        }

        Ok(ProfileRequest2D {
            axes,
            range1,
            range2,
            base,
        })
    }

    fn range_for(&self, dimension: Dimension, defaults: &Defaults, two_d: bool) -> AxisRange {
        match dimension {
            Dimension::Altitude => self.altitude_range.unwrap_or(defaults.altitude_range),
            Dimension::Latitude => self.latitude_range.unwrap_or(if two_d {
                defaults.latitude_range_2d
            } else {
                defaults.latitude_range
            }),
            Dimension::Longitude => self.longitude_range.unwrap_or(if two_d {
                defaults.longitude_range_2d
            } else {
                defaults.longitude_range
            }),
            Dimension::Time => self.time_range.unwrap_or(if two_d {
                defaults.time_range_2d
            } else {
                defaults.time_range
            }),
        }
    }

    fn base_point(&self, defaults: &Defaults) -> EvaluationPoint {
        EvaluationPoint {
            year: self.year.unwrap_or(defaults.year),
            day_of_year: self.day_of_year.unwrap_or(defaults.day_of_year),
            ut_hours: self.ut_hours.unwrap_or(defaults.ut_hours),
            latitude_deg: self.latitude_deg.unwrap_or(defaults.latitude_deg),
            longitude_deg: self.longitude_deg.unwrap_or(defaults.longitude_deg),
            altitude_km: self.altitude_km.unwrap_or(defaults.altitude_km),
            ap: self.ap.unwrap_or(defaults.ap),
            solar_local_time: self.solar_local_time.unwrap_or(defaults.solar_local_time),
            f107: self.f107.unwrap_or(defaults.f107),
            f107a: self.f107a.unwrap_or(defaults.f107a),
        }
    }
}

/// A validated 1-D sweep: one varying dimension, everything else fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub dimension: Dimension,
    pub range: AxisRange,
    /// Fixed values for every dimension; the varying field is overwritten
    /// per grid point.
    pub base: EvaluationPoint,
}

impl ProfileRequest {
    /// The evaluation point for one bin value.
    pub fn point_at(&self, value: f64) -> EvaluationPoint {
        let mut point = self.base;
        self.dimension.apply(&mut point, value);
        point
    }

    /// Ordered `(bin, point)` pairs covering the range.
    pub fn grid(&self) -> impl Iterator<Item = (f64, EvaluationPoint)> + '_ {
        self.range
            .bins()
            .into_iter()
            .map(move |value| (value, self.point_at(value)))
    }
}

/// A validated 2-D sweep: two varying dimensions, everything else fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileRequest2D {
    /// `(axis 1, axis 2)`; axis 1 is the matrix row axis.
    pub axes: (Dimension, Dimension),
    pub range1: AxisRange,
    pub range2: AxisRange,
    pub base: EvaluationPoint,
}

impl ProfileRequest2D {
    /// The evaluation point for one `(axis 1, axis 2)` value pair.
    pub fn point_at(&self, value1: f64, value2: f64) -> EvaluationPoint {
        let mut point = self.base;
        self.axes.0.apply(&mut point, value1);
        self.axes.1.apply(&mut point, value2);
        point
    }

    /// Ordered `((axis 1 value, axis 2 value), point)` triples in row-major
    /// order: axis 1 outer, axis 2 inner. The aggregator derives matrix
    /// indices from this order, so it must not change.
    pub fn grid(&self) -> impl Iterator<Item = ((f64, f64), EvaluationPoint)> + '_ {
        let inner = self.range2.bins();
        self.range1.bins().into_iter().flat_map(move |value1| {
            inner
                .clone()
                .into_iter()
                .map(move |value2| ((value1, value2), self.point_at(value1, value2)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_tables() {
        assert_eq!(Dimension::from_option(1), Some(Dimension::Altitude));
        assert_eq!(Dimension::from_option(2), Some(Dimension::Latitude));
        assert_eq!(Dimension::from_option(3), Some(Dimension::Time));
        assert_eq!(Dimension::from_option(4), Some(Dimension::Longitude));
        assert_eq!(Dimension::from_option(0), None);
        assert_eq!(Dimension::from_option(5), None);

        assert_eq!(
            axes_for_option(1),
            Some((Dimension::Altitude, Dimension::Time))
        );
        assert_eq!(
            axes_for_option(2),
            Some((Dimension::Altitude, Dimension::Latitude))
        );
        assert_eq!(
            axes_for_option(4),
            Some((Dimension::Altitude, Dimension::Longitude))
        );
        assert_eq!(
            axes_for_option(6),
            Some((Dimension::Latitude, Dimension::Longitude))
        );
        assert_eq!(axes_for_option(3), None);
        assert_eq!(axes_for_option(5), None);
    }

    #[test]
    fn test_resolve_fills_reference_defaults() {
        let request = ProfileParams::default().resolve().unwrap();
        assert_eq!(request.dimension, Dimension::Altitude);
        assert_eq!(request.range, Defaults::REFERENCE.altitude_range);
        assert_eq!(request.base.year, 1993);
        assert_eq!(request.base.day_of_year, 323);
        assert_eq!(request.base.latitude_deg, -11.95);
        assert_eq!(request.base.longitude_deg, -76.77);
        assert_eq!(request.base.ap.as_pair(), [-1.0, 35.0]);
        assert_eq!(request.base.f107, -1.0);
    }

    #[test]
    fn test_resolve_explicit_fields_win() {
        let params = ProfileParams {
            option: 2,
            altitude_km: Some(250.0),
            latitude_range: Some(AxisRange::new(-30.0, 30.0, 10.0)),
            year: Some(2023),
            ..ProfileParams::default()
        };
        let request = params.resolve().unwrap();
        assert_eq!(request.dimension, Dimension::Latitude);
        assert_eq!(request.range, AxisRange::new(-30.0, 30.0, 10.0));
        assert_eq!(request.base.altitude_km, 250.0);
        assert_eq!(request.base.year, 2023);
    }

    #[test]
    fn test_resolve_rejects_invalid_option() {
        let params = ProfileParams {
            option: 99,
            ..ProfileParams::default()
        };
        let err = params.resolve().unwrap_err();
        assert!(matches!(err, ProfileError::InvalidOption { option: 99, .. }));

        let err = params.resolve2d().unwrap_err();
        assert!(matches!(err, ProfileError::InvalidOption { option: 99, .. }));

        // 3 and 5 are 1-D-only / dropped selectors for 2-D sweeps.
        let params = ProfileParams {
            option: 3,
            ..ProfileParams::default()
        };
        assert!(params.resolve().is_ok());
        assert!(params.resolve2d().is_err());
    }

    #[test]
    fn test_resolve_rejects_invalid_range() {
        let params = ProfileParams {
            option: 1,
            altitude_range: Some(AxisRange::new(400.0, 0.0, 25.0)),
            ..ProfileParams::default()
        };
        assert!(matches!(
            params.resolve().unwrap_err(),
            ProfileError::InvalidRange { axis: "altitude", .. }
        ));

        let params = ProfileParams {
            option: 6,
            longitude_range: Some(AxisRange::new(-180.0, 180.0, 0.0)),
            ..ProfileParams::default()
        };
        assert!(matches!(
            params.resolve2d().unwrap_err(),
            ProfileError::InvalidRange { axis: "longitude", .. }
        ));
    }

    #[test]
    fn test_time_and_longitude_sweeps_drop_solar_local_time() {
        let params = ProfileParams {
            option: 3,
            solar_local_time: Some(14.5),
            ..ProfileParams::default()
        };
        assert_eq!(params.resolve().unwrap().base.solar_local_time, -1.0);

        let params = ProfileParams {
            option: 4,
            solar_local_time: Some(14.5),
            ..ProfileParams::default()
        };
        assert_eq!(params.resolve().unwrap().base.solar_local_time, -1.0);

        // An altitude sweep keeps it.
        let params = ProfileParams {
            option: 1,
            solar_local_time: Some(14.5),
            ..ProfileParams::default()
        };
        assert_eq!(params.resolve().unwrap().base.solar_local_time, 14.5);
    }

    #[test]
    fn test_2d_resolution_uses_wide_default_axes() {
        let params = ProfileParams {
            option: 6,
            ..ProfileParams::default()
        };
        let request = params.resolve2d().unwrap();
        assert_eq!(request.range1, Defaults::REFERENCE.latitude_range_2d);
        assert_eq!(request.range2, Defaults::REFERENCE.longitude_range_2d);
    }

    #[test]
    fn test_grid_holds_fixed_dimensions() {
        let params = ProfileParams {
            option: 1,
            altitude_range: Some(AxisRange::new(100.0, 120.0, 10.0)),
            ..ProfileParams::default()
        };
        let request = params.resolve().unwrap();
        let points: Vec<_> = request.grid().collect();
        assert_eq!(points.len(), 3);
        for (bin, point) in &points {
            assert_eq!(point.altitude_km, *bin);
            assert_eq!(point.latitude_deg, -11.95);
            assert_eq!(point.longitude_deg, -76.77);
            assert_eq!(point.ut_hours, 12.0);
        }
    }

    #[test]
    fn test_2d_grid_is_row_major() {
        let params = ProfileParams {
            option: 2,
            altitude_range: Some(AxisRange::new(100.0, 120.0, 10.0)),
            latitude_range: Some(AxisRange::new(-10.0, 10.0, 10.0)),
            ..ProfileParams::default()
        };
        let request = params.resolve2d().unwrap();
        let cells: Vec<_> = request.grid().map(|(values, _)| values).collect();
        assert_eq!(
            cells,
            vec![
                (100.0, -10.0),
                (100.0, 0.0),
                (100.0, 10.0),
                (110.0, -10.0),
                (110.0, 0.0),
                (110.0, 10.0),
                (120.0, -10.0),
                (120.0, 0.0),
                (120.0, 10.0),
            ]
        );

        let (_, point) = request.grid().nth(4).unwrap();
        assert_eq!(point.altitude_km, 110.0);
        assert_eq!(point.latitude_deg, 0.0);
        assert_eq!(point.longitude_deg, -76.77);
    }
}
