//! Deterministic stand-in wind models.

use hwm_common::{ModelError, ModelInput, RawWinds, WindModel, WindVector};

/// Analytic model whose winds are linear in the inputs.
///
/// Components are chosen so tests can predict every value exactly:
///
/// ```text
/// quiet meridional = 0.1  * alt_km - 0.5  * lat_deg
/// quiet zonal      = 0.05 * alt_km + 0.25 * lon_deg + ut_hours
/// ```
///
/// The disturbance is `(1.5, -2.5)` under climatological averaging
/// (mode flag < 0) and `(0.01 * ap, -0.02 * ap)` with the storm-time
/// correction enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearWindModel;

impl WindModel for LinearWindModel {
    fn evaluate(&self, input: &ModelInput) -> Result<RawWinds, ModelError> {
        let ut_hours = input.sec / 3600.0;
        let quiet = WindVector {
            meridional: 0.1 * input.altitude_km - 0.5 * input.latitude_deg,
            zonal: 0.05 * input.altitude_km + 0.25 * input.longitude_deg + ut_hours,
        };
        let disturbed = if input.ap[0] >= 0.0 {
            WindVector {
                meridional: 0.01 * input.ap[1],
                zonal: -0.02 * input.ap[1],
            }
        } else {
            WindVector {
                meridional: 1.5,
                zonal: -2.5,
            }
        };
        Ok(RawWinds { quiet, disturbed })
    }

    fn magnetic_local_time(
        &self,
        _latitude_deg: f64,
        longitude_deg: f64,
        _day_of_year: u32,
        ut_hours: f64,
    ) -> Option<f64> {
        Some((ut_hours + longitude_deg / 15.0).rem_euclid(24.0))
    }
}

/// Fails above a configurable altitude ceiling; points below delegate to
/// [`LinearWindModel`]. Used to exercise error propagation mid-sweep.
#[derive(Debug, Clone, Copy)]
pub struct CeilingWindModel {
    pub max_altitude_km: f64,
}

impl WindModel for CeilingWindModel {
    fn evaluate(&self, input: &ModelInput) -> Result<RawWinds, ModelError> {
        if input.altitude_km > self.max_altitude_km {
            return Err(ModelError::out_of_domain(format!(
                "altitude {} km above ceiling {} km",
                input.altitude_km, self.max_altitude_km
            )));
        }
        LinearWindModel.evaluate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(altitude_km: f64) -> ModelInput {
        ModelInput {
            iyd: 93323,
            sec: 12.0 * 3600.0,
            altitude_km,
            latitude_deg: -10.0,
            longitude_deg: 20.0,
            solar_local_time: -1.0,
            f107a: -1.0,
            f107: -1.0,
            ap: [-1.0, 35.0],
        }
    }

    #[test]
    fn test_linear_model_is_deterministic() {
        let a = LinearWindModel.evaluate(&input(200.0)).unwrap();
        let b = LinearWindModel.evaluate(&input(200.0)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.quiet.meridional, 0.1 * 200.0 + 5.0);
        assert_eq!(a.quiet.zonal, 0.05 * 200.0 + 5.0 + 12.0);
        assert_eq!(a.disturbed.zonal, -2.5);
    }

    #[test]
    fn test_storm_time_disturbance_scales_with_ap() {
        let mut storm = input(200.0);
        storm.ap = [48.0, 48.0];
        let winds = LinearWindModel.evaluate(&storm).unwrap();
        assert_eq!(winds.disturbed.meridional, 0.48);
        assert_eq!(winds.disturbed.zonal, -0.96);
    }

    #[test]
    fn test_ceiling_model_rejects_high_altitudes() {
        let model = CeilingWindModel {
            max_altitude_km: 150.0,
        };
        assert!(model.evaluate(&input(150.0)).is_ok());
        let err = model.evaluate(&input(160.0)).unwrap_err();
        assert!(matches!(err, ModelError::OutOfDomain(_)));
    }

    #[test]
    fn test_magnetic_local_time_wraps_to_day() {
        let mlt = LinearWindModel
            .magnetic_local_time(0.0, -76.77, 323, 2.0)
            .unwrap();
        assert!((0.0..24.0).contains(&mlt));
        assert!((mlt - (2.0 - 76.77 / 15.0 + 24.0)).abs() < 1e-9);
    }
}
