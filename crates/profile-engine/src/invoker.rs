//! Adapter between evaluation points and the model's calling convention.
//!
//! This is the only place the engine crosses into the external model. It
//! folds the year into the `yyddd` code, converts universal time to seconds
//! of day, and flattens the geomagnetic pair into the model's `[flag, ap]`
//! argument order. One grid point means exactly one model invocation: no
//! caching, no retries, and failures propagate untouched.

use hwm_common::{EvaluationPoint, ModelError, ModelInput, WindModel, WindSample};

/// Century-folded `yyddd` code the model expects in place of a full year.
pub fn year_day_code(year: i32, day_of_year: u32) -> i32 {
    let century = if year > 1999 { 2000 } else { 1900 };
    (year - century) * 1000 + day_of_year as i32
}

/// Build the model's native input from an evaluation point.
pub fn model_input(point: &EvaluationPoint) -> ModelInput {
    ModelInput {
        iyd: year_day_code(point.year, point.day_of_year),
        sec: point.ut_hours * 3600.0,
        altitude_km: point.altitude_km,
        latitude_deg: point.latitude_deg,
        longitude_deg: point.longitude_deg,
        solar_local_time: point.solar_local_time,
        f107a: point.f107a,
        f107: point.f107,
        ap: point.ap.as_pair(),
    }
}

/// Evaluate the model at one point and normalize its raw output.
pub fn invoke<M: WindModel + ?Sized>(
    model: &M,
    point: &EvaluationPoint,
) -> Result<WindSample, ModelError> {
    let raw = model.evaluate(&model_input(point))?;
    Ok(WindSample {
        quiet_meridional: raw.quiet.meridional,
        quiet_zonal: raw.quiet.zonal,
        disturbed_meridional: raw.disturbed.meridional,
        disturbed_zonal: raw.disturbed.zonal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwm_common::{ApIndex, RawWinds, WindVector};

    fn reference_point() -> EvaluationPoint {
        EvaluationPoint {
            year: 1993,
            day_of_year: 323,
            ut_hours: 11.66667,
            latitude_deg: -11.95,
            longitude_deg: -76.77,
            altitude_km: 130.0,
            ap: ApIndex::climatological(35.0),
            solar_local_time: -1.0,
            f107: -1.0,
            f107a: -1.0,
        }
    }

    #[test]
    fn test_year_day_code_folds_century() {
        assert_eq!(year_day_code(1993, 323), 93323);
        assert_eq!(year_day_code(1999, 1), 99001);
        assert_eq!(year_day_code(2000, 1), 1);
        assert_eq!(year_day_code(2023, 150), 23150);
    }

    #[test]
    fn test_model_input_units() {
        let input = model_input(&reference_point());
        assert_eq!(input.iyd, 93323);
        assert!((input.sec - 42000.012).abs() < 1e-3);
        assert_eq!(input.altitude_km, 130.0);
        assert_eq!(input.ap, [-1.0, 35.0]);
        assert_eq!(input.solar_local_time, -1.0);
    }

    struct EchoModel;

    impl WindModel for EchoModel {
        fn evaluate(&self, input: &ModelInput) -> Result<RawWinds, ModelError> {
            Ok(RawWinds {
                quiet: WindVector {
                    meridional: input.latitude_deg,
                    zonal: input.longitude_deg,
                },
                disturbed: WindVector {
                    meridional: input.ap[1],
                    zonal: input.sec,
                },
            })
        }
    }

    #[test]
    fn test_invoke_maps_raw_output_without_summing() {
        let sample = invoke(&EchoModel, &reference_point()).unwrap();
        assert_eq!(sample.quiet_meridional, -11.95);
        assert_eq!(sample.quiet_zonal, -76.77);
        assert_eq!(sample.disturbed_meridional, 35.0);
        assert_eq!(sample.disturbed_zonal, 11.66667 * 3600.0);
    }
}
