//! Sweep entry points: resolve, iterate the grid, aggregate.
//!
//! Evaluation is strictly sequential in generation order. The model's
//! point-evaluation routines are treated as non-reentrant, so nothing here
//! dispatches grid points concurrently.

use hwm_common::WindModel;
use tracing::{debug, info};

use crate::error::{ProfileError, Result};
use crate::invoker;
use crate::request::{Dimension, ProfileParams, ProfileRequest, ProfileRequest2D};
use crate::result::{ProfileResult, ProfileResult2D};

/// Run a 1-D sweep from raw parameters against the given model.
pub fn profile<M: WindModel>(params: &ProfileParams, model: &M) -> Result<ProfileResult> {
    run(&params.resolve()?, model)
}

/// Run a resolved 1-D sweep.
pub fn run<M: WindModel>(request: &ProfileRequest, model: &M) -> Result<ProfileResult> {
    info!(
        dimension = request.dimension.name(),
        min = request.range.min,
        max = request.range.max,
        step = request.range.step,
        "starting 1-D wind sweep"
    );

    let mut result = ProfileResult::for_dimension(request.dimension);
    for (bin, point) in request.grid() {
        let sample = invoker::invoke(model, &point)?;
        debug!(
            bin,
            u = sample.total_zonal(),
            v = sample.total_meridional(),
            "evaluated grid point"
        );
        result.push(bin, &sample);
    }

    if request.dimension == Dimension::Time {
        let mlt: Option<Vec<f64>> = result
            .bins
            .iter()
            .map(|&ut| {
                model.magnetic_local_time(
                    request.base.latitude_deg,
                    request.base.longitude_deg,
                    request.base.day_of_year,
                    ut,
                )
            })
            .collect();
        result.mlt_bins = mlt;
    }

    Ok(result)
}

/// Like [`profile`], but the failure path still hands back a fully formed
/// result with every container present and empty, so callers can check
/// lengths instead of matching on the error.
pub fn profile_or_empty<M: WindModel>(
    params: &ProfileParams,
    model: &M,
) -> (ProfileResult, Option<ProfileError>) {
    match profile(params, model) {
        Ok(result) => (result, None),
        Err(err) => (ProfileResult::empty(), Some(err)),
    }
}

/// Run a 2-D sweep from raw parameters against the given model.
pub fn profile2d<M: WindModel>(params: &ProfileParams, model: &M) -> Result<ProfileResult2D> {
    run2d(&params.resolve2d()?, model)
}

/// Run a resolved 2-D sweep.
///
/// Matrix indices come from the position within the row-major generation
/// order, never from searching the axes for a bin value.
pub fn run2d<M: WindModel>(request: &ProfileRequest2D, model: &M) -> Result<ProfileResult2D> {
    let axis1 = request.range1.bins();
    let axis2 = request.range2.bins();
    info!(
        axis1 = request.axes.0.name(),
        axis2 = request.axes.1.name(),
        rows = axis1.len(),
        cols = axis2.len(),
        "starting 2-D wind sweep"
    );

    let cols = axis2.len();
    let mut result = ProfileResult2D::with_axes(request.axes, axis1, axis2);
    for (index, ((value1, value2), point)) in request.grid().enumerate() {
        let sample = invoker::invoke(model, &point)?;
        debug!(
            value1,
            value2,
            u = sample.total_zonal(),
            v = sample.total_meridional(),
            "evaluated grid point"
        );
        let (row, col) = (index / cols, index % cols);
        result.u_wind[row][col] = sample.total_zonal();
        result.v_wind[row][col] = sample.total_meridional();
    }

    Ok(result)
}

/// 2-D counterpart of [`profile_or_empty`].
pub fn profile2d_or_empty<M: WindModel>(
    params: &ProfileParams,
    model: &M,
) -> (ProfileResult2D, Option<ProfileError>) {
    match profile2d(params, model) {
        Ok(result) => (result, None),
        Err(err) => (ProfileResult2D::empty(), Some(err)),
    }
}
