//! Typed sweep results.
//!
//! Results are always constructed with every output container present, then
//! populated. A sweep that fails during parameter resolution hands callers
//! an [`ProfileResult::empty`] value rather than an object with missing
//! fields, so downstream consumers can length-check instead of probing for
//! attributes.

use hwm_common::WindSample;
use serde::{Deserialize, Serialize};

use crate::request::Dimension;

/// Output of a 1-D sweep: one bin axis and parallel component arrays.
///
/// `u_wind` / `v_wind` are the total winds; the quiet and disturbed
/// contributions are retained per component for diagnostic use. Invariant:
/// all arrays have the same length as `bins`, in ascending sweep order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileResult {
    /// The varying dimension; `None` when the request never resolved.
    pub dimension: Option<Dimension>,
    /// Bin values of the varying dimension, ascending.
    pub bins: Vec<f64>,
    /// Total zonal wind per bin, m/s, positive eastward.
    pub u_wind: Vec<f64>,
    /// Total meridional wind per bin, m/s, positive northward.
    pub v_wind: Vec<f64>,
    pub quiet_zonal: Vec<f64>,
    pub quiet_meridional: Vec<f64>,
    pub disturbed_zonal: Vec<f64>,
    pub disturbed_meridional: Vec<f64>,
    /// Magnetic local time per bin, present on time sweeps when the model
    /// supports quasi-dipole coordinates.
    pub mlt_bins: Option<Vec<f64>>,
}

impl ProfileResult {
    /// A fully formed result with every container present and empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn for_dimension(dimension: Dimension) -> Self {
        Self {
            dimension: Some(dimension),
            ..Self::default()
        }
    }

    /// Append one sample, keeping every array aligned with `bins`.
    pub(crate) fn push(&mut self, bin: f64, sample: &WindSample) {
        self.bins.push(bin);
        self.u_wind.push(sample.total_zonal());
        self.v_wind.push(sample.total_meridional());
        self.quiet_zonal.push(sample.quiet_zonal);
        self.quiet_meridional.push(sample.quiet_meridional);
        self.disturbed_zonal.push(sample.disturbed_zonal);
        self.disturbed_meridional.push(sample.disturbed_meridional);
    }

    /// Number of bins in the sweep.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

/// Output of a 2-D sweep: two bin axes and one matrix per total component.
///
/// Invariant: `u_wind` and `v_wind` have `axis1.len()` rows of
/// `axis2.len()` columns each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileResult2D {
    /// `(axis 1, axis 2)` dimensions; `None` when the request never
    /// resolved.
    pub axes: Option<(Dimension, Dimension)>,
    pub axis1: Vec<f64>,
    pub axis2: Vec<f64>,
    /// Total zonal wind, `u_wind[row][col]` indexed by (axis 1, axis 2).
    pub u_wind: Vec<Vec<f64>>,
    /// Total meridional wind, indexed like `u_wind`.
    pub v_wind: Vec<Vec<f64>>,
}

impl ProfileResult2D {
    /// A fully formed result with every container present and empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Preallocate matrices matching the axis lengths. Cells start as NaN
    /// and every one is overwritten before the result is returned.
    pub(crate) fn with_axes(
        axes: (Dimension, Dimension),
        axis1: Vec<f64>,
        axis2: Vec<f64>,
    ) -> Self {
        let rows = axis1.len();
        let cols = axis2.len();
        Self {
            axes: Some(axes),
            axis1,
            axis2,
            u_wind: vec![vec![f64::NAN; cols]; rows],
            v_wind: vec![vec![f64::NAN; cols]; rows],
        }
    }

    /// `(rows, cols)` of the wind matrices.
    pub fn shape(&self) -> (usize, usize) {
        (self.axis1.len(), self.axis2.len())
    }
}
