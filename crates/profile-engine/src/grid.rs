//! Bin axis construction for sweeps.

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};

/// Relative tolerance (in units of `step`) applied when deciding whether a
/// candidate bin still belongs to the axis. Guards against a spurious
/// trailing bin from floating-point step accumulation.
const STEP_TOLERANCE: f64 = 1e-9;

/// An inclusive `[min, max]` range discretized by `step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Degenerate range covering a single value. The step is never consulted.
    pub fn single(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            step: 1.0,
        }
    }

    /// Whether the range collapses to a single point.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Check the range invariants: `min <= max`, and `step > 0` unless the
    /// range is degenerate.
    pub fn validate(&self, axis: &'static str) -> Result<()> {
        if self.min > self.max || (!self.is_degenerate() && self.step <= 0.0) {
            return Err(ProfileError::InvalidRange {
                axis,
                min: self.min,
                max: self.max,
                step: self.step,
            });
        }
        Ok(())
    }

    /// Ordered bin values covering `[min, max]`.
    ///
    /// Both endpoints are included when `max` lands on an exact step
    /// multiple of `min`; otherwise the last bin is the largest multiple at
    /// or below `max`. Candidates are compared against `max` with a
    /// step-relative tolerance, and a candidate inside the tolerance is
    /// clipped to `max` exactly, so the final bin never exceeds `max`.
    pub fn bins(&self) -> Vec<f64> {
        if self.is_degenerate() {
            return vec![self.min];
        }

        let tolerance = self.step * STEP_TOLERANCE;
        let mut bins = Vec::new();
        for i in 0u32.. {
            let candidate = self.min + f64::from(i) * self.step;
            if candidate > self.max + tolerance {
                break;
            }
            bins.push(candidate.min(self.max));
        }
        bins
    }
}
