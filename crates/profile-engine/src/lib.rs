//! Horizontal wind profile engine.
//!
//! Turns a small set of user-supplied ranges and a fixed evaluation point
//! into ordered sweeps over a point-evaluated empirical wind model, and
//! aggregates the quiet / disturbed / total components into typed result
//! arrays (1-D sweeps) or matrices (2-D sweeps).
//!
//! # Architecture
//!
//! ```text
//! ProfileParams (raw, partially omitted fields)
//!      │
//!      ▼
//! resolve ──► ProfileRequest / ProfileRequest2D   (defaults + validation)
//!      │
//!      ▼
//! grid ─────► ordered EvaluationPoints            (row-major for 2-D)
//!      │
//!      ▼
//! WindModel::evaluate                             (one call per point)
//!      │
//!      ▼
//! ProfileResult / ProfileResult2D
//! ```
//!
//! Each sweep is a pure function from request to result: no caching, no
//! shared state, strictly sequential evaluation in generation order.
//!
//! # Example
//!
//! ```ignore
//! use profile_engine::{profile, AxisRange, ProfileParams};
//!
//! let params = ProfileParams {
//!     option: 1, // altitude sweep
//!     altitude_range: Some(AxisRange::new(90.0, 200.0, 10.0)),
//!     ut_hours: Some(11.66667),
//!     ..ProfileParams::default()
//! };
//! let result = profile(&params, &model)?;
//! assert_eq!(result.bins.len(), result.u_wind.len());
//! ```

pub mod defaults;
pub mod error;
pub mod grid;
pub mod invoker;
pub mod request;
pub mod result;
pub mod sweep;

// Re-export commonly used types at crate root
pub use defaults::Defaults;
pub use error::{ProfileError, Result};
pub use grid::AxisRange;
pub use invoker::{invoke, model_input, year_day_code};
pub use request::{axes_for_option, Dimension, ProfileParams, ProfileRequest, ProfileRequest2D};
pub use result::{ProfileResult, ProfileResult2D};
pub use sweep::{profile, profile2d, profile2d_or_empty, profile_or_empty, run, run2d};
