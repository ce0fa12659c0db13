//! Shared test utilities for the hwm-wind workspace.
//!
//! Provides deterministic stand-in wind models so engine tests never need
//! the real coefficient-backed model, plus a float comparison macro.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod models;

// Re-export commonly used items at the crate root
pub use models::{CeilingWindModel, LinearWindModel};

/// Assert two floats agree within an absolute tolerance (default `1e-9`).
#[macro_export]
macro_rules! assert_close {
    ($a:expr, $b:expr) => {
        $crate::assert_close!($a, $b, 1e-9)
    };
    ($a:expr, $b:expr, $tol:expr) => {{
        let (a, b): (f64, f64) = ($a, $b);
        assert!(
            (a - b).abs() <= $tol,
            "expected {} to be within {} of {}",
            a,
            $tol,
            b
        );
    }};
}
