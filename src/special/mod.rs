//! Special functions required by the cylindrical waveguide solvers.

mod bessel;
mod zeros;

pub use bessel::{bessel_j, bessel_j_prime, bessel_y, bessel_y_prime};
pub use zeros::{bessel_j_prime_zero, bessel_j_zero, TABULATED_ORDERS, TABULATED_ROOTS};

use thiserror::Error;

/// Errors raised by root lookups on the Bessel functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BesselError {
    /// Root indices are one-based; `index = 0` has no meaning.
    #[error("invalid root index {index} for order {order}: root indices start at 1")]
    InvalidRootIndex {
        /// Bessel order n.
        order: u32,
        /// Offending root index p.
        index: u32,
    },
    /// Newton refinement left the positive real axis or produced a non-finite iterate.
    #[error("root {index} of order {order} did not converge (last estimate {estimate})")]
    NoConvergence {
        /// Bessel order n.
        order: u32,
        /// Requested root index p.
        index: u32,
        /// Last iterate before the refinement was abandoned.
        estimate: f64,
    },
}
