//! Shared error types used across submodules.

use thiserror::Error;

use crate::geometry::GeometryError;
use crate::modes::Mode;
use crate::special::BesselError;

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaveguideError {
    /// Wraps geometry validation errors.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// Wraps special-function errors.
    #[error(transparent)]
    Bessel(#[from] BesselError),
    /// The mode does not exist in this geometry.
    #[error("mode {mode} is not supported by the {geometry} waveguide")]
    UnsupportedMode {
        /// Mode that was queried.
        mode: Mode,
        /// Geometry kind that rejected it.
        geometry: &'static str,
    },
    /// Frequencies must be finite and non-negative.
    #[error("frequency must be finite and non-negative, got {0}")]
    InvalidFrequency(f64),
    /// A coordinate or phase argument was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFiniteArgument {
        /// Argument name.
        name: &'static str,
        /// Supplied value.
        value: f64,
    },
    /// The bounded coaxial root scan ended before reaching the requested root.
    #[error("cutoff of mode {mode} was not found within the scan range")]
    CutoffNotFound {
        /// Mode whose cutoff was requested.
        mode: Mode,
    },
}
