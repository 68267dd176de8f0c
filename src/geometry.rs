//! Validated cross-section parameters for the supported geometries.

use thiserror::Error;
use tracing::debug;

use crate::math::Scalar;

/// Errors raised while validating geometric parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A dimension was zero or negative.
    #[error("{parameter} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Value supplied by the caller.
        value: Scalar,
    },
    /// A dimension was NaN or infinite.
    #[error("{parameter} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Value supplied by the caller.
        value: Scalar,
    },
    /// Coaxial inner radius not strictly below the outer radius.
    #[error("inner radius {inner} must be strictly less than outer radius {outer}")]
    InnerNotLessThanOuter {
        /// Inner conductor radius.
        inner: Scalar,
        /// Outer conductor radius.
        outer: Scalar,
    },
}

fn positive(parameter: &'static str, value: Scalar) -> Result<Scalar, GeometryError> {
    if !value.is_finite() {
        return Err(GeometryError::NonFinite { parameter, value });
    }
    if value <= 0.0 {
        return Err(GeometryError::NonPositive { parameter, value });
    }
    Ok(value)
}

/// Rectangular cross-section, width `a` ≥ height `b`, in meters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularParams {
    /// Broad-wall width.
    pub a: Scalar,
    /// Narrow-wall height.
    pub b: Scalar,
}

impl RectangularParams {
    /// Validates the dimensions and swaps them if needed so that `a >= b`.
    pub fn new(a: Scalar, b: Scalar) -> Result<Self, GeometryError> {
        let a = positive("width", a)?;
        let b = positive("height", b)?;
        if a < b {
            debug!(a, b, "swapping rectangular dimensions so that a >= b");
            return Ok(Self { a: b, b: a });
        }
        Ok(Self { a, b })
    }
}

/// Circular cross-section of the given radius in meters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularParams {
    /// Inner wall radius.
    pub radius: Scalar,
}

impl CircularParams {
    /// Validates the radius.
    pub fn new(radius: Scalar) -> Result<Self, GeometryError> {
        Ok(Self {
            radius: positive("radius", radius)?,
        })
    }
}

/// Annular cross-section between two concentric conductors, in meters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoaxialParams {
    /// Outer radius of the inner conductor.
    pub inner_radius: Scalar,
    /// Inner radius of the outer conductor.
    pub outer_radius: Scalar,
}

impl CoaxialParams {
    /// Validates both radii and their ordering.
    pub fn new(inner_radius: Scalar, outer_radius: Scalar) -> Result<Self, GeometryError> {
        let inner = positive("inner radius", inner_radius)?;
        let outer = positive("outer radius", outer_radius)?;
        if inner >= outer {
            return Err(GeometryError::InnerNotLessThanOuter { inner, outer });
        }
        Ok(Self {
            inner_radius: inner,
            outer_radius: outer,
        })
    }

    /// Ratio b/a of outer to inner radius.
    #[must_use]
    pub fn radius_ratio(&self) -> Scalar {
        self.outer_radius / self.inner_radius
    }
}

/// Geometry selector used by [`crate::waveguide::from_geometry`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryParams {
    /// Rectangular guide.
    Rectangular(RectangularParams),
    /// Circular guide.
    Circular(CircularParams),
    /// Coaxial line.
    Coaxial(CoaxialParams),
}

impl GeometryParams {
    /// Validated rectangular geometry.
    pub fn rectangular(a: Scalar, b: Scalar) -> Result<Self, GeometryError> {
        RectangularParams::new(a, b).map(Self::Rectangular)
    }

    /// Validated circular geometry.
    pub fn circular(radius: Scalar) -> Result<Self, GeometryError> {
        CircularParams::new(radius).map(Self::Circular)
    }

    /// Validated coaxial geometry.
    pub fn coaxial(inner_radius: Scalar, outer_radius: Scalar) -> Result<Self, GeometryError> {
        CoaxialParams::new(inner_radius, outer_radius).map(Self::Coaxial)
    }

    /// Short lowercase name of the geometry kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Rectangular(_) => "rectangular",
            Self::Circular(_) => "circular",
            Self::Coaxial(_) => "coaxial",
        }
    }
}
