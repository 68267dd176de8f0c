//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::Vector3;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for three-dimensional real vectors.
pub type R3 = Vector3<Scalar>;

/// Radius below which the azimuth of a point is treated as undefined.
pub const AXIS_EPSILON: Scalar = 1.0e-12;

/// Cartesian point re-expressed in polar form around the guide axis.
///
/// On the axis (ρ below [`AXIS_EPSILON`]) the azimuth is pinned to zero so
/// that `cos φ = 1` and `sin φ = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    /// Radial distance from the axis in meters.
    pub rho: Scalar,
    /// Azimuth in radians.
    pub phi: Scalar,
    /// Cosine of the azimuth.
    pub cos_phi: Scalar,
    /// Sine of the azimuth.
    pub sin_phi: Scalar,
}

impl PolarPoint {
    /// Converts a transverse Cartesian position into polar coordinates.
    #[must_use]
    pub fn from_cartesian(x: Scalar, y: Scalar) -> Self {
        let rho = x.hypot(y);
        if rho < AXIS_EPSILON {
            return Self {
                rho,
                phi: 0.0,
                cos_phi: 1.0,
                sin_phi: 0.0,
            };
        }
        Self {
            rho,
            phi: y.atan2(x),
            cos_phi: x / rho,
            sin_phi: y / rho,
        }
    }

    /// True when the point sits on the axis within [`AXIS_EPSILON`].
    #[must_use]
    pub fn on_axis(&self) -> bool {
        self.rho < AXIS_EPSILON
    }

    /// Rotates a cylindrical transverse pair (ρ̂, φ̂ components) into Cartesian (x̂, ŷ).
    #[must_use]
    pub fn to_cartesian(&self, radial: Scalar, azimuthal: Scalar) -> (Scalar, Scalar) {
        (
            radial * self.cos_phi - azimuthal * self.sin_phi,
            radial * self.sin_phi + azimuthal * self.cos_phi,
        )
    }
}
