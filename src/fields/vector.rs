//! Field snapshot type shared by every solver.

use crate::math::{R3, Scalar};

/// Instantaneous electric and magnetic field sample at one point.
///
/// `e` is in V/m and `h` in A/m, both in the Cartesian frame of the guide
/// cross-section with `z` along the propagation axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldVector {
    /// Electric field.
    pub e: R3,
    /// Magnetic field.
    pub h: R3,
}

impl FieldVector {
    /// Builds a field sample from its two vectors.
    #[must_use]
    pub const fn new(e: R3, h: R3) -> Self {
        Self { e, h }
    }

    /// The all-zero field returned outside the guide or below cutoff.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            e: R3::zeros(),
            h: R3::zeros(),
        }
    }

    /// True when every component of both vectors is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.e.iter().chain(self.h.iter()).all(|c| *c == 0.0)
    }

    /// Instantaneous Poynting vector S = E × H in W/m².
    #[must_use]
    pub fn poynting(&self) -> R3 {
        self.e.cross(&self.h)
    }

    /// Magnitude of the transverse (x, y) part of the electric field.
    #[must_use]
    pub fn transverse_e(&self) -> Scalar {
        self.e.x.hypot(self.e.y)
    }

    /// Magnitude of the transverse (x, y) part of the magnetic field.
    #[must_use]
    pub fn transverse_h(&self) -> Scalar {
        self.h.x.hypot(self.h.y)
    }
}

impl Default for FieldVector {
    fn default() -> Self {
        Self::zero()
    }
}
