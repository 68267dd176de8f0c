//! Baseline physical constants and utility functions.
//!
//! ## Accuracy
//!
//! The speed of light is exact by SI definition. The permeability uses the
//! classical defined value 4π × 10⁻⁷ H/m and the permittivity the matching
//! CODATA 2006 figure, so that `1 / √(μ₀ε₀)` reproduces _c_ to better than
//! one part in 10⁹. The free-space impedance is kept as an independent named
//! constant rather than re-derived on every call.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>

use std::f64::consts::PI;

/// Speed of light in vacuum _c_ in meters per second (m/s).
/// Exact value by SI definition: 299,792,458 m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Vacuum permeability μ₀ in henries per meter (H/m), 4π × 10⁻⁷.
pub const VACUUM_PERMEABILITY: f64 = 4.0e-7 * PI;
/// Vacuum permittivity ε₀ in farads per meter (F/m).
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_817e-12;
/// Characteristic impedance of free space η₀ in ohms (Ω).
/// Consistent with η₀ = √(μ₀/ε₀) ≈ 376.730313668 Ω.
pub const FREE_SPACE_IMPEDANCE: f64 = 376.730_313_668;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}

/// Returns the free-space wavelength in meters for a given frequency in hertz.
#[inline]
#[must_use]
pub fn wavelength_from_frequency(hz: f64) -> f64 {
    SPEED_OF_LIGHT / hz
}

/// Returns the free-space wavenumber k = 2πf/c in rad/m.
#[inline]
#[must_use]
pub fn free_space_wavenumber(hz: f64) -> f64 {
    angular_frequency(hz) / SPEED_OF_LIGHT
}

/// Converts a wavenumber in rad/m into the frequency at which it is the free-space wavenumber.
#[inline]
#[must_use]
pub fn frequency_from_wavenumber(k: f64) -> f64 {
    SPEED_OF_LIGHT * k / (2.0 * PI)
}
