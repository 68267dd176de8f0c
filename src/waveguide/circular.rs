//! Hollow circular waveguide.
//!
//! Mode `m` is the azimuthal order and `n` the radial root index. TEₘₙ has
//! kc = j'ₘₙ / R and TMₘₙ has kc = jₘₙ / R. The generator is
//! Jₘ(kc ρ) cos(mφ), scaled so its amplitude is order one: TE divides by
//! Jₘ(j'ₘₙ), its value on the wall, and TM by the peak of |Jₘ| (see
//! [`TmNormalization`]).
//!
//! Hybrid HE/EH families need a dielectric-loaded guide and are rejected.

use crate::config::{SolverOptions, TmNormalization};
use crate::errors::WaveguideError;
use crate::fields::FieldVector;
use crate::geometry::{CircularParams, GeometryError, GeometryParams};
use crate::math::{PolarPoint, Scalar};
use crate::modes::{Mode, ModeFamily};
use crate::special::{bessel_j, bessel_j_prime, bessel_j_prime_zero, bessel_j_zero};

use super::{check_field_query, hollow_mode_field, require_supported, Generator, Waveguide};

/// Circular guide of a given inner radius.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularWaveguide {
    params: CircularParams,
    options: SolverOptions,
}

impl CircularWaveguide {
    /// Creates a guide with wall radius `radius` in meters.
    pub fn new(radius: Scalar) -> Result<Self, GeometryError> {
        Ok(Self {
            params: CircularParams::new(radius)?,
            options: SolverOptions::default(),
        })
    }

    /// Creates a guide from caller-owned parameters, re-validating them.
    pub fn from_params(params: CircularParams) -> Result<Self, GeometryError> {
        Self::new(params.radius)
    }

    /// Replaces the solver options.
    #[must_use]
    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Wall radius in meters.
    #[must_use]
    pub const fn radius(&self) -> Scalar {
        self.params.radius
    }

    /// Dimensionless root χ = kc·R of the mode.
    fn eigenvalue(mode: Mode) -> Result<Scalar, WaveguideError> {
        let root = match mode.family {
            ModeFamily::Te => bessel_j_prime_zero(mode.m, mode.n)?,
            _ => bessel_j_zero(mode.m, mode.n)?,
        };
        Ok(root)
    }

    fn tm_normalization(&self, order: u32) -> Result<Scalar, WaveguideError> {
        if order == 0 {
            return Ok(1.0);
        }
        match self.options.circular_tm_normalization {
            TmNormalization::Approximate => Ok(0.5),
            // |Jₘ| peaks at its first turning point for m ≥ 1.
            TmNormalization::PerOrderMaximum => Ok(bessel_j(order, bessel_j_prime_zero(order, 1)?)),
        }
    }
}

/// Jₘ(kc ρ)/ρ, continued to its limit on the axis.
fn bessel_over_rho(order: u32, kc: Scalar, point: &PolarPoint) -> Scalar {
    if point.on_axis() {
        if order == 1 { 0.5 * kc } else { 0.0 }
    } else {
        bessel_j(order, kc * point.rho) / point.rho
    }
}

impl Waveguide for CircularWaveguide {
    fn geometry(&self) -> GeometryParams {
        GeometryParams::Circular(self.params)
    }

    fn options(&self) -> &SolverOptions {
        &self.options
    }

    fn is_mode_supported(&self, mode: Mode) -> bool {
        matches!(mode.family, ModeFamily::Te | ModeFamily::Tm) && mode.n >= 1
    }

    fn cutoff_wavenumber(&self, mode: Mode) -> Result<Scalar, WaveguideError> {
        require_supported(self, mode)?;
        Ok(Self::eigenvalue(mode)? / self.params.radius)
    }

    fn contains(&self, x: Scalar, y: Scalar) -> bool {
        x.hypot(y) <= self.params.radius
    }

    fn cross_section_bounds(&self) -> ([Scalar; 2], [Scalar; 2]) {
        let r = self.params.radius;
        ([-r, r], [-r, r])
    }

    fn candidate_modes(&self) -> Vec<Mode> {
        let limit = self.options.mode_index_limit;
        let mut modes = Vec::new();
        for m in 0..=limit {
            for n in 1..=limit.max(1) {
                modes.push(Mode::te(m, n));
                modes.push(Mode::tm(m, n));
            }
        }
        modes
    }

    fn field_distribution(
        &self,
        x: Scalar,
        y: Scalar,
        z: Scalar,
        mode: Mode,
        frequency: Scalar,
        time: Scalar,
    ) -> Result<FieldVector, WaveguideError> {
        check_field_query(x, y, z, frequency, time)?;
        let kc = self.cutoff_wavenumber(mode)?;
        if !self.contains(x, y) {
            return Ok(FieldVector::zero());
        }
        let params = self.calculated_params(frequency, mode)?;
        if !params.is_propagating {
            return Ok(FieldVector::zero());
        }
        let norm = match mode.family {
            ModeFamily::Te => bessel_j(mode.m, kc * self.params.radius),
            _ => self.tm_normalization(mode.m)?,
        };
        let point = PolarPoint::from_cartesian(x, y);
        let order = f64::from(mode.m);
        let (sin_m, cos_m) = (order * point.phi).sin_cos();
        let radial = kc * bessel_j_prime(mode.m, kc * point.rho) * cos_m / norm;
        let azimuthal = -order * bessel_over_rho(mode.m, kc, &point) * sin_m / norm;
        let (grad_x, grad_y) = point.to_cartesian(radial, azimuthal);
        let generator = Generator {
            value: bessel_j(mode.m, kc * point.rho) * cos_m / norm,
            grad_x,
            grad_y,
        };
        let beta = params.propagation_constant;
        let theta = time - beta * z;
        let amplitude = self.options.field_amplitude;
        Ok(hollow_mode_field(mode.family, generator, kc, beta, frequency, theta, amplitude))
    }
}
