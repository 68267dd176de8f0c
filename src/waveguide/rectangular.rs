//! Hollow rectangular waveguide.
//!
//! Coordinates have their origin at one corner of the cross-section, which
//! spans `[0, a] × [0, b]`. kx = mπ/a, ky = nπ/b and kc = √(kx² + ky²).

use std::f64::consts::PI;

use crate::config::SolverOptions;
use crate::errors::WaveguideError;
use crate::fields::FieldVector;
use crate::geometry::{GeometryError, GeometryParams, RectangularParams};
use crate::math::Scalar;
use crate::modes::{Mode, ModeFamily};

use super::{check_field_query, hollow_mode_field, require_supported, Generator, Waveguide};

/// Rectangular guide with width `a` ≥ height `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangularWaveguide {
    params: RectangularParams,
    options: SolverOptions,
}

impl RectangularWaveguide {
    /// Creates a guide of width `a` and height `b` in meters (swapped if `a < b`).
    pub fn new(a: Scalar, b: Scalar) -> Result<Self, GeometryError> {
        Ok(Self {
            params: RectangularParams::new(a, b)?,
            options: SolverOptions::default(),
        })
    }

    /// Creates a guide from caller-owned parameters, re-validating them.
    pub fn from_params(params: RectangularParams) -> Result<Self, GeometryError> {
        Self::new(params.a, params.b)
    }

    /// Replaces the solver options.
    #[must_use]
    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Broad-wall width in meters.
    #[must_use]
    pub const fn width(&self) -> Scalar {
        self.params.a
    }

    /// Narrow-wall height in meters.
    #[must_use]
    pub const fn height(&self) -> Scalar {
        self.params.b
    }

    fn wavenumbers(&self, mode: Mode) -> (Scalar, Scalar) {
        (
            f64::from(mode.m) * PI / self.params.a,
            f64::from(mode.n) * PI / self.params.b,
        )
    }
}

impl Waveguide for RectangularWaveguide {
    fn geometry(&self) -> GeometryParams {
        GeometryParams::Rectangular(self.params)
    }

    fn options(&self) -> &SolverOptions {
        &self.options
    }

    fn is_mode_supported(&self, mode: Mode) -> bool {
        match mode.family {
            ModeFamily::Te => mode.m > 0 || mode.n > 0,
            ModeFamily::Tm => mode.m >= 1 && mode.n >= 1,
            ModeFamily::Tem | ModeFamily::He | ModeFamily::Eh => false,
        }
    }

    fn cutoff_wavenumber(&self, mode: Mode) -> Result<Scalar, WaveguideError> {
        require_supported(self, mode)?;
        let (kx, ky) = self.wavenumbers(mode);
        Ok(kx.hypot(ky))
    }

    fn contains(&self, x: Scalar, y: Scalar) -> bool {
        (0.0..=self.params.a).contains(&x) && (0.0..=self.params.b).contains(&y)
    }

    fn cross_section_bounds(&self) -> ([Scalar; 2], [Scalar; 2]) {
        ([0.0, self.params.a], [0.0, self.params.b])
    }

    fn candidate_modes(&self) -> Vec<Mode> {
        let limit = self.options.mode_index_limit;
        let mut modes = Vec::new();
        for m in 0..=limit {
            for n in 0..=limit {
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
        let beta = params.propagation_constant;
        let (kx, ky) = self.wavenumbers(mode);
        let (sx, cx) = (kx * x).sin_cos();
        let (sy, cy) = (ky * y).sin_cos();
        let generator = match mode.family {
            ModeFamily::Tm => Generator {
                value: sx * sy,
                grad_x: kx * cx * sy,
                grad_y: ky * sx * cy,
            },
            _ => Generator {
                value: cx * cy,
                grad_x: -kx * sx * cy,
                grad_y: -ky * cx * sy,
            },
        };
        let theta = time - beta * z;
        let amplitude = self.options.field_amplitude;
        Ok(hollow_mode_field(mode.family, generator, kc, beta, frequency, theta, amplitude))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::config::FieldAmplitude;
    use crate::constants::{angular_frequency, SPEED_OF_LIGHT, VACUUM_PERMEABILITY};

    fn wr90() -> RectangularWaveguide {
        RectangularWaveguide::new(0.022_86, 0.010_16).unwrap()
    }

    #[test]
    fn te10_cutoff_matches_half_wavelength_rule() {
        let fc = wr90().cutoff_frequency(Mode::te(1, 0)).unwrap();
        assert_relative_eq!(fc, SPEED_OF_LIGHT / (2.0 * 0.022_86), max_relative = 1.0e-12);
        assert_relative_eq!(fc, 6.557e9, max_relative = 5.0e-3);
    }

    #[test]
    fn mode_rules() {
        let wg = wr90();
        assert!(wg.is_mode_supported(Mode::te(1, 0)));
        assert!(wg.is_mode_supported(Mode::te(0, 1)));
        assert!(!wg.is_mode_supported(Mode::te(0, 0)));
        assert!(!wg.is_mode_supported(Mode::tm(1, 0)));
        assert!(wg.is_mode_supported(Mode::tm(1, 1)));
        assert!(!wg.is_mode_supported(Mode::tem()));
        assert!(matches!(
            wg.cutoff_wavenumber(Mode::tem()),
            Err(WaveguideError::UnsupportedMode { geometry: "rectangular", .. })
        ));
    }

    #[test]
    fn te10_is_the_dominant_mode() {
        let modes = wr90().available_modes();
        assert_eq!(modes[0], Mode::te(1, 0));
        assert_eq!(modes.len(), 15 + 9);
    }

    #[test]
    fn te11_and_tm11_are_degenerate_in_encounter_order() {
        let wg = wr90();
        let modes = wg.available_modes();
        let te = modes.iter().position(|m| *m == Mode::te(1, 1)).unwrap();
        let tm = modes.iter().position(|m| *m == Mode::tm(1, 1)).unwrap();
        assert_eq!(tm, te + 1);
    }

    #[test]
    fn te10_field_has_only_ey_hx_hz() {
        let wg = wr90();
        let f = wg
            .field_distribution(0.011, 0.005, 0.0, Mode::te(1, 0), 10.0e9, 0.7)
            .unwrap();
        assert_relative_eq!(f.e.x, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(f.e.z, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(f.h.y, 0.0, epsilon = 1.0e-12);
        assert!(f.e.y.abs() > 0.0);
        assert!(f.poynting().z > 0.0);
    }

    #[test]
    fn te10_transverse_amplitudes() {
        let (x, y, f) = (0.011, 0.005, 10.0e9);
        let kc = PI / 0.022_86;
        let beta = wr90().propagation_constant(f, Mode::te(1, 0)).unwrap();
        let z = angular_frequency(f) * VACUUM_PERMEABILITY / beta;
        let shape = (kc * x).sin();

        let normalized = wr90()
            .field_distribution(x, y, 0.0, Mode::te(1, 0), f, FRAC_PI_2)
            .unwrap();
        assert_relative_eq!(normalized.e.y, beta * shape / (kc * kc), max_relative = 1.0e-9);
        assert_relative_eq!(normalized.h.x, -beta * shape / (z * kc * kc), max_relative = 1.0e-9);

        let si = wr90()
            .with_options(SolverOptions::default().with_field_amplitude(FieldAmplitude::Si))
            .field_distribution(x, y, 0.0, Mode::te(1, 0), f, FRAC_PI_2)
            .unwrap();
        assert_relative_eq!(si.e.y, z * beta * shape / kc, max_relative = 1.0e-9);
        assert_relative_eq!(si.e.y, 573.53, max_relative = 1.0e-3);
        assert_relative_eq!(si.e.y / normalized.e.y, z * kc, max_relative = 1.0e-9);
    }

    #[test]
    fn tangential_e_vanishes_on_walls() {
        let wg = wr90();
        for mode in [Mode::te(1, 0), Mode::te(2, 1), Mode::tm(1, 1)] {
            let side = wg.field_distribution(0.0, 0.004, 0.0, mode, 30.0e9, 1.1).unwrap();
            assert_relative_eq!(side.e.y, 0.0, epsilon = 1.0e-9);
            assert_relative_eq!(side.e.z, 0.0, epsilon = 1.0e-9);
            let floor = wg.field_distribution(0.009, 0.0, 0.0, mode, 30.0e9, 1.1).unwrap();
            assert_relative_eq!(floor.e.x, 0.0, epsilon = 1.0e-9);
            assert_relative_eq!(floor.e.z, 0.0, epsilon = 1.0e-9);
        }
    }

    #[test]
    fn below_cutoff_and_outside_are_zero() {
        let wg = wr90();
        let evanescent = wg
            .field_distribution(0.01, 0.005, 0.0, Mode::te(1, 0), 5.0e9, 0.0)
            .unwrap();
        assert!(evanescent.is_zero());
        let outside = wg
            .field_distribution(-0.001, 0.005, 0.0, Mode::te(1, 0), 10.0e9, 0.0)
            .unwrap();
        assert!(outside.is_zero());
        let above = wg.field_distribution(0.01, 0.011, 0.0, Mode::te(1, 0), 10.0e9, 0.0).unwrap();
        assert!(above.is_zero());
    }

    #[test]
    fn swapped_dimensions_are_normalized() {
        let wg = RectangularWaveguide::new(0.010_16, 0.022_86).unwrap();
        assert_eq!(wg.width(), 0.022_86);
        assert_eq!(wg.height(), 0.010_16);
    }
}
