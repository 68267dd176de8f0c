//! Coaxial line: annulus `a ≤ ρ ≤ b` between two perfect conductors.
//!
//! TEM (m = n = 0) has no cutoff: Eρ = a/ρ (unit on the inner conductor),
//! Hφ = Eρ/η₀ and β = ω/c. Higher TE/TM modes use the radial function
//!
//! - TE: R(ρ) = Jₘ(kc ρ) Y'ₘ(kc a) − J'ₘ(kc a) Yₘ(kc ρ), so R'(a) = 0
//! - TM: R(ρ) = Jₘ(kc ρ) Yₘ(kc a) − Jₘ(kc a) Yₘ(kc ρ), so R(a) = 0
//!
//! and kc is the n-th root of the matching condition at ρ = b. Both are
//! divided by the Wronskian 2/(π kc a), which makes the TE generator unity
//! at the inner wall and the TM generator's radial slope unity there.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::RwLock;

use tracing::debug;

use crate::config::{CoaxialCutoffMethod, SolverOptions};
use crate::constants::{free_space_wavenumber, FREE_SPACE_IMPEDANCE};
use crate::errors::WaveguideError;
use crate::fields::FieldVector;
use crate::geometry::{CoaxialParams, GeometryError, GeometryParams};
use crate::math::{PolarPoint, R3, Scalar};
use crate::modes::{Mode, ModeFamily};
use crate::special::{bessel_j, bessel_j_prime, bessel_y, bessel_y_prime};

use super::{check_field_query, hollow_mode_field, require_supported, Generator, Waveguide};

/// Scan steps per local root spacing of the cross-product.
const SCAN_SUBDIVISIONS: f64 = 16.0;
/// Hard bound on scan steps.
const MAX_SCAN_STEPS: usize = 200_000;
const BISECTION_ITERATIONS: u32 = 50;

/// Coaxial line with inner radius `a` and outer radius `b`.
///
/// Transcendental cutoffs are memoized per mode; the cache never changes
/// observable results.
#[derive(Debug)]
pub struct CoaxialWaveguide {
    params: CoaxialParams,
    options: SolverOptions,
    cutoffs: RwLock<HashMap<Mode, Scalar>>,
}

impl Clone for CoaxialWaveguide {
    fn clone(&self) -> Self {
        Self {
            params: self.params,
            options: self.options,
            cutoffs: RwLock::new(HashMap::new()),
        }
    }
}

impl CoaxialWaveguide {
    /// Creates a line from the inner and outer radii in meters.
    pub fn new(inner_radius: Scalar, outer_radius: Scalar) -> Result<Self, GeometryError> {
        Ok(Self {
            params: CoaxialParams::new(inner_radius, outer_radius)?,
            options: SolverOptions::default(),
            cutoffs: RwLock::new(HashMap::new()),
        })
    }

    /// Creates a line from caller-owned parameters, re-validating them.
    pub fn from_params(params: CoaxialParams) -> Result<Self, GeometryError> {
        Self::new(params.inner_radius, params.outer_radius)
    }

    /// Replaces the solver options.
    #[must_use]
    pub fn with_options(mut self, options: SolverOptions) -> Self {
        if options.coaxial_cutoff != self.options.coaxial_cutoff {
            self.cutoffs = RwLock::new(HashMap::new());
        }
        self.options = options;
        self
    }

    /// Inner conductor radius in meters.
    #[must_use]
    pub const fn inner_radius(&self) -> Scalar {
        self.params.inner_radius
    }

    /// Outer conductor radius in meters.
    #[must_use]
    pub const fn outer_radius(&self) -> Scalar {
        self.params.outer_radius
    }

    /// Characteristic impedance of the TEM line, (η₀/2π)·ln(b/a).
    #[must_use]
    pub fn characteristic_impedance(&self) -> Scalar {
        FREE_SPACE_IMPEDANCE / (2.0 * PI) * self.params.radius_ratio().ln()
    }

    fn cached_cutoff(&self, mode: Mode) -> Result<Scalar, WaveguideError> {
        if let Some(kc) = self.cutoffs.read().ok().and_then(|cache| cache.get(&mode).copied()) {
            return Ok(kc);
        }
        let kc = match self.options.coaxial_cutoff {
            CoaxialCutoffMethod::Transcendental => self.transcendental_cutoff(mode)?,
            CoaxialCutoffMethod::GeometricApproximation => self.geometric_cutoff(mode),
        };
        if let Ok(mut cache) = self.cutoffs.write() {
            cache.insert(mode, kc);
        }
        Ok(kc)
    }

    /// Closed-form estimate; see [`CoaxialCutoffMethod::GeometricApproximation`].
    fn geometric_cutoff(&self, mode: Mode) -> Scalar {
        let (a, b) = (self.params.inner_radius, self.params.outer_radius);
        let azimuthal = 2.0 * f64::from(mode.m) / (a + b);
        let radial_step = PI / (b - a);
        match mode.family {
            ModeFamily::Te if mode.m == 0 => f64::from(mode.n) * radial_step,
            ModeFamily::Te => azimuthal.hypot(f64::from(mode.n - 1) * radial_step),
            _ => azimuthal.hypot(f64::from(mode.n) * radial_step),
        }
    }

    /// Cross-product whose roots in kc are the cutoffs of TE/TM modes of order `m`.
    fn characteristic(&self, family: ModeFamily, m: u32, kc: Scalar) -> Scalar {
        let (xa, xb) = (kc * self.params.inner_radius, kc * self.params.outer_radius);
        match family {
            ModeFamily::Te => {
                bessel_j_prime(m, xa) * bessel_y_prime(m, xb)
                    - bessel_j_prime(m, xb) * bessel_y_prime(m, xa)
            }
            _ => bessel_j(m, xa) * bessel_y(m, xb) - bessel_j(m, xb) * bessel_y(m, xa),
        }
    }

    /// Scans kc upward for sign changes and bisects the n-th one.
    ///
    /// Roots of one order are at least about π/(b − a) apart, and only the
    /// first TE root can sit below that, near m/b. The step therefore
    /// grows with kc from 1/(16b) up to π/(16(b − a)), which keeps thin
    /// annuli within a few hundred steps.
    fn transcendental_cutoff(&self, mode: Mode) -> Result<Scalar, WaveguideError> {
        let (a, b) = (self.params.inner_radius, self.params.outer_radius);
        let spacing = PI / (b - a);
        let step = |k: Scalar| spacing.min(k.max(1.0 / b)) / SCAN_SUBDIVISIONS;
        let k_max = f64::from(mode.m + 1) / a + f64::from(mode.n + 1) * spacing;
        let f = |k: Scalar| self.characteristic(mode.family, mode.m, k);

        let mut found = 0;
        let mut lo = 1.0 / (b * SCAN_SUBDIVISIONS);
        let mut f_lo = f(lo);
        for _ in 0..MAX_SCAN_STEPS {
            if lo > k_max {
                break;
            }
            let hi = lo + step(lo);
            let f_hi = f(hi);
            if f_lo == 0.0 || f_lo * f_hi < 0.0 {
                found += 1;
                if found == mode.n {
                    let kc = bisect(&f, lo, hi, f_lo);
                    debug!(%mode, kc, inner = a, outer = b, "located coaxial cutoff");
                    return Ok(kc);
                }
            }
            lo = hi;
            f_lo = f_hi;
        }
        Err(WaveguideError::CutoffNotFound { mode })
    }

    fn radial_function(
        &self,
        family: ModeFamily,
        m: u32,
        kc: Scalar,
        rho: Scalar,
    ) -> (Scalar, Scalar) {
        let xa = kc * self.params.inner_radius;
        let x = kc * rho;
        match family {
            ModeFamily::Te => {
                let (ja_p, ya_p) = (bessel_j_prime(m, xa), bessel_y_prime(m, xa));
                (
                    bessel_j(m, x) * ya_p - ja_p * bessel_y(m, x),
                    bessel_j_prime(m, x) * ya_p - ja_p * bessel_y_prime(m, x),
                )
            }
            _ => {
                let (ja, ya) = (bessel_j(m, xa), bessel_y(m, xa));
                (
                    bessel_j(m, x) * ya - ja * bessel_y(m, x),
                    bessel_j_prime(m, x) * ya - ja * bessel_y_prime(m, x),
                )
            }
        }
    }

    fn tem_field(
        &self,
        point: &PolarPoint,
        z: Scalar,
        frequency: Scalar,
        time: Scalar,
    ) -> FieldVector {
        let beta = free_space_wavenumber(frequency);
        let e_rho = self.params.inner_radius / point.rho * (time - beta * z).cos();
        let h_phi = e_rho / FREE_SPACE_IMPEDANCE;
        let (ex, ey) = point.to_cartesian(e_rho, 0.0);
        let (hx, hy) = point.to_cartesian(0.0, h_phi);
        FieldVector::new(R3::new(ex, ey, 0.0), R3::new(hx, hy, 0.0))
    }
}

fn bisect<F>(f: &F, mut lo: Scalar, mut hi: Scalar, mut f_lo: Scalar) -> Scalar
where
    F: Fn(Scalar) -> Scalar,
{
    if f_lo == 0.0 {
        return lo;
    }
    for _ in 0..BISECTION_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        if f_lo * f_mid <= 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }
    0.5 * (lo + hi)
}

impl Waveguide for CoaxialWaveguide {
    fn geometry(&self) -> GeometryParams {
        GeometryParams::Coaxial(self.params)
    }

    fn options(&self) -> &SolverOptions {
        &self.options
    }

    fn is_mode_supported(&self, mode: Mode) -> bool {
        match mode.family {
            ModeFamily::Tem => mode.m == 0 && mode.n == 0,
            ModeFamily::Te | ModeFamily::Tm => mode.n >= 1,
            ModeFamily::He | ModeFamily::Eh => false,
        }
    }

    fn cutoff_wavenumber(&self, mode: Mode) -> Result<Scalar, WaveguideError> {
        require_supported(self, mode)?;
        if mode.family == ModeFamily::Tem {
            return Ok(0.0);
        }
        self.cached_cutoff(mode)
    }

    fn contains(&self, x: Scalar, y: Scalar) -> bool {
        let rho = x.hypot(y);
        rho >= self.params.inner_radius && rho <= self.params.outer_radius
    }

    fn cross_section_bounds(&self) -> ([Scalar; 2], [Scalar; 2]) {
        let r = self.params.outer_radius;
        ([-r, r], [-r, r])
    }

    fn candidate_modes(&self) -> Vec<Mode> {
        let limit = self.options.mode_index_limit;
        let mut modes = vec![Mode::tem()];
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
        let point = PolarPoint::from_cartesian(x, y);
        if mode.family == ModeFamily::Tem {
            return Ok(self.tem_field(&point, z, frequency, time));
        }
        let params = self.calculated_params(frequency, mode)?;
        if !params.is_propagating {
            return Ok(FieldVector::zero());
        }
        let norm = 2.0 / (PI * kc * self.params.inner_radius);
        let (r, r_prime) = self.radial_function(mode.family, mode.m, kc, point.rho);
        let order = f64::from(mode.m);
        let (sin_m, cos_m) = (order * point.phi).sin_cos();
        let radial = kc * r_prime * cos_m / norm;
        let azimuthal = -order * r * sin_m / (point.rho * norm);
        let (grad_x, grad_y) = point.to_cartesian(radial, azimuthal);
        let generator = Generator {
            value: r * cos_m / norm,
            grad_x,
            grad_y,
        };
        let beta = params.propagation_constant;
        let theta = time - beta * z;
        let amplitude = self.options.field_amplitude;
        Ok(hollow_mode_field(mode.family, generator, kc, beta, frequency, theta, amplitude))
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    fn line() -> CoaxialWaveguide {
        CoaxialWaveguide::new(0.000_91, 0.002_1).unwrap()
    }

    #[test]
    fn fifty_ohm_air_line() {
        assert_relative_eq!(line().characteristic_impedance(), 50.0, max_relative = 0.2);
    }

    #[test]
    fn tem_has_no_cutoff_and_always_propagates() {
        let wg = line();
        assert_eq!(wg.cutoff_frequency(Mode::tem()).unwrap(), 0.0);
        for f in [1.0, 1.0e3, 1.0e9, 1.0e11] {
            let p = wg.calculated_params(f, Mode::tem()).unwrap();
            assert!(p.is_propagating);
            assert_relative_eq!(p.modal_impedance, FREE_SPACE_IMPEDANCE);
            assert!(p.cutoff_wavelength.is_infinite());
        }
        assert!(!wg.is_mode_supported(Mode::new(ModeFamily::Tem, 1, 0)));
    }

    #[test]
    fn tem_field_is_radial_and_unit_at_inner_conductor() {
        let wg = line();
        let f = wg.field_distribution(0.000_91, 0.0, 0.0, Mode::tem(), 1.0e9, 0.0).unwrap();
        assert_relative_eq!(f.e.x, 1.0, max_relative = 1.0e-12);
        assert_abs_diff_eq!(f.e.y, 0.0, epsilon = 1.0e-15);
        assert_relative_eq!(f.h.y, 1.0 / FREE_SPACE_IMPEDANCE, max_relative = 1.0e-12);
        assert!(f.poynting().z > 0.0);
    }

    #[test]
    fn te11_cutoff_is_close_to_mean_circumference_rule() {
        let wg = line();
        let kc = wg.cutoff_wavenumber(Mode::te(1, 1)).unwrap();
        let estimate = 2.0 / (0.000_91 + 0.002_1);
        assert_relative_eq!(kc, estimate, max_relative = 0.05);
        assert_eq!(wg.available_modes()[1], Mode::te(1, 1));
    }

    #[test]
    fn te0n_and_tm1n_are_degenerate() {
        let wg = line();
        let te = wg.cutoff_wavenumber(Mode::te(0, 1)).unwrap();
        let tm = wg.cutoff_wavenumber(Mode::tm(1, 1)).unwrap();
        assert_relative_eq!(te, tm, max_relative = 1.0e-9);
    }

    #[test]
    fn solved_cutoffs_satisfy_outer_boundary() {
        let wg = line();
        let b = wg.outer_radius();
        for mode in [Mode::tm(0, 1), Mode::tm(2, 1), Mode::tm(1, 2)] {
            let fc = wg.cutoff_frequency(mode).unwrap();
            let f = wg.field_distribution(b, 0.0, 0.0, mode, 1.2 * fc, 0.0).unwrap();
            let inner = wg.field_distribution(1.5e-3, 0.0, 0.0, mode, 1.2 * fc, 0.0).unwrap();
            assert!(f.e.z.abs() < 1.0e-6 * inner.e.z.abs().max(1.0), "{mode}: Ez = {}", f.e.z);
        }
        for mode in [Mode::te(1, 1), Mode::te(2, 1), Mode::te(0, 1)] {
            let fc = wg.cutoff_frequency(mode).unwrap();
            // On the x axis φ̂ = ŷ, so Ey is the tangential electric field.
            let f = wg.field_distribution(b, 0.0, 0.0, mode, 1.2 * fc, 1.0).unwrap();
            let inner = wg.field_distribution(1.5e-3, 0.0, 0.0, mode, 1.2 * fc, 1.0).unwrap();
            assert!(
                f.e.y.abs() < 1.0e-6 * inner.transverse_e().max(1.0),
                "{mode}: Eφ = {}",
                f.e.y
            );
        }
    }

    #[test]
    fn te_generator_is_unit_at_inner_wall() {
        let wg = line();
        let fc = wg.cutoff_frequency(Mode::te(1, 1)).unwrap();
        let f = wg.field_distribution(0.000_91, 0.0, 0.0, Mode::te(1, 1), 1.5 * fc, 0.0).unwrap();
        assert_relative_eq!(f.h.z, 1.0, max_relative = 1.0e-6);
    }

    #[test]
    fn geometric_approximation_is_selectable() {
        let options = SolverOptions::default()
            .with_coaxial_cutoff(CoaxialCutoffMethod::GeometricApproximation);
        let wg = line().with_options(options);
        let kc = wg.cutoff_wavenumber(Mode::te(1, 1)).unwrap();
        assert_relative_eq!(kc, 2.0 / (0.000_91 + 0.002_1), max_relative = 1.0e-12);
        let tm01 = wg.cutoff_wavenumber(Mode::tm(0, 1)).unwrap();
        assert_relative_eq!(tm01, PI / (0.002_1 - 0.000_91), max_relative = 1.0e-12);
    }

    #[test]
    fn evanescent_te_is_zeroed_but_tem_is_not() {
        let wg = line();
        let p = (0.0015, 0.0);
        let te = wg.field_distribution(p.0, p.1, 0.0, Mode::te(1, 1), 1.0e9, 0.5).unwrap();
        assert!(te.is_zero());
        let tem = wg.field_distribution(p.0, p.1, 0.0, Mode::tem(), 1.0e9, 0.5).unwrap();
        assert!(!tem.is_zero());
    }

    #[test]
    fn inside_conductor_is_zero() {
        let f = line().field_distribution(0.0005, 0.0, 0.0, Mode::tem(), 1.0e9, 0.0).unwrap();
        assert!(f.is_zero());
    }

    #[test]
    fn beyond_outer_conductor_is_zero() {
        let wg = line();
        let fc = wg.cutoff_frequency(Mode::te(1, 1)).unwrap();
        let cases = [
            (Mode::tem(), 1.0e9),
            (Mode::te(1, 1), 1.5 * fc),
            (Mode::tm(0, 1), 2.0e11),
        ];
        for (mode, f) in cases {
            for (x, y) in [(0.0, 0.002_2), (-0.002_2, 0.0), (0.0016, 0.0016)] {
                let field = wg.field_distribution(x, y, 0.0, mode, f, 0.7).unwrap();
                assert!(field.is_zero(), "{mode} at ({x}, {y})");
            }
        }
    }

    #[test]
    fn thin_annulus_finds_every_candidate() {
        let wg = CoaxialWaveguide::new(0.9999, 1.0).unwrap();
        let radial = PI / (1.0 - 0.9999);
        for mode in [Mode::tm(0, 1), Mode::te(0, 1), Mode::tm(1, 1), Mode::te(1, 2)] {
            let kc = wg.cutoff_wavenumber(mode).unwrap();
            assert_relative_eq!(kc, radial, max_relative = 1.0e-4);
        }
        let te11 = wg.cutoff_wavenumber(Mode::te(1, 1)).unwrap();
        assert_relative_eq!(te11, 1.0, max_relative = 1.0e-3);
        let tm33 = wg.cutoff_wavenumber(Mode::tm(3, 3)).unwrap();
        assert_relative_eq!(tm33, 3.0 * radial, max_relative = 1.0e-4);
        assert_eq!(wg.available_modes().len(), wg.candidate_modes().len());
    }

    #[test]
    fn moderately_thin_annulus_matches_parallel_plate_limit() {
        let wg = CoaxialWaveguide::new(0.99, 1.0).unwrap();
        let kc = wg.cutoff_wavenumber(Mode::tm(0, 1)).unwrap();
        assert_relative_eq!(kc, PI / 0.01, max_relative = 1.0e-5);
    }
}
