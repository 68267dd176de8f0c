//! The waveguide contract and its per-geometry implementations.
//!
//! Every geometry implements [`Waveguide`]. Only the cutoff eigenvalue, the
//! mode rules and the field shapes are geometry specific; the dispersion
//! relation ([`Waveguide::propagation_constant`]) and the derived parameter
//! bundle ([`Waveguide::calculated_params`]) are written once here in terms
//! of [`Waveguide::cutoff_wavenumber`].

mod circular;
mod coaxial;
mod rectangular;

pub use circular::CircularWaveguide;
pub use coaxial::CoaxialWaveguide;
pub use rectangular::RectangularWaveguide;

use std::fmt;

use tracing::warn;

use crate::config::{FieldAmplitude, SolverOptions};
use crate::constants::{
    angular_frequency, free_space_wavenumber, frequency_from_wavenumber, FREE_SPACE_IMPEDANCE,
    SPEED_OF_LIGHT, VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY,
};
use crate::errors::WaveguideError;
use crate::fields::FieldVector;
use crate::geometry::GeometryParams;
use crate::math::{R3, Scalar};
use crate::modes::{Mode, ModeFamily};

/// Derived propagation parameters for one (geometry, mode, frequency) triple.
///
/// Fields other than the cutoff data, `is_propagating` and
/// `attenuation_constant` are zero when the mode is evanescent; gate on
/// `is_propagating` before using them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalculatedParams {
    /// Operating frequency in Hz.
    pub frequency: Scalar,
    /// Cutoff frequency fc in Hz.
    pub cutoff_frequency: Scalar,
    /// Cutoff wavelength c/fc in meters (infinite for TEM).
    pub cutoff_wavelength: Scalar,
    /// True when `frequency > cutoff_frequency`.
    pub is_propagating: bool,
    /// Phase constant β in rad/m.
    pub propagation_constant: Scalar,
    /// Attenuation constant α in Np/m when evanescent.
    pub attenuation_constant: Scalar,
    /// Phase velocity in m/s.
    pub phase_velocity: Scalar,
    /// Group velocity in m/s.
    pub group_velocity: Scalar,
    /// Guided wavelength 2π/β in meters.
    pub guided_wavelength: Scalar,
    /// Modal wave impedance in ohms.
    pub modal_impedance: Scalar,
}

/// Capability set shared by all waveguide geometries.
///
/// Every query is a pure function of its arguments and the instance's
/// validated geometry and options, so instances can be shared freely
/// between threads. Implementations may memoize internally.
pub trait Waveguide: fmt::Debug + Send + Sync {
    /// The validated geometry of this instance.
    fn geometry(&self) -> GeometryParams;

    /// Options this instance was built with.
    fn options(&self) -> &SolverOptions;

    /// Whether `mode` is an eigenmode of this geometry.
    fn is_mode_supported(&self, mode: Mode) -> bool;

    /// Transverse eigenvalue kc in rad/m.
    fn cutoff_wavenumber(&self, mode: Mode) -> Result<Scalar, WaveguideError>;

    /// True when the transverse point lies inside the physical cross-section.
    fn contains(&self, x: Scalar, y: Scalar) -> bool;

    /// Axis-aligned bounds `([x_min, x_max], [y_min, y_max])` of the cross-section.
    fn cross_section_bounds(&self) -> ([Scalar; 2], [Scalar; 2]);

    /// Modes considered by [`Self::available_modes`], in encounter order.
    fn candidate_modes(&self) -> Vec<Mode>;

    /// Instantaneous E and H at `(x, y, z)` for phase `time` (radians).
    ///
    /// Points outside the cross-section yield [`FieldVector::zero`]. Modes
    /// with a cutoff are also zeroed at or below it; TEM has no cutoff and is
    /// never zeroed for that reason.
    fn field_distribution(
        &self,
        x: Scalar,
        y: Scalar,
        z: Scalar,
        mode: Mode,
        frequency: Scalar,
        time: Scalar,
    ) -> Result<FieldVector, WaveguideError>;

    /// Short lowercase geometry name.
    fn name(&self) -> &'static str {
        self.geometry().kind()
    }

    /// Cutoff frequency fc = c·kc/(2π) in Hz.
    fn cutoff_frequency(&self, mode: Mode) -> Result<Scalar, WaveguideError> {
        self.cutoff_wavenumber(mode).map(frequency_from_wavenumber)
    }

    /// Supported modes up to the configured index limit, ascending by cutoff.
    ///
    /// Ties keep their encounter order.
    fn available_modes(&self) -> Vec<Mode> {
        let mut modes: Vec<(Mode, Scalar)> = self
            .candidate_modes()
            .into_iter()
            .filter(|mode| self.is_mode_supported(*mode))
            .filter_map(|mode| match self.cutoff_frequency(mode) {
                Ok(fc) => Some((mode, fc)),
                Err(err) => {
                    warn!(%mode, %err, "skipping mode without a usable cutoff");
                    None
                }
            })
            .collect();
        modes.sort_by(|a, b| a.1.total_cmp(&b.1));
        modes.into_iter().map(|(mode, _)| mode).collect()
    }

    /// β = √(k² − kc²) above cutoff, otherwise α = √(kc² − k²).
    ///
    /// The sign does not distinguish the regimes; use
    /// [`CalculatedParams::is_propagating`].
    fn propagation_constant(
        &self,
        frequency: Scalar,
        mode: Mode,
    ) -> Result<Scalar, WaveguideError> {
        check_frequency(frequency)?;
        let kc = self.cutoff_wavenumber(mode)?;
        let k = free_space_wavenumber(frequency);
        let fc = frequency_from_wavenumber(kc);
        Ok(if frequency > fc {
            ((k - kc) * (k + kc)).sqrt()
        } else {
            ((kc - k) * (kc + k)).sqrt()
        })
    }

    /// Full derived-parameter bundle for `mode` at `frequency`.
    fn calculated_params(
        &self,
        frequency: Scalar,
        mode: Mode,
    ) -> Result<CalculatedParams, WaveguideError> {
        let gamma = self.propagation_constant(frequency, mode)?;
        let fc = self.cutoff_frequency(mode)?;
        let is_propagating = frequency > fc;
        let mut params = CalculatedParams {
            frequency,
            cutoff_frequency: fc,
            cutoff_wavelength: if fc > 0.0 { SPEED_OF_LIGHT / fc } else { Scalar::INFINITY },
            is_propagating,
            ..CalculatedParams::default()
        };
        if !is_propagating {
            params.attenuation_constant = gamma;
            return Ok(params);
        }
        let ratio = fc / frequency;
        let factor = (1.0 - ratio * ratio).sqrt();
        params.propagation_constant = gamma;
        params.phase_velocity = SPEED_OF_LIGHT / factor;
        params.group_velocity = SPEED_OF_LIGHT * factor;
        params.guided_wavelength = SPEED_OF_LIGHT / frequency / factor;
        params.modal_impedance = match mode.family {
            ModeFamily::Te => FREE_SPACE_IMPEDANCE / factor,
            ModeFamily::Tm => FREE_SPACE_IMPEDANCE * factor,
            ModeFamily::Tem | ModeFamily::He | ModeFamily::Eh => FREE_SPACE_IMPEDANCE,
        };
        Ok(params)
    }
}

/// Builds the waveguide matching `geometry`, re-validating its dimensions.
pub fn from_geometry(
    geometry: GeometryParams,
    options: SolverOptions,
) -> Result<Box<dyn Waveguide>, WaveguideError> {
    match geometry {
        GeometryParams::Rectangular(p) => {
            Ok(Box::new(RectangularWaveguide::from_params(p)?.with_options(options)))
        }
        GeometryParams::Circular(p) => {
            Ok(Box::new(CircularWaveguide::from_params(p)?.with_options(options)))
        }
        GeometryParams::Coaxial(p) => {
            Ok(Box::new(CoaxialWaveguide::from_params(p)?.with_options(options)))
        }
    }
}

fn check_frequency(frequency: Scalar) -> Result<(), WaveguideError> {
    if frequency.is_finite() && frequency >= 0.0 {
        Ok(())
    } else {
        Err(WaveguideError::InvalidFrequency(frequency))
    }
}

fn check_finite(name: &'static str, value: Scalar) -> Result<(), WaveguideError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WaveguideError::NonFiniteArgument { name, value })
    }
}

/// Validates the arguments every field query shares.
pub(crate) fn check_field_query(
    x: Scalar,
    y: Scalar,
    z: Scalar,
    frequency: Scalar,
    time: Scalar,
) -> Result<(), WaveguideError> {
    check_finite("x", x)?;
    check_finite("y", y)?;
    check_finite("z", z)?;
    check_finite("time", time)?;
    check_frequency(frequency)
}

pub(crate) fn require_supported<W>(waveguide: &W, mode: Mode) -> Result<(), WaveguideError>
where
    W: Waveguide + ?Sized,
{
    if waveguide.is_mode_supported(mode) {
        Ok(())
    } else {
        Err(WaveguideError::UnsupportedMode {
            mode,
            geometry: waveguide.name(),
        })
    }
}

/// Scalar generator ψ of a hollow-guide mode and its transverse Cartesian gradient.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Generator {
    pub value: Scalar,
    pub grad_x: Scalar,
    pub grad_y: Scalar,
}

/// Turns a TE (ψ = Hz) or TM (ψ = Ez) generator into the full field snapshot.
///
/// With θ = φ − βz the longitudinal part is ψ·cos θ and the transverse part
/// is (β/kc²)∇ψ·sin θ, the quadrature partner of the phasor's j factor. The
/// remaining field follows from the modal wave impedance Z. Under
/// [`FieldAmplitude::Normalized`] both transverse vectors are then divided
/// by Z·kc.
pub(crate) fn hollow_mode_field(
    family: ModeFamily,
    generator: Generator,
    kc: Scalar,
    beta: Scalar,
    frequency: Scalar,
    theta: Scalar,
    amplitude: FieldAmplitude,
) -> FieldVector {
    let (sin_t, cos_t) = theta.sin_cos();
    let omega = angular_frequency(frequency);
    let impedance = match family {
        ModeFamily::Tm => beta / (omega * VACUUM_PERMITTIVITY),
        _ => omega * VACUUM_PERMEABILITY / beta,
    };
    let renorm = match amplitude {
        FieldAmplitude::Normalized => 1.0 / (impedance * kc),
        FieldAmplitude::Si => 1.0,
    };
    let scale = beta / (kc * kc) * sin_t;
    let tx = scale * generator.grad_x;
    let ty = scale * generator.grad_y;
    let longitudinal = generator.value * cos_t;
    match family {
        ModeFamily::Tm => FieldVector::new(
            R3::new(tx * renorm, ty * renorm, longitudinal),
            R3::new(-ty / impedance * renorm, tx / impedance * renorm, 0.0),
        ),
        _ => FieldVector::new(
            R3::new(ty * impedance * renorm, -tx * impedance * renorm, 0.0),
            R3::new(tx * renorm, ty * renorm, longitudinal),
        ),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn hollow_mode_fields_carry_power_forward() {
        let generator = Generator {
            value: 0.3,
            grad_x: 120.0,
            grad_y: -40.0,
        };
        for amplitude in [FieldAmplitude::Normalized, FieldAmplitude::Si] {
            for family in [ModeFamily::Te, ModeFamily::Tm] {
                for theta in [0.3, 1.2, 2.9, 4.0] {
                    let f = hollow_mode_field(
                        family, generator, 150.0, 180.0, 10.0e9, theta, amplitude,
                    );
                    assert!(f.poynting().z >= 0.0, "{family} at θ = {theta}");
                    assert_relative_eq!(f.e.dot(&f.h) - f.e.z * f.h.z, 0.0, epsilon = 1.0e-9);
                }
            }
        }
    }

    #[test]
    fn transverse_ratio_is_the_wave_impedance() {
        let generator = Generator {
            value: 1.0,
            grad_x: 50.0,
            grad_y: 20.0,
        };
        let (kc, beta, freq) = (150.0, 180.0, 10.0e9);
        let si = FieldAmplitude::Si;
        let te = hollow_mode_field(ModeFamily::Te, generator, kc, beta, freq, 1.0, si);
        let z_te = angular_frequency(freq) * VACUUM_PERMEABILITY / beta;
        assert_relative_eq!(te.transverse_e() / te.transverse_h(), z_te, max_relative = 1.0e-12);
        let tm = hollow_mode_field(ModeFamily::Tm, generator, kc, beta, freq, 1.0, si);
        let z_tm = beta / (angular_frequency(freq) * VACUUM_PERMITTIVITY);
        assert_relative_eq!(tm.transverse_e() / tm.transverse_h(), z_tm, max_relative = 1.0e-12);
    }

    #[test]
    fn normalized_amplitude_divides_transverse_parts_by_z_kc() {
        let generator = Generator {
            value: 0.8,
            grad_x: 50.0,
            grad_y: 20.0,
        };
        let (kc, beta, freq) = (150.0, 180.0, 10.0e9);
        let omega = angular_frequency(freq);
        for (family, z) in [
            (ModeFamily::Te, omega * VACUUM_PERMEABILITY / beta),
            (ModeFamily::Tm, beta / (omega * VACUUM_PERMITTIVITY)),
        ] {
            let field = |amplitude| {
                hollow_mode_field(family, generator, kc, beta, freq, 0.9, amplitude)
            };
            let si = field(FieldAmplitude::Si);
            let norm = field(FieldAmplitude::Normalized);
            let factor = z * kc;
            let expected_e = si.transverse_e() / factor;
            let expected_h = si.transverse_h() / factor;
            assert_relative_eq!(norm.transverse_e(), expected_e, max_relative = 1.0e-12);
            assert_relative_eq!(norm.transverse_h(), expected_h, max_relative = 1.0e-12);
            assert_eq!(norm.e.z, si.e.z);
            assert_eq!(norm.h.z, si.h.z);
        }
    }

    #[test]
    fn frequency_validation() {
        assert!(check_frequency(0.0).is_ok());
        assert_eq!(check_frequency(-1.0), Err(WaveguideError::InvalidFrequency(-1.0)));
        assert!(check_frequency(f64::NAN).is_err());
        assert!(matches!(
            check_field_query(0.0, f64::INFINITY, 0.0, 1.0e9, 0.0),
            Err(WaveguideError::NonFiniteArgument { name: "y", .. })
        ));
    }
}
