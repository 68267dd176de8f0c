//! Solver configuration shared by the waveguide implementations.

/// How the coaxial TE/TM cutoff wavenumber is obtained.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoaxialCutoffMethod {
    /// Root of the two-boundary cross-product equation, found by scan and bisection.
    #[default]
    Transcendental,
    /// Closed-form geometric estimate. Approximate: the resulting fields do
    /// not satisfy the outer-wall boundary condition exactly.
    ///
    /// TE₀ₙ ≈ nπ/(b−a), TEₘ₁ ≈ 2m/(a+b), and otherwise the quadrature sum of
    /// an azimuthal term 2m/(a+b) and a radial term (n−1)π/(b−a) (TE) or
    /// nπ/(b−a) (TM).
    GeometricApproximation,
}

/// Amplitude normalization applied to circular TM generators.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TmNormalization {
    /// Divide by the true maximum of |Jₘ|, attained at the first zero of J'ₘ.
    #[default]
    PerOrderMaximum,
    /// Legacy constants: 1 for m = 0 and 0.5 otherwise.
    Approximate,
}

/// Scaling of the transverse components of hollow-guide TE/TM fields.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldAmplitude {
    /// Transverse E and H both divided by Z·kc, with Z the modal wave
    /// impedance, so plots of E_t and H_t sit on a scale comparable to the
    /// unit longitudinal generator.
    #[default]
    Normalized,
    /// Plain SI fields of a unit generator (Hz in A/m for TE, Ez in V/m for TM).
    Si,
}

/// Options controlling mode enumeration and the approximations in use.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    /// Largest index enumerated by `available_modes` on either axis.
    pub mode_index_limit: u32,
    /// Coaxial TE/TM cutoff strategy.
    pub coaxial_cutoff: CoaxialCutoffMethod,
    /// Circular TM amplitude normalization.
    pub circular_tm_normalization: TmNormalization,
    /// Transverse field scaling for TE/TM modes.
    pub field_amplitude: FieldAmplitude,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            mode_index_limit: 3,
            coaxial_cutoff: CoaxialCutoffMethod::default(),
            circular_tm_normalization: TmNormalization::default(),
            field_amplitude: FieldAmplitude::default(),
        }
    }
}

impl SolverOptions {
    /// Overrides the enumeration bound.
    #[must_use]
    pub const fn with_mode_index_limit(mut self, limit: u32) -> Self {
        self.mode_index_limit = limit;
        self
    }

    /// Selects the coaxial cutoff strategy.
    #[must_use]
    pub const fn with_coaxial_cutoff(mut self, method: CoaxialCutoffMethod) -> Self {
        self.coaxial_cutoff = method;
        self
    }

    /// Selects the circular TM normalization.
    #[must_use]
    pub const fn with_circular_tm_normalization(mut self, normalization: TmNormalization) -> Self {
        self.circular_tm_normalization = normalization;
        self
    }

    /// Selects the transverse field scaling.
    #[must_use]
    pub const fn with_field_amplitude(mut self, amplitude: FieldAmplitude) -> Self {
        self.field_amplitude = amplitude;
        self
    }
}
