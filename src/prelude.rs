//! Convenience re-exports for mode-solving experiments.

pub use crate::config::{CoaxialCutoffMethod, FieldAmplitude, SolverOptions, TmNormalization};
pub use crate::constants::*;
pub use crate::errors::WaveguideError;
pub use crate::fields::{sample_cross_section, FieldSample, FieldVector};
pub use crate::geometry::{
    CircularParams, CoaxialParams, GeometryError, GeometryParams, RectangularParams,
};
pub use crate::math::{PolarPoint, R3, Scalar};
pub use crate::modes::{Mode, ModeFamily};
pub use crate::presets::{find_preset, Preset, PRESETS};
pub use crate::special::{
    bessel_j, bessel_j_prime, bessel_j_prime_zero, bessel_j_zero, bessel_y, bessel_y_prime,
    BesselError,
};
pub use crate::sweep::{dispersion_sweep, linspace, mode_chart, ModeChartEntry};
pub use crate::waveguide::{
    from_geometry, CalculatedParams, CircularWaveguide, CoaxialWaveguide, RectangularWaveguide,
    Waveguide,
};
