//! Frequency sweeps and mode charts.

use crate::errors::WaveguideError;
use crate::math::Scalar;
use crate::modes::Mode;
use crate::waveguide::{CalculatedParams, Waveguide};

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| if i + 1 == n { stop } else { start + step * i as Scalar })
                .collect()
        }
    }
}

/// Derived parameters of `mode` at each frequency (Hz).
pub fn dispersion_sweep<W, I>(
    waveguide: &W,
    mode: Mode,
    frequencies: I,
) -> Result<Vec<CalculatedParams>, WaveguideError>
where
    W: Waveguide + ?Sized,
    I: IntoIterator<Item = Scalar>,
{
    frequencies
        .into_iter()
        .map(|f| waveguide.calculated_params(f, mode))
        .collect()
}

/// One row of a [`mode_chart`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeChartEntry {
    /// The mode.
    pub mode: Mode,
    /// Its cutoff frequency in Hz.
    pub cutoff_frequency: Scalar,
    /// Whether it propagates at the chart frequency.
    pub is_propagating: bool,
}

/// Every available mode in ascending cutoff order, flagged for `frequency`.
pub fn mode_chart<W>(
    waveguide: &W,
    frequency: Scalar,
) -> Result<Vec<ModeChartEntry>, WaveguideError>
where
    W: Waveguide + ?Sized,
{
    waveguide
        .available_modes()
        .into_iter()
        .map(|mode| {
            let params = waveguide.calculated_params(frequency, mode)?;
            Ok(ModeChartEntry {
                mode,
                cutoff_frequency: params.cutoff_frequency,
                is_propagating: params.is_propagating,
            })
        })
        .collect()
}
