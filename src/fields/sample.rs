//! Uniform grid sampling of a mode over a guide cross-section.

use crate::errors::WaveguideError;
use crate::math::{R3, Scalar};
use crate::modes::Mode;
use crate::sweep::linspace;
use crate::waveguide::Waveguide;

use super::FieldVector;

/// Field value at one grid point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Sample position `(x, y, z)` in meters.
    pub position: R3,
    /// Field at `position`.
    pub field: FieldVector,
}

/// Samples `mode` on an `nx × ny` grid spanning the cross-section bounds at plane `z`.
///
/// Rows run along x and are emitted in ascending y. Grid points outside the
/// physical cross-section (the corners of a circle's bounding box, the inner
/// conductor of a coaxial line) carry zero fields.
pub fn sample_cross_section<W>(
    waveguide: &W,
    mode: Mode,
    frequency: Scalar,
    time: Scalar,
    z: Scalar,
    nx: usize,
    ny: usize,
) -> Result<Vec<FieldSample>, WaveguideError>
where
    W: Waveguide + ?Sized,
{
    let ([x0, x1], [y0, y1]) = waveguide.cross_section_bounds();
    let xs = linspace(x0, x1, nx);
    let ys = linspace(y0, y1, ny);
    let mut samples = Vec::with_capacity(xs.len() * ys.len());
    for &y in &ys {
        for &x in &xs {
            let field = waveguide.field_distribution(x, y, z, mode, frequency, time)?;
            samples.push(FieldSample {
                position: R3::new(x, y, z),
                field,
            });
        }
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveguide::{CircularWaveguide, RectangularWaveguide};

    #[test]
    fn grid_covers_bounds_row_by_row() {
        let wg = RectangularWaveguide::new(0.022_86, 0.010_16).unwrap();
        let samples = sample_cross_section(&wg, Mode::te(1, 0), 10.0e9, 0.5, 0.0, 5, 3).unwrap();
        assert_eq!(samples.len(), 15);
        assert_eq!(samples[0].position, R3::new(0.0, 0.0, 0.0));
        assert_eq!(samples[4].position.x, 0.022_86);
        assert_eq!(samples[14].position.y, 0.010_16);
        assert!(samples[7].field.e.y.abs() > 0.0);
    }

    #[test]
    fn bounding_box_corners_outside_circle_are_zero() {
        let wg = CircularWaveguide::new(0.01).unwrap();
        let samples = sample_cross_section(&wg, Mode::te(1, 1), 12.0e9, 1.0, 0.0, 3, 3).unwrap();
        assert!(samples[0].field.is_zero());
        assert!(!samples[4].field.is_zero());
    }

    #[test]
    fn unsupported_mode_fails_fast() {
        let wg = CircularWaveguide::new(0.01).unwrap();
        let err = sample_cross_section(&wg, Mode::tem(), 12.0e9, 0.0, 0.0, 2, 2).unwrap_err();
        assert!(matches!(err, WaveguideError::UnsupportedMode { .. }));
    }
}
