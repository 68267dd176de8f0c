//! Named standard guides.
//!
//! Rectangular entries follow the EIA WR designations (inner dimensions in
//! meters). Coaxial entries are air-dielectric lines sized for their nominal
//! impedance.

use crate::geometry::{CircularParams, CoaxialParams, GeometryParams, RectangularParams};

/// A named geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Designation, matched case-insensitively by [`find_preset`].
    pub name: &'static str,
    /// Typical use.
    pub description: &'static str,
    /// The guide dimensions.
    pub geometry: GeometryParams,
}

const fn rectangular(name: &'static str, description: &'static str, a: f64, b: f64) -> Preset {
    Preset {
        name,
        description,
        geometry: GeometryParams::Rectangular(RectangularParams { a, b }),
    }
}

const fn circular(name: &'static str, description: &'static str, radius: f64) -> Preset {
    Preset {
        name,
        description,
        geometry: GeometryParams::Circular(CircularParams { radius }),
    }
}

const fn coaxial(name: &'static str, description: &'static str, inner: f64, outer: f64) -> Preset {
    Preset {
        name,
        description,
        geometry: GeometryParams::Coaxial(CoaxialParams {
            inner_radius: inner,
            outer_radius: outer,
        }),
    }
}

/// Every built-in preset.
pub const PRESETS: &[Preset] = &[
    rectangular("WR-284", "S band, 2.60-3.95 GHz", 0.072_136, 0.034_036),
    rectangular("WR-90", "X band, 8.20-12.40 GHz", 0.022_86, 0.010_16),
    rectangular("WR-62", "Ku band, 12.40-18.00 GHz", 0.015_799, 0.007_899),
    rectangular("WR-42", "K band, 18.00-26.50 GHz", 0.010_668, 0.004_318),
    circular("C-10", "10 mm radius, TE11 cutoff near 8.8 GHz", 0.010),
    circular("C-5", "5 mm radius, TE11 cutoff near 17.6 GHz", 0.005),
    coaxial("Coax-50", "50 ohm air line", 0.000_91, 0.002_1),
    coaxial("Coax-75", "75 ohm air line", 0.000_6, 0.002_095),
    coaxial("APC-7", "7 mm precision 50 ohm line", 0.001_52, 0.003_5),
];

/// Looks up a preset by name, ignoring ASCII case.
#[must_use]
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
