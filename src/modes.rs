//! Mode descriptors shared by every waveguide geometry.

use std::fmt;

/// Classification of a guided eigenmode by its longitudinal field content.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeFamily {
    /// Transverse electric (Ez = 0).
    Te,
    /// Transverse magnetic (Hz = 0).
    Tm,
    /// Transverse electromagnetic (Ez = Hz = 0); needs two conductors.
    Tem,
    /// Hybrid, H-dominant. Only exists in dielectric-loaded guides.
    He,
    /// Hybrid, E-dominant. Only exists in dielectric-loaded guides.
    Eh,
}

impl fmt::Display for ModeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Te => "TE",
            Self::Tm => "TM",
            Self::Tem => "TEM",
            Self::He => "HE",
            Self::Eh => "EH",
        };
        f.write_str(label)
    }
}

/// One eigenmode of a hollow-pipe boundary-value problem.
///
/// The meaning of the indices depends on the geometry it is paired with:
/// for rectangular guides `m` and `n` count half-wavelengths across the
/// width and height; for circular and coaxial guides `m` is the azimuthal
/// order and `n` the radial root index.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode {
    /// Mode family.
    pub family: ModeFamily,
    /// First (azimuthal / x) index.
    pub m: u32,
    /// Second (radial / y) index.
    pub n: u32,
}

impl Mode {
    /// Creates a mode descriptor.
    #[must_use]
    pub const fn new(family: ModeFamily, m: u32, n: u32) -> Self {
        Self { family, m, n }
    }

    /// TEₘₙ shortcut.
    #[must_use]
    pub const fn te(m: u32, n: u32) -> Self {
        Self::new(ModeFamily::Te, m, n)
    }

    /// TMₘₙ shortcut.
    #[must_use]
    pub const fn tm(m: u32, n: u32) -> Self {
        Self::new(ModeFamily::Tm, m, n)
    }

    /// The TEM mode; both indices are zero.
    #[must_use]
    pub const fn tem() -> Self {
        Self::new(ModeFamily::Tem, 0, 0)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.family {
            ModeFamily::Tem => write!(f, "TEM"),
            family if self.m < 10 && self.n < 10 => write!(f, "{family}{}{}", self.m, self.n),
            family => write!(f, "{family}({},{})", self.m, self.n),
        }
    }
}
