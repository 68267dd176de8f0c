#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants used throughout the library.
pub mod constants;
/// Shared mathematical utilities (vectors, polar coordinates).
pub mod math;
/// Bessel functions and their zeros.
pub mod special;
/// Mode families and indices.
pub mod modes;
/// Validated cross-section geometries.
pub mod geometry;
/// Field snapshots and grid sampling.
pub mod fields;
/// Solver options.
pub mod config;
/// The waveguide contract and the rectangular, circular and coaxial solvers.
pub mod waveguide;
/// Named standard waveguides.
pub mod presets;
/// Frequency sweeps and mode charts.
pub mod sweep;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
