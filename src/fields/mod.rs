//! Field snapshots and cross-section sampling.

mod sample;
mod vector;

pub use sample::{sample_cross_section, FieldSample};
pub use vector::FieldVector;
