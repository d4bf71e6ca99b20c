//! Procedural terrain: gradient-noise elevation fields and colour ramps.
//!
//! Generation runs strictly in order: a [`NodeGrid`] of random unit gradients
//! is drawn from a caller-owned RNG, a [`GradientNoise`] evaluator blends them
//! per sample, an [`ElevationMap`] bakes and normalizes every sample, and a
//! [`ColourRamp`] turns elevations into colours for whatever draws them.

pub mod colour_ramp;
pub mod domain;
pub mod ease;
pub mod elevation;
pub mod fixed_range;
pub mod gradient_noise;
pub mod vector_field;

pub use colour_ramp::*;
pub use domain::*;
pub use ease::*;
pub use elevation::*;
pub use fixed_range::*;
pub use gradient_noise::*;
pub use vector_field::*;

pub use terrain_core::{Rgb, TerrainError};

/// Colour of the sample at `(x, y)`.
#[inline]
pub fn colour_at<S: ElevationSource + ?Sized>(source: &S, ramp: &ColourRamp, x: i32, y: i32) -> Rgb {
    ramp.lookup(source.elevation_at(x, y))
}
