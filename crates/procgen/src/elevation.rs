//! Pre-baked elevation maps and their normalization.

use rand::Rng;
use terrain_core::Grid2;

use crate::domain::Domain;
use crate::gradient_noise::GradientNoise;

/// Something a renderer can ask for an elevation in [0, 1] at a sample point.
///
/// Sources cover the half-open square `[0, side())²`; the closing edge at
/// `side()` is outside it, like any other uncovered point.
pub trait ElevationSource {
    /// Elevation at `(x, y)`. Points the source does not cover return 0.
    fn elevation_at(&self, x: i32, y: i32) -> f32;

    /// Samples per side of the covered square.
    fn side(&self) -> u32;
}

/// Lowest and highest raw elevation seen while building a map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationRange {
    pub min: f32,
    pub max: f32,
}

impl ElevationRange {
    /// Starting range for a scan. Both ends start at 0, so the tracked range
    /// always contains raw elevation 0 even if no sample is exactly 0.
    pub const ZERO: ElevationRange = ElevationRange { min: 0.0, max: 0.0 };

    #[inline]
    pub fn include(&mut self, e: f32) {
        if e < self.min {
            self.min = e;
        }
        if e > self.max {
            self.max = e;
        }
    }

    /// Scan `values` starting from [`ElevationRange::ZERO`].
    pub fn of<'a>(values: impl IntoIterator<Item = &'a f32>) -> Self {
        let mut range = Self::ZERO;
        for &e in values {
            range.include(e);
        }
        range
    }

    /// Width of the range, `max + |min|`.
    pub fn span(&self) -> f32 {
        self.max + self.min.abs()
    }
}

/// One elevation sample per integer coordinate of a square domain.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationMap {
    samples: Grid2<f32>,
}

impl ElevationMap {
    /// Evaluate `noise` at every point of `[0, side)²`, returning the raw map
    /// and the observed range.
    pub fn build(noise: &GradientNoise) -> (Self, ElevationRange) {
        let side = noise.domain().side() as usize;
        let mut range = ElevationRange::ZERO;
        let samples = Grid2::from_fn(side, side, |x, y| {
            let e = noise.evaluate(x as i32, y as i32);
            range.include(e);
            e
        });
        log::debug!(
            "built {}x{} elevation map, raw range [{:.4}, {:.4}]",
            side,
            side,
            range.min,
            range.max
        );
        (Self { samples }, range)
    }

    /// Rescale every sample with `(e + |min|) / (max + |min|)`.
    ///
    /// Must be applied exactly once with the range returned by [`ElevationMap::build`];
    /// a second pass with the same range corrupts the map. A zero span (every
    /// sample 0) leaves the map untouched.
    pub fn normalize(&mut self, range: ElevationRange) {
        let offset = range.min.abs();
        let span = range.span();
        if span == 0.0 {
            log::warn!("elevation range has zero span, skipping normalization");
            return;
        }
        for e in self.samples.iter_mut() {
            *e = (*e + offset) / span;
        }
    }

    /// Build and normalize over an existing evaluator.
    pub fn from_noise(noise: &GradientNoise) -> Self {
        let (mut map, range) = Self::build(noise);
        map.normalize(range);
        map
    }

    /// Draw a node grid from `rng`, then build and normalize.
    pub fn generate<R: Rng + ?Sized>(domain: Domain, rng: &mut R) -> Self {
        Self::from_noise(&GradientNoise::new(domain, rng))
    }

    pub fn samples(&self) -> &Grid2<f32> {
        &self.samples
    }

    /// Stored sample, or `None` outside the map.
    pub fn get(&self, x: i32, y: i32) -> Option<f32> {
        self.samples.get_signed(x, y).copied()
    }
}

impl ElevationSource for ElevationMap {
    fn elevation_at(&self, x: i32, y: i32) -> f32 {
        self.get(x, y).unwrap_or(0.0)
    }

    fn side(&self) -> u32 {
        self.samples.width() as u32
    }
}
