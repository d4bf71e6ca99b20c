//! On-demand elevations normalized against a fixed expected range.
//!
//! For large scrolling terrains where only a viewport is ever sampled, baking
//! the whole map is wasted work. This source evaluates the noise per query and
//! maps the raw value through a constant range instead of an observed min/max.

use terrain_core::TerrainError;

use crate::elevation::ElevationSource;
use crate::gradient_noise::GradientNoise;

/// Expected low end of raw gradient-noise output.
pub const DEFAULT_RAW_LOW: f32 = -0.5;
/// Expected high end of raw gradient-noise output.
pub const DEFAULT_RAW_HIGH: f32 = 0.65;

#[derive(Debug, Clone, PartialEq)]
pub struct FixedRangeElevation {
    noise: GradientNoise,
    low: f32,
    high: f32,
}

impl FixedRangeElevation {
    pub fn new(noise: GradientNoise, low: f32, high: f32) -> Result<Self, TerrainError> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(TerrainError::InvalidElevationRange { low, high });
        }
        Ok(Self { noise, low, high })
    }

    pub fn with_default_range(noise: GradientNoise) -> Self {
        Self {
            noise,
            low: DEFAULT_RAW_LOW,
            high: DEFAULT_RAW_HIGH,
        }
    }

    pub fn noise(&self) -> &GradientNoise {
        &self.noise
    }

    pub fn range(&self) -> (f32, f32) {
        (self.low, self.high)
    }

    /// `(raw - low) / (high - low)`, clamped to [0, 1].
    #[inline]
    pub fn normalize_raw(&self, raw: f32) -> f32 {
        ((raw - self.low) / (self.high - self.low)).clamp(0.0, 1.0)
    }
}

impl ElevationSource for FixedRangeElevation {
    fn elevation_at(&self, x: i32, y: i32) -> f32 {
        let side = self.side() as i32;
        if !((0..side).contains(&x) && (0..side).contains(&y)) {
            return 0.0;
        }
        self.normalize_raw(self.noise.evaluate(x, y))
    }

    fn side(&self) -> u32 {
        self.noise.domain().side()
    }
}
