//! Setup errors for terrain domains, node grids and colour ramps.

use thiserror::Error;

/// Raised when terrain or a colour ramp is constructed with parameters that
/// would produce corrupted geometry. Queries never return this.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    #[error("terrain domain must be square, got {width}x{height}")]
    NonSquareDomain { width: u32, height: u32 },

    #[error("terrain domain side must be non-zero")]
    EmptyDomain,

    #[error("terrain domain side {side} is too large")]
    DomainTooLarge { side: u32 },

    #[error("viewport side {side} exceeds the limit of {max}")]
    ViewportTooLarge { side: u32, max: u32 },

    #[error("grid step must be non-zero")]
    ZeroStep,

    #[error("domain side {side} is not divisible by step {step}")]
    StepDoesNotDivide { side: u32, step: u32 },

    #[error("grid holds {actual} cells, expected {expected}")]
    GridSizeMismatch { expected: usize, actual: usize },

    #[error("colour ramp bounds must satisfy min < max, got min={min} max={max}")]
    InvalidRampBounds { min: f32, max: f32 },

    #[error("expected elevation range must satisfy low < high, got low={low} high={high}")]
    InvalidElevationRange { low: f32, high: f32 },

    #[error("breakpoint threshold {threshold} is outside the open ramp range ({min}, {max})")]
    ThresholdOutOfRange { threshold: f32, min: f32, max: f32 },

    #[error("colour ramp already has a breakpoint at {threshold}")]
    DuplicateThreshold { threshold: f32 },
}
