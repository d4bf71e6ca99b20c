//! Grid-based gradient noise with smoothstep blending.
//!
//! A unit gradient sits on every node of a square grid laid over the domain.
//! The elevation at a sample point is the smoothstep-weighted bilinear blend of
//! the four dot products between each enclosing corner's gradient and the offset
//! from that corner to the point. At the nodes themselves the offset is zero,
//! so the field passes through 0 at every node.

use noise::NoiseFn;
use rand::Rng;
use terrain_core::{TerrainError, Vec2};

use crate::domain::Domain;
use crate::ease::{ease, lerp};
use crate::vector_field::NodeGrid;

/// Gradient-noise evaluator over a validated [`Domain`].
#[derive(Debug, Clone, PartialEq)]
pub struct GradientNoise {
    domain: Domain,
    grid: NodeGrid,
}

impl GradientNoise {
    /// Draw a fresh node grid for `domain` from `rng`.
    pub fn new<R: Rng + ?Sized>(domain: Domain, rng: &mut R) -> Self {
        let grid = NodeGrid::generate(domain.nodes_per_side(), rng);
        Self { domain, grid }
    }

    /// Evaluate over an existing node grid, e.g. to replay a previous run.
    pub fn from_grid(domain: Domain, grid: NodeGrid) -> Result<Self, TerrainError> {
        let expected = domain.nodes_per_side();
        if grid.nodes_per_side() != expected {
            return Err(TerrainError::GridSizeMismatch {
                expected: expected * expected,
                actual: grid.nodes_per_side() * grid.nodes_per_side(),
            });
        }
        Ok(Self { domain, grid })
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn grid(&self) -> &NodeGrid {
        &self.grid
    }

    /// Raw (unnormalized) elevation at an integer sample point.
    ///
    /// Points outside `[0, side]²` return 0. On the closing edge (`x == side` or
    /// `y == side`) the last cell is used, so the edge nodes still evaluate to 0.
    pub fn evaluate(&self, map_x: i32, map_y: i32) -> f32 {
        if !self.domain.contains(map_x, map_y) {
            return 0.0;
        }

        let step = self.domain.step() as i32;
        let last_cell = self.domain.cells_per_side() as i32 - 1;
        let segment_x = (map_x / step).min(last_cell);
        let segment_y = (map_y / step).min(last_cell);

        let node_left_x = segment_x * step;
        let node_right_x = node_left_x + step;
        let node_above_y = segment_y * step;
        let node_below_y = node_above_y + step;

        let step_f = step as f32;
        let from_above_left = Vec2::new(
            (map_x - node_left_x) as f32 / step_f,
            (map_y - node_above_y) as f32 / step_f,
        );
        let from_above_right = Vec2::new((map_x - node_right_x) as f32 / step_f, from_above_left.y);
        let from_below_left = Vec2::new(from_above_left.x, (map_y - node_below_y) as f32 / step_f);
        let from_below_right = Vec2::new(from_above_right.x, from_below_left.y);

        let (col, row) = (segment_x as usize, segment_y as usize);
        let s = self.grid.gradient(col, row + 1).dot(from_below_left);
        let t = self.grid.gradient(col + 1, row + 1).dot(from_below_right);
        let u = self.grid.gradient(col, row).dot(from_above_left);
        let v = self.grid.gradient(col + 1, row).dot(from_above_right);

        // Fractional position inside the cell is the above-left offset.
        let wx = ease(from_above_left.x);
        let wy = ease(from_above_left.y);

        let bottom = lerp(s, t, wx);
        let top = lerp(u, v, wx);
        lerp(top, bottom, wy)
    }
}

/// Lets the evaluator plug into `noise` combinators. Points are floored to
/// the integer sample grid.
impl NoiseFn<f64, 2> for GradientNoise {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.evaluate(point[0].floor() as i32, point[1].floor() as i32) as f64
    }
}
