//! Random gradient vectors pinned to the noise grid nodes.

use std::f32::consts::TAU;

use rand::Rng;
use terrain_core::{Grid2, TerrainError, Vec2};

/// Draw a unit vector with a uniformly random angle in [0, 2π).
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let angle: f32 = rng.gen_range(0.0..TAU);
    let (sin, cos) = angle.sin_cos();
    Vec2::new(cos, sin)
}

/// Square grid of unit gradient vectors, one per node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeGrid {
    nodes: Grid2<Vec2>,
}

impl NodeGrid {
    /// Fill a `nodes_per_side x nodes_per_side` grid with random unit vectors,
    /// drawn row by row from `rng`.
    pub fn generate<R: Rng + ?Sized>(nodes_per_side: usize, rng: &mut R) -> Self {
        let nodes = Grid2::from_fn(nodes_per_side, nodes_per_side, |_, _| random_unit_vector(&mut *rng));
        log::debug!(
            "generated {}x{} gradient node grid",
            nodes_per_side,
            nodes_per_side
        );
        Self { nodes }
    }

    /// Use caller-supplied gradients (row-major). Vectors are stored as given.
    pub fn from_vectors(nodes_per_side: usize, vectors: Vec<Vec2>) -> Result<Self, TerrainError> {
        Ok(Self {
            nodes: Grid2::from_vec(nodes_per_side, nodes_per_side, vectors)?,
        })
    }

    pub fn nodes_per_side(&self) -> usize {
        self.nodes.width()
    }

    /// Gradient at node `(col, row)`. Panics if the node is outside the grid.
    #[inline]
    pub fn gradient(&self, col: usize, row: usize) -> Vec2 {
        self.nodes[(col, row)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn generated_vectors_are_unit_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = NodeGrid::generate(26, &mut rng);
        assert_eq!(grid.nodes_per_side(), 26);
        assert_eq!(grid.iter().count(), 26 * 26);
        for v in grid.iter() {
            assert!(
                (v.x * v.x + v.y * v.y - 1.0).abs() < 1e-5,
                "vector {:?} is not unit length",
                v
            );
        }
    }

    #[test]
    fn same_seed_same_grid() {
        let a = NodeGrid::generate(5, &mut StdRng::seed_from_u64(42));
        let b = NodeGrid::generate(5, &mut StdRng::seed_from_u64(42));
        let c = NodeGrid::generate(5, &mut StdRng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn from_vectors_checks_count() {
        let err = NodeGrid::from_vectors(3, vec![Vec2::X; 8]).unwrap_err();
        assert_eq!(
            err,
            TerrainError::GridSizeMismatch {
                expected: 9,
                actual: 8
            }
        );
        let grid = NodeGrid::from_vectors(2, vec![Vec2::X, Vec2::Y, -Vec2::X, -Vec2::Y]).unwrap();
        assert_eq!(grid.gradient(1, 0), Vec2::Y);
        assert_eq!(grid.gradient(0, 1), -Vec2::X);
    }
}
