//! Sampled terrain extent and the node spacing laid over it.

use terrain_core::TerrainError;

/// A square terrain domain of `side x side` samples, tiled by square cells
/// of `step` samples. Both invariants are checked once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domain {
    side: u32,
    step: u32,
}

impl Domain {
    /// Validate a `width x height` domain with nodes every `step` samples.
    pub fn new(width: u32, height: u32, step: u32) -> Result<Self, TerrainError> {
        if step == 0 {
            return Err(TerrainError::ZeroStep);
        }
        if width != height {
            return Err(TerrainError::NonSquareDomain { width, height });
        }
        let side = width;
        if side == 0 {
            return Err(TerrainError::EmptyDomain);
        }
        if side > i32::MAX as u32 {
            return Err(TerrainError::DomainTooLarge { side });
        }
        if side % step != 0 {
            return Err(TerrainError::StepDoesNotDivide { side, step });
        }
        Ok(Self { side, step })
    }

    pub fn square(side: u32, step: u32) -> Result<Self, TerrainError> {
        Self::new(side, side, step)
    }

    /// Samples per side.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Samples between neighbouring nodes.
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Cells per side (`side / step`).
    pub fn cells_per_side(&self) -> u32 {
        self.side / self.step
    }

    /// Nodes per side: one more than cells, the far edge gets its own row/column.
    pub fn nodes_per_side(&self) -> usize {
        1 + self.cells_per_side() as usize
    }

    /// Whether `(x, y)` lies in the closed square `[0, side]²` covered by the node grid.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let side = self.side as i32;
        (0..=side).contains(&x) && (0..=side).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_nodes_per_side() {
        let d = Domain::square(100, 25).unwrap();
        assert_eq!(d.cells_per_side(), 4);
        assert_eq!(d.nodes_per_side(), 5);

        let d = Domain::square(2000, 80).unwrap();
        assert_eq!(d.nodes_per_side(), 26);
    }

    #[test]
    fn domain_rejects_bad_geometry() {
        assert_eq!(
            Domain::new(100, 80, 20),
            Err(TerrainError::NonSquareDomain {
                width: 100,
                height: 80
            })
        );
        assert_eq!(
            Domain::square(100, 30),
            Err(TerrainError::StepDoesNotDivide {
                side: 100,
                step: 30
            })
        );
        assert_eq!(Domain::square(100, 0), Err(TerrainError::ZeroStep));
        assert_eq!(Domain::square(0, 10), Err(TerrainError::EmptyDomain));
        assert!(matches!(
            Domain::square(u32::MAX, 1),
            Err(TerrainError::DomainTooLarge { .. })
        ));
    }

    #[test]
    fn domain_contains_closed_square() {
        let d = Domain::square(50, 10).unwrap();
        assert!(d.contains(0, 0));
        assert!(d.contains(50, 50));
        assert!(!d.contains(-1, 0));
        assert!(!d.contains(0, 51));
    }
}
