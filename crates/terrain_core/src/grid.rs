//! Dense row-major 2D storage.

use crate::error::TerrainError;

/// A `width x height` grid backed by a single `Vec`, indexed `row * width + col`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid2<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid2<T> {
    /// Wrap an existing row-major buffer. Fails if `cells.len() != width * height`.
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Result<Self, TerrainError> {
        let expected = width * height;
        if cells.len() != expected {
            return Err(TerrainError::GridSizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { width, height, cells })
    }

    /// Fill a grid row by row from `f(col, row)`.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(f(col, row));
            }
        }
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn index_of(&self, col: usize, row: usize) -> Option<usize> {
        if col < self.width && row < self.height {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Option<&T> {
        self.index_of(col, row).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut T> {
        self.index_of(col, row).map(move |i| &mut self.cells[i])
    }

    /// Signed lookup; negative coordinates are simply out of bounds.
    #[inline]
    pub fn get_signed(&self, col: i32, row: i32) -> Option<&T> {
        if col < 0 || row < 0 {
            return None;
        }
        self.get(col as usize, row as usize)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.cells.iter_mut()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, T> {
        // chunks(0) panics; an empty grid yields no rows either way
        self.cells.chunks(self.width.max(1))
    }
}

impl<T> std::ops::Index<(usize, usize)> for Grid2<T> {
    type Output = T;

    fn index(&self, (col, row): (usize, usize)) -> &T {
        assert!(
            col < self.width && row < self.height,
            "grid index ({col}, {row}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        &self.cells[row * self.width + col]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Grid2<T> {
    fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut T {
        assert!(
            col < self.width && row < self.height,
            "grid index ({col}, {row}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        &mut self.cells[row * self.width + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_row_major() {
        let g = Grid2::from_fn(3, 2, |col, row| row * 10 + col);
        assert_eq!(g.as_slice(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(g[(2, 1)], 12);
        assert_eq!(g.get(3, 0), None);
        assert_eq!(g.rows().count(), 2);
    }

    #[test]
    fn grid_from_vec_checks_size() {
        let err = Grid2::from_vec(2, 2, vec![0u8; 3]).unwrap_err();
        assert_eq!(
            err,
            TerrainError::GridSizeMismatch {
                expected: 4,
                actual: 3
            }
        );
        assert!(Grid2::from_vec(2, 2, vec![0u8; 4]).is_ok());
    }

    #[test]
    fn grid_signed_lookup_rejects_negatives() {
        let g = Grid2::new(4, 4, 1.5f32);
        assert_eq!(g.get_signed(-1, 0), None);
        assert_eq!(g.get_signed(0, -3), None);
        assert_eq!(g.get_signed(3, 3), Some(&1.5));
        assert_eq!(g.get_signed(4, 3), None);
    }

    #[test]
    fn grid_get_mut_writes_through() {
        let mut g = Grid2::new(2, 2, 0);
        *g.get_mut(1, 0).unwrap() = 7;
        g[(0, 1)] = 3;
        assert_eq!(g.as_slice(), &[0, 7, 3, 0]);
    }
}
