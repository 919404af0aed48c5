// grid.rs - Activation state of a fixed-size tile grid
//
// Cells are stored row-major: index = row * width + col.

use crate::TileError;

/// A `width` x `height` grid of on/off cells.
///
/// The grid is mutated in place; `toggle` and `set` take `&mut self` and touch
/// exactly one cell. Nothing derived from the cells (signatures, sprites) is
/// cached here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell inactive.
    pub fn new(width: usize, height: usize) -> Result<Self, TileError> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(TileError::InvalidDimension { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, always `width * height`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Linear index of `(row, col)`, or `None` when off the grid.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// `(row, col)` of a linear index, or `None` when out of range.
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.len()).then(|| (index / self.width, index % self.width))
    }

    pub fn is_active(&self, index: usize) -> Result<bool, TileError> {
        self.check(index)?;
        Ok(self.cells[index])
    }

    /// Flip one cell and return its new state.
    pub fn toggle(&mut self, index: usize) -> Result<bool, TileError> {
        self.check(index)?;
        let cell = &mut self.cells[index];
        *cell = !*cell;
        log::trace!("toggled cell {index} -> {}", *cell);
        Ok(*cell)
    }

    pub fn set(&mut self, index: usize, active: bool) -> Result<(), TileError> {
        self.check(index)?;
        self.cells[index] = active;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn fill(&mut self) {
        self.cells.fill(true);
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    fn check(&self, index: usize) -> Result<(), TileError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(TileError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }
}
