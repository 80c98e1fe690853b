use std::collections::HashSet;

use super::types::Cell;

/// Board geometry. Coordinates are pixels; the board is partitioned into
/// `block_size`-sized cells, so on-grid cells have coordinates that are
/// multiples of `block_size`.
#[derive(Clone, Copy, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    block_size: i32,
}

impl Grid {
    /// Caller is expected to have validated the geometry (see
    /// `GameSettings::validate`).
    pub fn new(width: i32, height: i32, block_size: i32) -> Self {
        Self {
            width,
            height,
            block_size,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn block_size(&self) -> i32 {
        self.block_size
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn cols(&self) -> i32 {
        self.width / self.block_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.block_size
    }

    pub fn cell_count(&self) -> usize {
        (self.cols() as usize) * (self.rows() as usize)
    }

    /// All on-grid cells not present in `occupied`, in row-major order.
    pub fn free_cells(&self, occupied: &HashSet<Cell>) -> Vec<Cell> {
        let mut free = Vec::with_capacity(self.cell_count() - occupied.len().min(self.cell_count()));
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let cell = Cell::new(col * self.block_size, row * self.block_size);
                if !occupied.contains(&cell) {
                    free.push(cell);
                }
            }
        }
        free
    }
}
