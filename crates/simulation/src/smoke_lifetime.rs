//! Per-cell smoke countdown.
//!
//! Values are only meaningful where the cell grid holds `SmokeDark` or
//! `SmokeLight`. Stale countdowns under other cell types are left in place
//! and never read.

/// Dense `width * height` countdown grid, row-major like `CellGrid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeLifetimeGrid {
    pub values: Vec<i32>,
    pub width: usize,
    pub height: usize,
}

impl SmokeLifetimeGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            values: vec![0; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.values[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        let idx = self.index(row, col);
        self.values[idx] = value;
    }

    /// Decrement the countdown at `(row, col)` and return the new value.
    #[inline]
    pub fn decrement(&mut self, row: usize, col: usize) -> i32 {
        let idx = self.index(row, col);
        self.values[idx] -= 1;
        self.values[idx]
    }

    pub fn matches_shape(&self, width: usize, height: usize) -> bool {
        self.width == width && self.height == height && self.values.len() == width * height
    }
}
