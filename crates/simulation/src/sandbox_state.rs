//! The simulation state triple: cell tags, smoke countdowns and water volume.

use bevy::prelude::*;

use crate::config::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use crate::grid::CellGrid;
use crate::smoke_lifetime::SmokeLifetimeGrid;
use crate::water_volume::WaterVolumeGrid;

/// Grid plus its two auxiliary arrays, always sized to match.
///
/// The step engine consumes a `SandboxState` by reference and returns a fresh
/// one; the Bevy resource is simply swapped for the result every step.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SandboxState {
    pub grid: CellGrid,
    pub smoke: SmokeLifetimeGrid,
    pub water: WaterVolumeGrid,
}

impl Default for SandboxState {
    fn default() -> Self {
        Self::new(CellGrid::bordered(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT))
    }
}

impl SandboxState {
    /// Wrap a grid with zeroed smoke and water arrays of the same shape.
    pub fn new(grid: CellGrid) -> Self {
        let (width, height) = (grid.width, grid.height);
        Self {
            grid,
            smoke: SmokeLifetimeGrid::new(width, height),
            water: WaterVolumeGrid::new(width, height),
        }
    }

    /// Assemble a state from parts, re-allocating any auxiliary array whose
    /// shape does not match the grid.
    pub fn from_parts(grid: CellGrid, smoke: SmokeLifetimeGrid, water: WaterVolumeGrid) -> Self {
        let mut state = Self { grid, smoke, water };
        state.ensure_aux_shapes();
        state
    }

    /// Reset mismatched auxiliary arrays to zeroed arrays of the grid's shape.
    /// Returns true if anything was re-allocated.
    pub fn ensure_aux_shapes(&mut self) -> bool {
        let (width, height) = (self.grid.width, self.grid.height);
        let mut reset = false;
        if !self.smoke.matches_shape(width, height) {
            debug!(
                "SandboxState: smoke lifetime grid is {}x{}, grid is {}x{}; re-allocating",
                self.smoke.width, self.smoke.height, width, height
            );
            self.smoke = SmokeLifetimeGrid::new(width, height);
            reset = true;
        }
        if !self.water.matches_shape(width, height) {
            debug!(
                "SandboxState: water volume grid is {}x{}, grid is {}x{}; re-allocating",
                self.water.width, self.water.height, width, height
            );
            self.water = WaterVolumeGrid::new(width, height);
            reset = true;
        }
        reset
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height
    }
}
