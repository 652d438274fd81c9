use crate::grid::{CellGrid, CellType};
use crate::sandbox_state::SandboxState;
use crate::smoke_lifetime::SmokeLifetimeGrid;
use crate::water_volume::WaterVolumeGrid;

/// Working set for a single step.
///
/// `scan` starts as a copy of the current grid and is what the rules read;
/// `next` starts as another copy and is what they write. `smoke` and `water`
/// are shared working copies that every rule reads and writes in place.
pub(crate) struct StepBuffers {
    pub scan: CellGrid,
    pub next: CellGrid,
    pub smoke: SmokeLifetimeGrid,
    pub water: WaterVolumeGrid,
}

impl StepBuffers {
    pub fn from_state(state: &SandboxState) -> Self {
        Self {
            scan: state.grid.clone(),
            next: state.grid.clone(),
            smoke: state.smoke.clone(),
            water: state.water.clone(),
        }
    }

    pub fn into_state(self) -> SandboxState {
        SandboxState {
            grid: self.next,
            smoke: self.smoke,
            water: self.water,
        }
    }

    /// Scan-grid neighbor at an offset, with its coordinates.
    #[inline]
    pub fn scan_neighbor(
        &self,
        row: usize,
        col: usize,
        d_row: isize,
        d_col: isize,
    ) -> Option<(usize, usize, CellType)> {
        self.scan
            .offset(row, col, d_row, d_col)
            .map(|(r, c)| (r, c, self.scan.get(r, c)))
    }

    /// Scan-grid tag of the cell directly below, `None` on the bottom edge.
    #[inline]
    pub fn below(&self, row: usize, col: usize) -> Option<CellType> {
        self.scan.get_offset(row, col, 1, 0)
    }

    /// Write `kind` into the next grid at `to` and clear `from`.
    #[inline]
    pub fn relocate(&mut self, from: (usize, usize), to: (usize, usize), kind: CellType) {
        self.next.set(from.0, from.1, CellType::Empty);
        self.next.set(to.0, to.1, kind);
    }
}
