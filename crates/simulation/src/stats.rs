use bevy::prelude::*;

use crate::grid::CellType;
use crate::sandbox_state::SandboxState;
use crate::TickCounter;

/// Per-material census of the grid plus water totals, refreshed after every
/// step for the UI readout.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct SandboxStats {
    /// Indexed by `CellType::ordinal`.
    pub counts: [u32; 9],
    pub total_water: f64,
    pub max_water: f64,
    pub steps: u64,
}

impl SandboxStats {
    pub fn from_state(state: &SandboxState) -> Self {
        let mut stats = Self::default();
        for &cell in &state.grid.cells {
            stats.counts[cell.ordinal()] += 1;
        }
        for (i, &volume) in state.water.volumes.iter().enumerate() {
            if state.grid.cells.get(i) == Some(&CellType::Water) {
                stats.total_water += volume;
                stats.max_water = stats.max_water.max(volume);
            }
        }
        stats
    }

    pub fn count(&self, kind: CellType) -> u32 {
        self.counts[kind.ordinal()]
    }

    pub fn smoke_cells(&self) -> u32 {
        self.count(CellType::SmokeDark) + self.count(CellType::SmokeLight)
    }
}

pub fn update_stats(
    state: Res<SandboxState>,
    tick: Res<TickCounter>,
    mut stats: ResMut<SandboxStats>,
) {
    if !state.is_changed() && stats.steps == tick.0 {
        return;
    }
    let mut fresh = SandboxStats::from_state(&state);
    fresh.steps = tick.0;
    *stats = fresh;
}
