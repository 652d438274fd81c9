use crate::grid::{CellGrid, CellType};
use crate::sandbox_state::SandboxState;
use crate::sim_rng::TieBreak;
use crate::smoke_lifetime::SmokeLifetimeGrid;
use crate::water_volume::WaterVolumeGrid;

use super::buffers::StepBuffers;
use super::{fire, ice, sand, smoke, water, wood};

/// Advance `state` by one step and return the resulting state.
///
/// `smoke_lifespan` is the countdown given to smoke created during this step.
/// `order` supplies the random tie-break permutations.
///
/// The grid must be at least 3x3 with a wall ring; neither is checked.
/// Auxiliary arrays whose shape differs from the grid are replaced by zeroed
/// arrays before the scan.
pub fn step<R: TieBreak>(state: &SandboxState, smoke_lifespan: i32, order: &mut R) -> SandboxState {
    if !state.smoke.matches_shape(state.width(), state.height())
        || !state.water.matches_shape(state.width(), state.height())
    {
        let mut fixed = state.clone();
        fixed.ensure_aux_shapes();
        return scan(StepBuffers::from_state(&fixed), smoke_lifespan, order);
    }
    scan(StepBuffers::from_state(state), smoke_lifespan, order)
}

/// [`step`] over loose parts, returning `(grid, smoke, water)`.
pub fn step_parts<R: TieBreak>(
    grid: &CellGrid,
    smoke: &SmokeLifetimeGrid,
    water: &WaterVolumeGrid,
    smoke_lifespan: i32,
    order: &mut R,
) -> (CellGrid, SmokeLifetimeGrid, WaterVolumeGrid) {
    let state = SandboxState::from_parts(grid.clone(), smoke.clone(), water.clone());
    let next = step(&state, smoke_lifespan, order);
    (next.grid, next.smoke, next.water)
}

fn scan<R: TieBreak>(mut buffers: StepBuffers, smoke_lifespan: i32, order: &mut R) -> SandboxState {
    let height = buffers.scan.height;
    let width = buffers.scan.width;

    for row in (1..height.saturating_sub(1)).rev() {
        for col in 1..width.saturating_sub(1) {
            match buffers.scan.get(row, col) {
                CellType::Empty | CellType::Wall => {}
                CellType::Sand => sand::update_sand(&mut buffers, row, col, order),
                CellType::Wood => wood::update_wood(&mut buffers, row, col),
                CellType::Fire => fire::update_fire(&mut buffers, row, col, smoke_lifespan),
                CellType::SmokeDark | CellType::SmokeLight => {
                    smoke::update_smoke(&mut buffers, row, col, order)
                }
                CellType::Water => water::update_water(&mut buffers, row, col),
                CellType::Ice => ice::update_ice(&mut buffers, row, col),
            }
        }
    }

    buffers.into_state()
}
