//! Placing cells by hand.
//!
//! The view layer turns clicks into [`PaintCell`] events; they are applied
//! before the step in the same fixed tick.

use bevy::prelude::*;

use crate::config::{PAINT_WATER_CEILING, PAINT_WATER_INCREMENT};
use crate::grid::CellType;
use crate::sandbox_params::SandboxParams;
use crate::sandbox_state::SandboxState;
use crate::simulation_sets::SimulationSet;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintCell {
    pub row: usize,
    pub col: usize,
    pub kind: CellType,
}

/// Write `kind` into `(row, col)`. Returns false for border or out-of-range
/// cells, which are never painted.
///
/// Painting water onto water tops it up by `PAINT_WATER_INCREMENT`, up to
/// `PAINT_WATER_CEILING`; fresh water starts at one increment. Smoke gets a
/// full `smoke_lifespan`. Any other material clears both auxiliary values.
pub fn paint_cell(
    state: &mut SandboxState,
    row: usize,
    col: usize,
    kind: CellType,
    smoke_lifespan: i32,
) -> bool {
    if !state.grid.in_bounds(row, col) || state.grid.is_border(row, col) {
        return false;
    }

    let previous = state.grid.get(row, col);
    state.grid.set(row, col, kind);

    match kind {
        CellType::Water if previous == CellType::Water => {
            state
                .water
                .add_capped(row, col, PAINT_WATER_INCREMENT, PAINT_WATER_CEILING);
            state.smoke.set(row, col, 0);
        }
        CellType::Water => {
            state.water.set(row, col, PAINT_WATER_INCREMENT);
            state.smoke.set(row, col, 0);
        }
        k if k.is_smoke() => {
            state.smoke.set(row, col, smoke_lifespan);
            state.water.set(row, col, 0.0);
        }
        _ => {
            state.smoke.set(row, col, 0);
            state.water.set(row, col, 0.0);
        }
    }
    true
}

pub fn apply_paint_events(
    mut events: EventReader<PaintCell>,
    mut state: ResMut<SandboxState>,
    params: Res<SandboxParams>,
) {
    for ev in events.read() {
        if !paint_cell(&mut state, ev.row, ev.col, ev.kind, params.smoke_lifespan) {
            debug!("Ignoring paint of {:?} at ({}, {})", ev.kind, ev.row, ev.col);
        }
    }
}

pub struct PaintPlugin;

impl Plugin for PaintPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PaintCell>().add_systems(
            FixedUpdate,
            apply_paint_events.in_set(SimulationSet::PreSim),
        );
    }
}
