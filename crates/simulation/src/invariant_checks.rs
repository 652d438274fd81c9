//! Runtime invariant guards for the sandbox state.
//!
//! Run after every step. The wall ring must be intact and every water volume
//! must be finite and non-negative. Violations are logged and repaired: the
//! ring is re-walled and bad volumes are reset to zero.

use bevy::prelude::*;

use crate::grid::CellType;
use crate::sandbox_state::SandboxState;
use crate::simulation_sets::SimulationSet;

/// Violations found during the last validation pass. Used by integration
/// tests.
#[derive(Resource, Default, Debug)]
pub struct SandboxInvariantViolations {
    pub border: u32,
    pub water_volume: u32,
    /// Running total across all passes.
    pub total: u64,
}

// ---------------------------------------------------------------------------
// Pure checks
// ---------------------------------------------------------------------------

/// Re-wall any border cell that is not a wall. Returns the number fixed.
pub fn repair_border(state: &mut SandboxState) -> u32 {
    let broken: Vec<(usize, usize)> = state
        .grid
        .border_coords()
        .filter(|&(r, c)| state.grid.get(r, c) != CellType::Wall)
        .collect();
    for &(row, col) in &broken {
        warn!(
            "Invariant violation: border cell ({}, {}) is {:?}. Restoring wall.",
            row,
            col,
            state.grid.get(row, col)
        );
        state.grid.set(row, col, CellType::Wall);
    }
    broken.len() as u32
}

/// Zero any NaN, infinite or negative water volume. Returns the number fixed.
pub fn repair_water_volumes(state: &mut SandboxState) -> u32 {
    let mut fixed = 0;
    for volume in state.water.volumes.iter_mut() {
        if !volume.is_finite() || *volume < 0.0 {
            warn!("Invariant violation: water volume {}. Resetting to 0.", volume);
            *volume = 0.0;
            fixed += 1;
        }
    }
    fixed
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

pub fn validate_border(
    mut state: ResMut<SandboxState>,
    mut violations: ResMut<SandboxInvariantViolations>,
) {
    // read through `Deref` first; `DerefMut` flags the resource as changed
    let ok = state
        .grid
        .border_coords()
        .all(|(r, c)| state.grid.get(r, c) == CellType::Wall);
    violations.border = if ok { 0 } else { repair_border(&mut state) };
    violations.total += u64::from(violations.border);
}

pub fn validate_water_volume(
    mut state: ResMut<SandboxState>,
    mut violations: ResMut<SandboxInvariantViolations>,
) {
    let ok = state
        .water
        .volumes
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0);
    violations.water_volume = if ok {
        0
    } else {
        repair_water_volumes(&mut state)
    };
    violations.total += u64::from(violations.water_volume);
}

pub struct InvariantChecksPlugin;

impl Plugin for InvariantChecksPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SandboxInvariantViolations>().add_systems(
            FixedUpdate,
            (validate_border, validate_water_volume)
                .chain()
                .in_set(SimulationSet::PostSim),
        );
    }
}
