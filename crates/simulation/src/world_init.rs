// =============================================================================
// Starting layouts: empty bordered box, weighted random fill, and the fixed
// demo scene used for manual testing.
// =============================================================================

use bevy::prelude::*;
use rand::distributions::{WeightedError, WeightedIndex};
use rand::prelude::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::MAX_WATER_VOLUME;
use crate::grid::{CellGrid, CellType};
use crate::sandbox_params::SandboxParams;
use crate::sandbox_state::SandboxState;
use crate::sim_rng::SimRng;
use crate::TickCounter;

/// Which scene `init_sandbox` and `ResetSandbox` build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitLayout {
    Empty,
    Random,
    #[default]
    TestEnvironment,
}

/// Equal odds for the five basic materials.
pub const DEFAULT_RANDOM_WEIGHTS: [(CellType, f64); 5] = [
    (CellType::Empty, 0.2),
    (CellType::Wall, 0.2),
    (CellType::Sand, 0.2),
    (CellType::Wood, 0.2),
    (CellType::Fire, 0.2),
];

/// Marker resource that, when present, causes `init_sandbox` to leave the
/// existing `SandboxState` alone. Used by the test harness.
#[derive(Resource)]
pub struct SkipSandboxInit;

/// Rebuild the sandbox from the current `SandboxParams`.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetSandbox;

// ---------------------------------------------------------------------------
// Layout builders
// ---------------------------------------------------------------------------

pub fn empty_bordered(width: usize, height: usize) -> SandboxState {
    SandboxState::new(CellGrid::bordered(width, height))
}

/// Fill every cell by weighted choice, then force the wall ring.
///
/// Smoke cells start with `smoke_lifespan` and water cells start full.
pub fn random_layout<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    weights: &[(CellType, f64)],
    smoke_lifespan: i32,
    rng: &mut R,
) -> Result<SandboxState, WeightedError> {
    let dist = WeightedIndex::new(weights.iter().map(|&(_, w)| w))?;
    let mut state = SandboxState::new(CellGrid::new(width, height));

    for row in 0..height {
        for col in 0..width {
            let kind = weights[dist.sample(rng)].0;
            state.grid.set(row, col, kind);
        }
    }
    state.grid.enclose_with_walls();

    for row in 0..height {
        for col in 0..width {
            match state.grid.get(row, col) {
                k if k.is_smoke() => state.smoke.set(row, col, smoke_lifespan),
                CellType::Water => state.water.set(row, col, MAX_WATER_VOLUME),
                _ => {}
            }
        }
    }
    Ok(state)
}

/// Fixed demo scene on a `size` x `size` grid: a sand pile above a wooden
/// block with fire beneath it, a few smoke puffs, a wall cross along row 3
/// and column 3, scattered wall segments and a short water column. Placements that fall outside a small grid are skipped.
pub fn test_environment(size: usize) -> SandboxState {
    let mut env = Placer {
        state: SandboxState::new(CellGrid::new(size, size)),
    };

    for row in 5..=7 {
        for col in 4..=6 {
            env.cell(row, col, CellType::Sand);
        }
    }
    for (row, col) in [(8, 5), (9, 5), (8, 6), (9, 6)] {
        env.cell(row, col, CellType::Wood);
    }
    env.cell(10, 5, CellType::Fire);
    env.cell(10, 6, CellType::Fire);

    env.smoke(12, 5, CellType::SmokeDark, 20);
    env.smoke(12, 6, CellType::SmokeLight, 15);
    env.smoke(13, 4, CellType::SmokeLight, 10);
    env.smoke(13, 7, CellType::SmokeDark, 18);

    for col in 0..size {
        env.cell(3, col, CellType::Wall);
    }
    for row in 0..size {
        env.cell(row, 3, CellType::Wall);
    }
    for row in 4..10 {
        env.cell(row, 8, CellType::Wall);
    }
    for col in 2..6 {
        env.cell(5, col, CellType::Wall);
    }
    for col in 0..3 {
        env.cell(8, col, CellType::Wall);
    }
    for col in 6..9 {
        env.cell(11, col, CellType::Wall);
    }

    env.water(6, 5, 1.0);
    env.water(7, 5, 0.5);
    env.water(8, 5, 0.25);

    let mut state = env.state;
    state.grid.enclose_with_walls();
    clear_aux_under_walls(&mut state);
    state
}

/// Build the scene described by `params`. A random layout with unusable
/// weights falls back to an empty box.
pub fn build_layout<R: Rng + ?Sized>(params: &SandboxParams, rng: &mut R) -> SandboxState {
    match params.layout {
        InitLayout::Empty => empty_bordered(params.width, params.height),
        InitLayout::TestEnvironment => {
            if params.width != params.height {
                warn!(
                    "Test environment is square; using {}x{} instead of {}x{}",
                    params.width, params.width, params.width, params.height
                );
            }
            test_environment(params.width)
        }
        InitLayout::Random => random_layout(
            params.width,
            params.height,
            &params.random_weights,
            params.smoke_lifespan,
            rng,
        )
        .unwrap_or_else(|e| {
            warn!("Random layout unavailable ({}), starting empty", e);
            empty_bordered(params.width, params.height)
        }),
    }
}

struct Placer {
    state: SandboxState,
}

impl Placer {
    fn cell(&mut self, row: usize, col: usize, kind: CellType) {
        if self.state.grid.in_bounds(row, col) {
            self.state.grid.set(row, col, kind);
        }
    }

    fn smoke(&mut self, row: usize, col: usize, kind: CellType, lifetime: i32) {
        if self.state.grid.in_bounds(row, col) {
            self.state.grid.set(row, col, kind);
            self.state.smoke.set(row, col, lifetime);
        }
    }

    fn water(&mut self, row: usize, col: usize, volume: f64) {
        if self.state.grid.in_bounds(row, col) {
            self.state.grid.set(row, col, CellType::Water);
            self.state.water.set(row, col, volume);
        }
    }
}

/// Drop stale smoke/water values on cells the wall ring overwrote.
fn clear_aux_under_walls(state: &mut SandboxState) {
    for row in 0..state.height() {
        for col in 0..state.width() {
            if state.grid.is_border(row, col) {
                state.smoke.set(row, col, 0);
                state.water.set(row, col, 0.0);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

pub fn init_sandbox(
    mut commands: Commands,
    params: Res<SandboxParams>,
    mut rng: ResMut<SimRng>,
    skip: Option<Res<SkipSandboxInit>>,
) {
    if skip.is_some() {
        return;
    }
    let state = build_layout(&params, &mut rng.0);
    info!(
        "Sandbox initialized: {:?} layout, {}x{}",
        params.layout,
        state.width(),
        state.height()
    );
    commands.insert_resource(state);
}

pub fn reset_sandbox(
    mut events: EventReader<ResetSandbox>,
    params: Res<SandboxParams>,
    mut rng: ResMut<SimRng>,
    mut state: ResMut<SandboxState>,
    mut tick: ResMut<TickCounter>,
) {
    if events.read().last().is_none() {
        return;
    }
    *rng = SimRng::from_seed_u64(params.seed);
    *state = build_layout(&params, &mut rng.0);
    tick.0 = 0;
    info!("Sandbox reset to {:?} layout", params.layout);
}
