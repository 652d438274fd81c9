use bevy::prelude::*;

use crate::sandbox_params::SandboxParams;
use crate::sandbox_state::SandboxState;
use crate::sim_rng::SimRng;
use crate::simulation_sets::SimulationSet;
use crate::TickCounter;

use super::engine::step;

// =============================================================================
// Resources
// =============================================================================

/// Run control for the step loop, driven by the UI and keybindings.
#[derive(Resource, Debug, Default)]
pub struct StepControl {
    /// While paused, only explicitly requested steps are applied.
    pub paused: bool,
    /// Single steps queued while paused, consumed one per fixed tick.
    pub pending_steps: u32,
}

impl StepControl {
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.pending_steps = 0;
    }

    /// Queue one step. Has no effect while running.
    pub fn request_step(&mut self) {
        if self.paused {
            self.pending_steps = self.pending_steps.saturating_add(1);
        }
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Replace the sandbox state with the result of one engine step.
pub fn advance_sandbox(
    mut state: ResMut<SandboxState>,
    mut rng: ResMut<SimRng>,
    mut control: ResMut<StepControl>,
    mut tick: ResMut<TickCounter>,
    params: Res<SandboxParams>,
) {
    if control.paused {
        if control.pending_steps == 0 {
            return;
        }
        control.pending_steps -= 1;
    }

    let next = step(&state, params.smoke_lifespan, &mut *rng);
    *state = next;
    tick.0 = tick.0.wrapping_add(1);
}

// =============================================================================
// Plugin
// =============================================================================

pub struct StepEnginePlugin;

impl Plugin for StepEnginePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StepControl>().add_systems(
            FixedUpdate,
            advance_sandbox.in_set(SimulationSet::Simulation),
        );
    }
}
