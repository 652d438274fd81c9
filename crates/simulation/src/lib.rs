use bevy::prelude::*;

pub mod config;
pub mod grid;
pub mod invariant_checks;
pub mod paint;
pub mod sandbox_params;
pub mod sandbox_state;
pub mod sim_rng;
pub mod simulation_sets;
pub mod smoke_lifetime;
pub mod stats;
pub mod step_engine;
pub mod water_volume;
pub mod world_init;


#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

use sandbox_params::SandboxParams;
use sandbox_state::SandboxState;
use sim_rng::SimRng;
use simulation_sets::SimulationSet;

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Number of engine steps applied since startup or the last reset.
#[derive(Resource, Default, Debug)]
pub struct TickCounter(pub u64);

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Params may be inserted by the app (file/env overrides) or a test
        // before this plugin is added.
        let params = app
            .world()
            .get_resource::<SandboxParams>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(Time::<Fixed>::from_duration(params.step_interval()))
            .insert_resource(SimRng::from_seed_u64(params.seed))
            .insert_resource(params)
            .init_resource::<SandboxState>()
            .init_resource::<TickCounter>()
            .init_resource::<stats::SandboxStats>()
            .add_event::<world_init::ResetSandbox>()
            .add_systems(Startup, world_init::init_sandbox)
            .add_systems(
                FixedUpdate,
                world_init::reset_sandbox.in_set(SimulationSet::PreSim),
            )
            .add_systems(
                FixedUpdate,
                stats::update_stats
                    .after(invariant_checks::validate_water_volume)
                    .in_set(SimulationSet::PostSim),
            );

        app.add_plugins((
            simulation_sets::SimulationSetsPlugin,
            paint::PaintPlugin,
            step_engine::StepEnginePlugin,
            invariant_checks::InvariantChecksPlugin,
        ));
    }
}
