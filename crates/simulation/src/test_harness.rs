//! # TestSandbox — headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` in a fluent builder so tests
//! can lay out cells, advance a fixed number of steps and inspect the result
//! without a window or renderer.

use bevy::app::App;
use bevy::prelude::*;

use crate::grid::CellType;
use crate::invariant_checks::SandboxInvariantViolations;
use crate::paint::PaintCell;
use crate::sandbox_params::SandboxParams;
use crate::sandbox_state::SandboxState;
use crate::stats::SandboxStats;
use crate::step_engine::StepControl;
use crate::world_init::{empty_bordered, InitLayout, ResetSandbox, SkipSandboxInit};
use crate::{SimulationPlugin, TickCounter};

/// A headless Bevy App wrapping `SimulationPlugin`.
///
/// Steps are driven by running the `FixedUpdate` schedule directly, so a
/// test's outcome never depends on wall-clock time.
pub struct TestSandbox {
    app: App,
}

impl TestSandbox {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Empty `width` x `height` box enclosed by walls, default params.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_params(SandboxParams {
            width,
            height,
            layout: InitLayout::Empty,
            ..Default::default()
        })
    }

    /// Start from an empty bordered box sized by `params`. Use the builder
    /// methods to place cells.
    pub fn with_params(params: SandboxParams) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Insert BEFORE SimulationPlugin so it picks the params up and
        // init_sandbox skips.
        app.insert_resource(SkipSandboxInit);
        app.insert_resource(empty_bordered(params.width, params.height));
        app.insert_resource(params);
        app.add_plugins(SimulationPlugin);

        // Run one update so Startup systems execute.
        app.update();
        app.world_mut().resource_mut::<TickCounter>().0 = 0;

        Self { app }
    }

    /// Build the layout named in `params` through the regular startup path.
    pub fn with_layout(params: SandboxParams) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(params);
        app.add_plugins(SimulationPlugin);
        app.update();
        app.world_mut().resource_mut::<TickCounter>().0 = 0;
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Setup (builder pattern — consumes and returns Self)
    // -----------------------------------------------------------------------

    pub fn with_cell(mut self, row: usize, col: usize, kind: CellType) -> Self {
        self.state_mut().grid.set(row, col, kind);
        self
    }

    /// Fill the inclusive rectangle `(r0, c0)..=(r1, c1)` with `kind`.
    pub fn with_rect(mut self, r0: usize, c0: usize, r1: usize, c1: usize, kind: CellType) -> Self {
        let mut state = self.state_mut();
        for row in r0..=r1 {
            for col in c0..=c1 {
                state.grid.set(row, col, kind);
            }
        }
        drop(state);
        self
    }

    /// Place a water cell holding `volume`.
    pub fn with_water(mut self, row: usize, col: usize, volume: f64) -> Self {
        let mut state = self.state_mut();
        state.grid.set(row, col, CellType::Water);
        state.water.set(row, col, volume);
        drop(state);
        self
    }

    /// Place a smoke cell of `kind` with `lifetime` steps left.
    pub fn with_smoke(mut self, row: usize, col: usize, kind: CellType, lifetime: i32) -> Self {
        let mut state = self.state_mut();
        state.grid.set(row, col, kind);
        state.smoke.set(row, col, lifetime);
        drop(state);
        self
    }

    pub fn paused(mut self) -> Self {
        self.app.world_mut().resource_mut::<StepControl>().paused = true;
        self
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Run `n` fixed ticks. Each tick applies pending paint, one engine step
    /// (unless paused) and the post-step checks.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Queue a paint event for the next tick.
    pub fn paint(&mut self, row: usize, col: usize, kind: CellType) {
        self.app.world_mut().send_event(PaintCell { row, col, kind });
    }

    pub fn reset(&mut self) {
        self.app.world_mut().send_event(ResetSandbox);
    }

    pub fn request_step(&mut self) {
        self.app
            .world_mut()
            .resource_mut::<StepControl>()
            .request_step();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn state(&self) -> &SandboxState {
        self.app.world().resource::<SandboxState>()
    }

    pub fn state_mut(&mut self) -> Mut<'_, SandboxState> {
        self.app.world_mut().resource_mut::<SandboxState>()
    }

    pub fn cell(&self, row: usize, col: usize) -> CellType {
        self.state().grid.get(row, col)
    }

    pub fn water(&self, row: usize, col: usize) -> f64 {
        self.state().water.get(row, col)
    }

    pub fn smoke(&self, row: usize, col: usize) -> i32 {
        self.state().smoke.get(row, col)
    }

    pub fn count(&self, kind: CellType) -> usize {
        self.state().grid.count(kind)
    }

    pub fn stats(&self) -> &SandboxStats {
        self.app.world().resource::<SandboxStats>()
    }

    pub fn violations(&self) -> &SandboxInvariantViolations {
        self.app.world().resource::<SandboxInvariantViolations>()
    }

    pub fn tick_count(&self) -> u64 {
        self.app.world().resource::<TickCounter>().0
    }

    /// Sum of water volume held by cells tagged `Water`.
    pub fn total_water(&self) -> f64 {
        let state = self.state();
        state
            .grid
            .cells
            .iter()
            .zip(&state.water.volumes)
            .filter(|(c, _)| **c == CellType::Water)
            .map(|(_, v)| v)
            .sum()
    }
}
