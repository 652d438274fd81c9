//! Pause, single-step and reset.

use crate::grid::CellType;
use crate::sandbox_params::SandboxParams;
use crate::step_engine::StepControl;
use crate::test_harness::TestSandbox;
use crate::world_init::InitLayout;

#[test]
fn paused_sandbox_does_not_step() {
    let mut sandbox = TestSandbox::new(6, 6)
        .with_cell(1, 2, CellType::Sand)
        .paused();
    let before = sandbox.state().clone();
    sandbox.tick(5);
    assert_eq!(sandbox.state(), &before);
    assert_eq!(sandbox.tick_count(), 0);
}

#[test]
fn requested_step_runs_exactly_once() {
    let mut sandbox = TestSandbox::new(6, 8)
        .with_cell(1, 2, CellType::Sand)
        .paused();
    sandbox.request_step();
    sandbox.tick(4);
    assert_eq!(sandbox.cell(2, 2), CellType::Sand);
    assert_eq!(sandbox.tick_count(), 1);
}

#[test]
fn step_requests_are_ignored_while_running() {
    let mut control = StepControl::default();
    control.request_step();
    assert_eq!(control.pending_steps, 0);
    control.toggle_pause();
    control.request_step();
    control.request_step();
    assert_eq!(control.pending_steps, 2);
    control.toggle_pause();
    assert!(!control.paused);
    assert_eq!(control.pending_steps, 0);
}

#[test]
fn reset_matches_a_fresh_start() {
    let params = SandboxParams {
        width: 14,
        height: 14,
        layout: InitLayout::Random,
        seed: 5,
        ..Default::default()
    };

    let mut fresh = TestSandbox::with_layout(params.clone());
    fresh.tick(1);

    let mut reset = TestSandbox::with_layout(params);
    reset.tick(7);
    reset.reset();
    reset.tick(1);

    assert_eq!(reset.state(), fresh.state());
    assert_eq!(reset.tick_count(), 1);
}
