use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::grid::{CellGrid, CellType};
use crate::sandbox_state::SandboxState;
use crate::sim_rng::{FixedOrder, ReversedOrder, SimRng};
use crate::smoke_lifetime::SmokeLifetimeGrid;
use crate::water_volume::WaterVolumeGrid;
use crate::world_init::{empty_bordered, random_layout, DEFAULT_RANDOM_WEIGHTS};

use super::*;

const LIFESPAN: i32 = 6;

fn boxed(size: usize) -> SandboxState {
    empty_bordered(size, size)
}

fn put(state: &mut SandboxState, row: usize, col: usize, kind: CellType) {
    state.grid.set(row, col, kind);
}

fn put_water(state: &mut SandboxState, row: usize, col: usize, volume: f64) {
    state.grid.set(row, col, CellType::Water);
    state.water.set(row, col, volume);
}

fn run(state: SandboxState, steps: usize) -> SandboxState {
    (0..steps).fold(state, |s, _| step(&s, LIFESPAN, &mut FixedOrder))
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ===========================================================================
// Sand
// ===========================================================================

#[test]
fn sand_falls_one_row_per_step_and_rests_on_floor() {
    let mut state = boxed(5);
    put(&mut state, 1, 2, CellType::Sand);

    let s1 = run(state, 1);
    assert_eq!(s1.grid.get(2, 2), CellType::Sand);
    assert_eq!(s1.grid.get(1, 2), CellType::Empty);

    let s2 = run(s1, 1);
    assert_eq!(s2.grid.get(3, 2), CellType::Sand);

    let s3 = run(s2.clone(), 1);
    assert_eq!(s3, s2, "sand on the floor must not move");
}

#[test]
fn sand_rests_on_wood() {
    let mut state = boxed(5);
    put(&mut state, 2, 2, CellType::Sand);
    put(&mut state, 3, 2, CellType::Wood);

    let next = run(state.clone(), 1);
    assert_eq!(next.grid, state.grid);
}

#[test]
fn blocked_sand_slides_to_first_free_diagonal() {
    let mut state = boxed(5);
    put(&mut state, 2, 2, CellType::Sand);
    put(&mut state, 3, 2, CellType::Sand);

    let left = step(&state, LIFESPAN, &mut FixedOrder);
    assert_eq!(left.grid.get(3, 1), CellType::Sand);
    assert_eq!(left.grid.get(2, 2), CellType::Empty);

    let right = step(&state, LIFESPAN, &mut ReversedOrder);
    assert_eq!(right.grid.get(3, 3), CellType::Sand);
    assert_eq!(right.grid.get(2, 2), CellType::Empty);
}

#[test]
fn sand_with_no_free_diagonal_stays() {
    let mut state = boxed(5);
    put(&mut state, 2, 2, CellType::Sand);
    for col in 1..=3 {
        put(&mut state, 3, col, CellType::Sand);
    }
    let next = run(state.clone(), 1);
    assert_eq!(next.grid, state.grid);
}

#[test]
fn sand_pushes_water_aside_when_a_side_is_free() {
    let mut state = boxed(5);
    put(&mut state, 2, 2, CellType::Sand);
    put_water(&mut state, 3, 2, 1.0);

    let next = run(state, 1);
    // the water spread sideways first, then the sand pushed into (3,1)
    assert_eq!(next.grid.get(3, 1), CellType::Water);
    assert_eq!(next.grid.get(3, 2), CellType::Sand);
    assert_eq!(next.grid.get(3, 3), CellType::Water);
    // the pushing sand is not removed from its source cell
    assert_eq!(next.grid.get(2, 2), CellType::Sand);
    assert!(approx(next.water.get(3, 1), 0.5));
    assert!(approx(next.water.get(3, 3), 0.25));
}

#[test]
fn sand_swaps_with_boxed_in_water_without_moving_volume() {
    let mut state = boxed(5);
    put(&mut state, 2, 2, CellType::Sand);
    put_water(&mut state, 3, 2, 1.0);
    put(&mut state, 3, 1, CellType::Wall);
    put(&mut state, 3, 3, CellType::Wall);

    let next = run(state, 1);
    assert_eq!(next.grid.get(2, 2), CellType::Water);
    assert_eq!(next.grid.get(3, 2), CellType::Sand);
    assert_eq!(next.water.get(3, 2), 1.0);
    assert_eq!(next.water.get(2, 2), 0.0);
}

// ===========================================================================
// Wood and fire
// ===========================================================================

#[test]
fn wood_next_to_fire_ignites() {
    let mut state = boxed(5);
    put(&mut state, 3, 1, CellType::Sand);
    put(&mut state, 3, 2, CellType::Sand);
    put(&mut state, 2, 1, CellType::Fire);
    put(&mut state, 2, 2, CellType::Wood);

    let next = run(state, 1);
    assert_eq!(next.grid.get(2, 2), CellType::Fire);
    assert_eq!(next.grid.get(2, 1), CellType::SmokeLight);
    assert_eq!(next.smoke.get(2, 1), LIFESPAN);
}

#[test]
fn fire_burns_into_wood_below_leaving_dark_smoke() {
    let mut state = boxed(5);
    put(&mut state, 2, 2, CellType::Fire);
    put(&mut state, 3, 2, CellType::Wood);

    let next = step(&state, 9, &mut FixedOrder);
    assert_eq!(next.grid.get(3, 2), CellType::Fire);
    assert_eq!(next.grid.get(2, 2), CellType::SmokeDark);
    assert_eq!(next.smoke.get(2, 2), 9);
}

#[test]
fn fire_falls_through_empty_space() {
    let mut state = boxed(6);
    put(&mut state, 1, 3, CellType::Fire);

    let next = run(state, 1);
    assert_eq!(next.grid.get(2, 3), CellType::Fire);
    assert_eq!(next.grid.get(1, 3), CellType::Empty);
}

#[test]
fn wood_falls_and_rests_on_water() {
    let mut state = boxed(6);
    put(&mut state, 1, 2, CellType::Wood);
    let next = run(state, 1);
    assert_eq!(next.grid.get(2, 2), CellType::Wood);

    let mut resting = boxed(5);
    put(&mut resting, 2, 2, CellType::Wood);
    put_water(&mut resting, 3, 2, 0.5);
    put(&mut resting, 3, 1, CellType::Wall);
    put(&mut resting, 3, 3, CellType::Wall);
    let next = run(resting, 1);
    assert_eq!(next.grid.get(2, 2), CellType::Wood);
    assert_eq!(next.grid.get(3, 2), CellType::Water);
}

#[test]
fn wood_floats_up_through_a_water_column() {
    let mut state = empty_bordered(3, 7);
    put(&mut state, 5, 1, CellType::Wood);
    put_water(&mut state, 4, 1, 0.5);
    put_water(&mut state, 3, 1, 0.5);

    let next = run(state, 1);
    assert_eq!(next.grid.get(3, 1), CellType::Wood);
    assert_eq!(next.grid.get(4, 1), CellType::Water);
    assert_eq!(next.grid.get(5, 1), CellType::Water);
    assert!(approx(next.water.get(4, 1), 0.5));
    assert!(approx(next.water.get(5, 1), 1.0));
}

#[test]
fn wood_squeezed_between_full_water_moves_up() {
    let mut state = boxed(5);
    put(&mut state, 3, 2, CellType::Wood);
    put_water(&mut state, 3, 1, 0.8);
    put_water(&mut state, 3, 3, 0.8);

    let next = run(state, 1);
    assert_eq!(next.grid.get(2, 2), CellType::Wood);
    assert_eq!(next.grid.get(3, 2), CellType::Water);
    assert!(approx(next.water.get(3, 2), 0.5));
    assert!(approx(next.water.get(3, 1), 0.8));
    assert!(approx(next.water.get(3, 3), 0.8));
}

#[test]
fn wood_between_shallow_water_is_not_squeezed() {
    let mut state = boxed(5);
    put(&mut state, 3, 2, CellType::Wood);
    put_water(&mut state, 3, 1, 0.7);
    put_water(&mut state, 3, 3, 0.8);

    let next = run(state, 1);
    assert_eq!(next.grid.get(3, 2), CellType::Wood);
    assert_eq!(next.grid.get(2, 2), CellType::Empty);
}

// ===========================================================================
// Smoke
// ===========================================================================

#[test]
fn trapped_smoke_clears_after_its_lifetime() {
    let mut state = boxed(3);
    put(&mut state, 1, 1, CellType::SmokeDark);
    state.smoke.set(1, 1, 3);

    let s2 = run(state, 2);
    assert_eq!(s2.grid.get(1, 1), CellType::SmokeDark);
    assert_eq!(s2.smoke.get(1, 1), 1);

    let s3 = run(s2, 1);
    assert_eq!(s3.grid.get(1, 1), CellType::Empty);
}

#[test]
fn smoke_rises_carrying_its_countdown() {
    let mut state = boxed(5);
    put(&mut state, 3, 2, CellType::SmokeLight);
    state.smoke.set(3, 2, 5);

    let next = run(state, 1);
    assert_eq!(next.grid.get(2, 2), CellType::SmokeLight);
    assert_eq!(next.grid.get(3, 2), CellType::Empty);
    assert_eq!(next.smoke.get(2, 2), 4);
}

#[test]
fn smoke_under_the_ceiling_drifts_left_first() {
    let mut state = boxed(5);
    put(&mut state, 1, 2, CellType::SmokeDark);
    state.smoke.set(1, 2, 5);

    let next = run(state, 1);
    assert_eq!(next.grid.get(1, 1), CellType::SmokeDark);
    assert_eq!(next.grid.get(1, 2), CellType::Empty);
}

// ===========================================================================
// Ice
// ===========================================================================

#[test]
fn ice_melts_next_to_fire_with_fixed_volume() {
    let mut state = boxed(5);
    put(&mut state, 2, 2, CellType::Ice);
    state.water.set(2, 2, 0.9);
    put(&mut state, 2, 3, CellType::Fire);

    let next = run(state, 1);
    assert_eq!(next.grid.get(2, 2), CellType::Water);
    assert_eq!(next.water.get(2, 2), ICE_MELT_VOLUME);
}

#[test]
fn ice_falls_into_empty_space() {
    let mut state = boxed(5);
    put(&mut state, 1, 2, CellType::Ice);
    let next = run(state, 1);
    assert_eq!(next.grid.get(2, 2), CellType::Ice);
    assert_eq!(next.grid.get(1, 2), CellType::Empty);
}

#[test]
fn resting_ice_freezes_adjacent_water() {
    let mut state = boxed(5);
    put(&mut state, 3, 2, CellType::Ice);
    put_water(&mut state, 3, 1, 1.0);
    put_water(&mut state, 3, 3, 1.0);

    let next = run(state, 1);
    assert_eq!(next.grid.get(3, 1), CellType::Ice);
    assert_eq!(next.grid.get(3, 2), CellType::Ice);
    assert_eq!(next.grid.get(3, 3), CellType::Ice);
}

// ===========================================================================
// Water
// ===========================================================================

#[test]
fn water_pours_into_empty_cell_below() {
    let mut state = boxed(5);
    put_water(&mut state, 1, 2, 1.0);

    let next = run(state, 1);
    assert_eq!(next.grid.get(1, 2), CellType::Empty);
    assert_eq!(next.grid.get(2, 2), CellType::Water);
    assert_eq!(next.water.get(2, 2), 1.0);
    assert_eq!(next.water.get(1, 2), 0.0);
}

#[test]
fn water_on_the_floor_spreads_left_then_right() {
    let mut state = boxed(5);
    put_water(&mut state, 3, 2, 1.0);

    let next = run(state, 1);
    assert!(approx(next.water.get(3, 1), 0.5));
    assert!(approx(next.water.get(3, 2), 0.25));
    assert!(approx(next.water.get(3, 3), 0.25));
    for col in 1..=3 {
        assert_eq!(next.grid.get(3, col), CellType::Water);
    }
    let total: f64 = next.water.volumes.iter().sum();
    assert!(approx(total, 1.0));
}

#[test]
fn water_below_the_floor_volume_dries_out() {
    let mut state = boxed(5);
    put_water(&mut state, 3, 2, 0.005);

    let next = run(state, 1);
    assert_eq!(next.grid.get(3, 2), CellType::Empty);
    assert_eq!(next.water.get(3, 2), 0.0);
    assert_eq!(next.grid.get(3, 1), CellType::Empty);
}

#[test]
fn water_tops_up_unsaturated_water_below() {
    let mut state = empty_bordered(3, 5);
    put_water(&mut state, 2, 1, 0.6);
    put_water(&mut state, 3, 1, 0.5);

    let next = run(state, 1);
    assert_eq!(next.grid.get(3, 1), CellType::Water);
    assert!(approx(next.water.get(3, 1), 1.0));
    assert_eq!(next.grid.get(2, 1), CellType::Water);
    assert!(approx(next.water.get(2, 1), 0.1));
}

#[test]
fn water_volume_never_grows_without_wood_or_ice() {
    let mut state = boxed(8);
    put_water(&mut state, 1, 3, 1.0);
    put_water(&mut state, 2, 5, 0.75);
    put_water(&mut state, 4, 2, 0.5);
    put(&mut state, 5, 4, CellType::Wall);

    let before: f64 = state.water.volumes.iter().sum();
    let mut rng = SimRng::from_seed_u64(11);
    let mut current = state;
    for _ in 0..40 {
        current = step(&current, LIFESPAN, &mut rng);
        for &v in &current.water.volumes {
            assert!(v >= 0.0 && v <= 1.0 + 1e-9, "volume {v} out of range");
        }
    }
    // drying out is the only way volume leaves the grid
    let after: f64 = current.water.volumes.iter().sum();
    assert!(after <= before + 1e-9, "gained {}", after - before);
    assert!(after > 0.0);
}

// ===========================================================================
// Whole-grid properties
// ===========================================================================

fn random_state(seed: u64, size: usize) -> SandboxState {
    let mut weights = DEFAULT_RANDOM_WEIGHTS.to_vec();
    weights.push((CellType::Water, 0.2));
    weights.push((CellType::Ice, 0.05));
    weights.push((CellType::SmokeDark, 0.05));
    random_layout(size, size, &weights, LIFESPAN, &mut ChaCha8Rng::seed_from_u64(seed))
        .expect("weights are positive")
}

#[test]
fn wall_ring_survives_random_steps() {
    let mut state = random_state(5, 16);
    let mut rng = SimRng::from_seed_u64(99);
    for _ in 0..60 {
        state = step(&state, LIFESPAN, &mut rng);
        for (row, col) in state.grid.border_coords() {
            assert_eq!(state.grid.get(row, col), CellType::Wall, "({row}, {col})");
        }
    }
}

#[test]
fn same_seed_gives_same_history() {
    let start = random_state(21, 14);
    let mut a = start.clone();
    let mut b = start;
    let mut rng_a = SimRng::from_seed_u64(3);
    let mut rng_b = SimRng::from_seed_u64(3);
    for _ in 0..25 {
        a = step(&a, LIFESPAN, &mut rng_a);
        b = step(&b, LIFESPAN, &mut rng_b);
    }
    assert_eq!(a, b);
}

#[test]
fn step_does_not_touch_its_input() {
    let start = random_state(8, 10);
    let copy = start.clone();
    let _ = step(&start, LIFESPAN, &mut SimRng::from_seed_u64(1));
    assert_eq!(start, copy);
}

#[test]
fn mismatched_aux_arrays_are_reinitialized() {
    let mut grid = CellGrid::bordered(5, 5);
    grid.set(1, 2, CellType::Sand);
    let (next_grid, smoke, water) = step_parts(
        &grid,
        &SmokeLifetimeGrid::new(3, 3),
        &WaterVolumeGrid::new(7, 2),
        LIFESPAN,
        &mut FixedOrder,
    );
    assert_eq!(next_grid.get(2, 2), CellType::Sand);
    assert!(smoke.matches_shape(5, 5));
    assert!(water.matches_shape(5, 5));
}

#[test]
fn minimal_grid_has_a_single_active_cell() {
    let mut state = boxed(3);
    put(&mut state, 1, 1, CellType::Sand);
    let next = run(state.clone(), 3);
    assert_eq!(next, state);
}
