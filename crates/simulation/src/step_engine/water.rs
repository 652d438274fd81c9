use crate::config::{MAX_WATER_VOLUME, WATER_FLOOR};
use crate::grid::CellType;

use super::buffers::StepBuffers;
use super::constants::{SIDEWAYS_SHARE, WATER_SPREAD_SIDES};

/// Volume-conserving water update, in four ordered sub-steps:
///
/// 1. pour down into an empty cell below;
/// 2. when resting on something, offer half the volume to the left, then the
///    right neighbor (empty or water);
/// 3. dry out at or below `WATER_FLOOR`;
/// 4. when resting on water and any of the three cells below is unsaturated
///    water, pour down again.
///
/// Every transfer is sized with `min(available, receiver capacity)`, so no
/// receiver goes above `MAX_WATER_VOLUME` and no source goes below zero.
pub(crate) fn update_water(buf: &mut StepBuffers, row: usize, col: usize) {
    let below = buf.below(row, col);

    if below == Some(CellType::Empty) {
        pour_down(buf, row, col);
    }

    if matches!(
        below,
        Some(CellType::Wall | CellType::Sand | CellType::Wood | CellType::Water)
    ) {
        spread_sideways(buf, row, col);
    }

    if buf.water.get(row, col) <= WATER_FLOOR {
        buf.water.set(row, col, 0.0);
        buf.next.set(row, col, CellType::Empty);
    }

    if below == Some(CellType::Water) && has_unsaturated_water_below(buf, row, col) {
        pour_down(buf, row, col);
    }
}

/// Move `min(volume, capacity below)` into the cell below and mark it water.
fn pour_down(buf: &mut StepBuffers, row: usize, col: usize) {
    let below = (row + 1, col);
    let amount = buf
        .water
        .get(row, col)
        .min(MAX_WATER_VOLUME - buf.water.get(below.0, below.1));
    transfer_water(buf, (row, col), below, amount);
}

fn spread_sideways(buf: &mut StepBuffers, row: usize, col: usize) {
    for d_col in WATER_SPREAD_SIDES {
        let Some((r, c, kind)) = buf.scan_neighbor(row, col, 0, d_col) else {
            continue;
        };
        if !matches!(kind, CellType::Empty | CellType::Water) {
            continue;
        }
        let volume = buf.water.get(row, col);
        if volume <= WATER_FLOOR {
            continue;
        }
        let amount = (volume * SIDEWAYS_SHARE).min(MAX_WATER_VOLUME - buf.water.get(r, c));
        transfer_water(buf, (row, col), (r, c), amount);
    }
}

/// Any water cell among below-left, below, below-right with room left.
fn has_unsaturated_water_below(buf: &StepBuffers, row: usize, col: usize) -> bool {
    [-1isize, 0, 1].into_iter().any(|d_col| {
        matches!(
            buf.scan_neighbor(row, col, 1, d_col),
            Some((r, c, CellType::Water)) if buf.water.get(r, c) < MAX_WATER_VOLUME
        )
    })
}

/// Move `amount` between cells, mark the receiver as water and empty the
/// source once it holds exactly nothing.
fn transfer_water(buf: &mut StepBuffers, from: (usize, usize), to: (usize, usize), amount: f64) {
    buf.water.transfer(from, to, amount);
    buf.next.set(to.0, to.1, CellType::Water);
    if buf.water.get(from.0, from.1) == 0.0 {
        buf.next.set(from.0, from.1, CellType::Empty);
    }
}
