use crate::config::MAX_WATER_VOLUME;
use crate::grid::CellType;

use super::buffers::StepBuffers;
use super::constants::{TRAPPED_WOOD_MIN_VOLUME, WOOD_DISPLACED_WATER_GAIN};

/// Wood floats up through water, gets squeezed out from between two nearly
/// full water cells, falls into empty space, rests on water, and catches fire
/// from an orthogonal neighbor.
pub(crate) fn update_wood(buf: &mut StepBuffers, row: usize, col: usize) {
    if float_wood_up(buf, row, col) {
        return;
    }

    if is_squeezed_by_water(buf, row, col) {
        buf.next.set(row - 1, col, CellType::Wood);
        buf.next.set(row, col, CellType::Water);
        buf.water
            .add_capped(row, col, WOOD_DISPLACED_WATER_GAIN, MAX_WATER_VOLUME);
        return;
    }

    match buf.below(row, col) {
        Some(CellType::Empty) => buf.relocate((row, col), (row + 1, col), CellType::Wood),
        Some(CellType::Water) => buf.next.set(row, col, CellType::Wood),
        _ => {
            if buf.scan.has_orthogonal(row, col, CellType::Fire) {
                buf.next.set(row, col, CellType::Fire);
            }
        }
    }
}

/// Swap the wood with the water above it until it reaches the top of the
/// column. Each swap adds `WOOD_DISPLACED_WATER_GAIN` to the cell the wood
/// just left.
///
/// Both the next grid and the scan grid are rewritten, so the water left
/// behind is visited again when the scan reaches those rows, and the wood is
/// visited once more at its final position. Returns true if the wood moved.
fn float_wood_up(buf: &mut StepBuffers, row: usize, col: usize) -> bool {
    let mut current = row;
    while current > 0 && buf.scan.get(current - 1, col) == CellType::Water {
        buf.next.set(current - 1, col, CellType::Wood);
        buf.next.set(current, col, CellType::Water);
        buf.water
            .add_capped(current, col, WOOD_DISPLACED_WATER_GAIN, MAX_WATER_VOLUME);
        buf.scan.set(current - 1, col, CellType::Wood);
        buf.scan.set(current, col, CellType::Water);
        current -= 1;
    }
    current != row
}

/// Water on both sides at `TRAPPED_WOOD_MIN_VOLUME` or more, and room above.
fn is_squeezed_by_water(buf: &StepBuffers, row: usize, col: usize) -> bool {
    let full_water_at = |d_col: isize| match buf.scan_neighbor(row, col, 0, d_col) {
        Some((r, c, CellType::Water)) => buf.water.get(r, c) >= TRAPPED_WOOD_MIN_VOLUME,
        _ => false,
    };
    let above_empty = buf.scan.get_offset(row, col, -1, 0) == Some(CellType::Empty);

    full_water_at(-1) && full_water_at(1) && above_empty
}
