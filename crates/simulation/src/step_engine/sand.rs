use crate::grid::CellType;
use crate::sim_rng::TieBreak;

use super::buffers::StepBuffers;
use super::constants::{SAND_DIAGONALS, SAND_DISPLACE_SIDES};

/// Sand falls into empty space, rests on walls and wood, sinks through
/// water, and otherwise slides diagonally when it can.
pub(crate) fn update_sand<R: TieBreak>(buf: &mut StepBuffers, row: usize, col: usize, order: &mut R) {
    match buf.below(row, col) {
        Some(CellType::Empty) => buf.relocate((row, col), (row + 1, col), CellType::Sand),
        Some(CellType::Wall | CellType::Wood) => buf.next.set(row, col, CellType::Sand),
        Some(CellType::Water) => displace_water(buf, row, col, order),
        _ => slide_diagonally(buf, row, col, order),
    }
}

/// Push the water below sideways into an empty cell of the same row and drop
/// the sand into its place; swap sand and water when neither side is free.
///
/// Neither branch moves any volume: the displaced water cell keeps whatever
/// volume its new position already held. A successful sideways push leaves
/// the source cell's Sand tag in the next grid untouched.
fn displace_water<R: TieBreak>(buf: &mut StepBuffers, row: usize, col: usize, order: &mut R) {
    let below = row + 1;
    let mut sides = SAND_DISPLACE_SIDES;
    order.permute(&mut sides);

    for d_col in sides {
        if let Some((r, c, CellType::Empty)) = buf.scan_neighbor(below, col, 0, d_col) {
            buf.next.set(r, c, CellType::Water);
            buf.next.set(below, col, CellType::Sand);
            return;
        }
    }

    buf.next.set(row, col, CellType::Water);
    buf.next.set(below, col, CellType::Sand);
}

fn slide_diagonally<R: TieBreak>(buf: &mut StepBuffers, row: usize, col: usize, order: &mut R) {
    let mut diagonals = SAND_DIAGONALS;
    order.permute(&mut diagonals);

    for (d_row, d_col) in diagonals {
        if let Some((r, c, CellType::Empty)) = buf.scan_neighbor(row, col, d_row, d_col) {
            buf.relocate((row, col), (r, c), CellType::Sand);
            return;
        }
    }

    buf.next.set(row, col, CellType::Sand);
}
