use crate::grid::{CellType, ORTHOGONAL};

use super::buffers::StepBuffers;
use super::constants::ICE_MELT_VOLUME;

/// Ice melts next to fire, falls into empty space, and otherwise freezes
/// every orthogonal water neighbor without moving itself.
pub(crate) fn update_ice(buf: &mut StepBuffers, row: usize, col: usize) {
    if buf.scan.has_orthogonal(row, col, CellType::Fire) {
        buf.next.set(row, col, CellType::Water);
        buf.water.set(row, col, ICE_MELT_VOLUME);
        return;
    }

    if buf.below(row, col) == Some(CellType::Empty) {
        buf.relocate((row, col), (row + 1, col), CellType::Ice);
        return;
    }

    for (d_row, d_col) in ORTHOGONAL {
        if let Some((r, c, CellType::Water)) = buf.scan_neighbor(row, col, d_row, d_col) {
            buf.next.set(r, c, CellType::Ice);
        }
    }
}
