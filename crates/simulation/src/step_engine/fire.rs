use crate::grid::CellType;

use super::buffers::StepBuffers;

/// Fire drops straight down into empty space. Landing on wood ignites it and
/// leaves dark smoke behind; any other obstacle turns the fire into light
/// smoke. Fire never moves sideways.
pub(crate) fn update_fire(buf: &mut StepBuffers, row: usize, col: usize, smoke_lifespan: i32) {
    match buf.below(row, col) {
        Some(CellType::Empty) => buf.relocate((row, col), (row + 1, col), CellType::Fire),
        Some(CellType::Wood) => {
            buf.next.set(row + 1, col, CellType::Fire);
            buf.next.set(row, col, CellType::SmokeDark);
            buf.smoke.set(row, col, smoke_lifespan);
        }
        Some(_) => {
            buf.next.set(row, col, CellType::SmokeLight);
            buf.smoke.set(row, col, smoke_lifespan);
        }
        None => {}
    }
}
