use crate::grid::CellType;
use crate::sim_rng::TieBreak;

use super::buffers::StepBuffers;
use super::constants::{SMOKE_DRIFT, SMOKE_RISE};

/// Smoke burns down its countdown, clears at zero, and otherwise rises into
/// the first empty cell among up / up-left / up-right (random order), then
/// drifts left or right. Dark and light smoke behave identically.
pub(crate) fn update_smoke<R: TieBreak>(buf: &mut StepBuffers, row: usize, col: usize, order: &mut R) {
    if buf.smoke.decrement(row, col) <= 0 {
        buf.next.set(row, col, CellType::Empty);
        return;
    }

    let kind = buf.scan.get(row, col);

    let mut rising = SMOKE_RISE;
    order.permute(&mut rising);
    for (d_row, d_col) in rising {
        if let Some((r, c, CellType::Empty)) = buf.scan_neighbor(row, col, d_row, d_col) {
            move_smoke(buf, (row, col), (r, c), kind);
            return;
        }
    }

    for d_col in SMOKE_DRIFT {
        if let Some((r, c, CellType::Empty)) = buf.scan_neighbor(row, col, 0, d_col) {
            move_smoke(buf, (row, col), (r, c), kind);
            return;
        }
    }
}

/// Relocate smoke, carrying its tag and remaining countdown.
fn move_smoke(buf: &mut StepBuffers, from: (usize, usize), to: (usize, usize), kind: CellType) {
    buf.relocate(from, to, kind);
    let remaining = buf.smoke.get(from.0, from.1);
    buf.smoke.set(to.0, to.1, remaining);
}
