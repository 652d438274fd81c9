// =============================================================================
// Constants
// =============================================================================

/// Volume added to the cell a piece of wood leaves when it rises through or
/// out of water. Capped at `MAX_WATER_VOLUME`.
pub const WOOD_DISPLACED_WATER_GAIN: f64 = 0.5;

/// Both side neighbors must hold at least this much water to push wood up.
pub const TRAPPED_WOOD_MIN_VOLUME: f64 = 0.75;

/// Fraction of its current volume a water cell offers to each side neighbor.
pub const SIDEWAYS_SHARE: f64 = 0.5;

/// Volume of the water cell left behind by melting ice.
pub const ICE_MELT_VOLUME: f64 = 0.25;

/// Candidate offsets `(d_row, d_col)` for sand sliding off a blocked cell.
pub(crate) const SAND_DIAGONALS: [(isize, isize); 2] = [(1, -1), (1, 1)];

/// Side offsets tried when sand pushes water out of its way.
pub(crate) const SAND_DISPLACE_SIDES: [isize; 2] = [-1, 1];

/// Upward candidates for rising smoke: up, up-left, up-right.
pub(crate) const SMOKE_RISE: [(isize, isize); 3] = [(-1, 0), (-1, -1), (-1, 1)];

/// Sideways fallback for smoke, always tried left first.
pub(crate) const SMOKE_DRIFT: [isize; 2] = [-1, 1];

/// Water spreads to the left neighbor first, then the right one.
pub(crate) const WATER_SPREAD_SIDES: [isize; 2] = [-1, 1];
