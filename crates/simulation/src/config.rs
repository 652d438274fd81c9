pub const DEFAULT_GRID_WIDTH: usize = 20;
pub const DEFAULT_GRID_HEIGHT: usize = 20;
/// Smallest grid that still has one interior cell inside the wall ring.
pub const MIN_GRID_SIZE: usize = 3;
/// Edge length of a rendered tile, in pixels.
pub const TILE_SIZE: u32 = 32;

/// Steps a freshly created smoke cell survives before clearing.
pub const DEFAULT_SMOKE_LIFESPAN: i32 = 6;
/// Wall-clock time between two simulation steps in the interactive driver.
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 300;
pub const DEFAULT_SEED: u64 = 42;

/// Capacity of a single water cell as seen by the step engine.
pub const MAX_WATER_VOLUME: f64 = 1.0;
/// Volumes at or below this are treated as dry and the cell reverts to Empty.
pub const WATER_FLOOR: f64 = 0.01;

/// Volume added by each water click on an existing water cell, and the
/// starting volume of a freshly painted one.
pub const PAINT_WATER_INCREMENT: f64 = 0.25;
/// Ceiling for painted water. Only the paint path uses it; engine transfers
/// stay bounded by `MAX_WATER_VOLUME`.
pub const PAINT_WATER_CEILING: f64 = 1.5;
