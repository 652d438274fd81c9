//! Falling-sand step engine.
//!
//! One call to [`step`] applies every per-type rule once and returns the next
//! `SandboxState`. Cells are visited bottom-to-top (`H-2` down to `1`) and
//! left-to-right (`1` to `W-2`); the wall ring is never visited.
//!
//! Rules read the *scan grid* (a copy of the current grid) and write the *next
//! grid*. The smoke and water arrays are single working copies shared by every
//! rule, so a cell visited later in the pass sees volumes and countdowns that
//! earlier cells already changed. Wood float-up additionally rewrites the scan
//! grid so the swapped water cells are visited again further up the pass.

mod buffers;
mod constants;
mod engine;
mod fire;
mod ice;
mod sand;
mod smoke;
mod systems;
mod water;
mod wood;

#[cfg(test)]
mod tests;

pub use constants::{
    ICE_MELT_VOLUME, SIDEWAYS_SHARE, TRAPPED_WOOD_MIN_VOLUME, WOOD_DISPLACED_WATER_GAIN,
};
pub use engine::{step, step_parts};
pub use systems::{advance_sandbox, StepControl, StepEnginePlugin};
