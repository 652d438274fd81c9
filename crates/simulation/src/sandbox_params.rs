//! Data-driven sandbox parameters.
//!
//! Collects the tunables of a run (grid size, smoke lifespan, step interval,
//! seed, starting layout) into a single [`SandboxParams`] resource. The app
//! can load overrides from a JSON file; anything missing from the file keeps
//! its default.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_SEED, DEFAULT_SMOKE_LIFESPAN,
    DEFAULT_STEP_INTERVAL_MS, MIN_GRID_SIZE,
};
use crate::grid::CellType;
use crate::world_init::{InitLayout, DEFAULT_RANDOM_WEIGHTS};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// The params file could not be read.
    Io(String),
    /// The params file is not valid JSON for `SandboxParams`.
    Parse(String),
    /// The values parsed but violate a constraint.
    Invalid(String),
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::Io(msg) => write!(f, "failed to read sandbox params: {msg}"),
            ParamsError::Parse(msg) => write!(f, "failed to parse sandbox params: {msg}"),
            ParamsError::Invalid(msg) => write!(f, "invalid sandbox params: {msg}"),
        }
    }
}

impl std::error::Error for ParamsError {}

// ---------------------------------------------------------------------------
// SandboxParams resource
// ---------------------------------------------------------------------------

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxParams {
    /// Grid width in cells, wall ring included.
    pub width: usize,
    /// Grid height in cells, wall ring included.
    pub height: usize,
    /// Countdown given to smoke created by burning fire or painting.
    pub smoke_lifespan: i32,
    /// Time between two steps in the interactive driver.
    pub step_interval_ms: u64,
    pub seed: u64,
    pub layout: InitLayout,
    /// Relative weights for `InitLayout::Random`.
    pub random_weights: Vec<(CellType, f64)>,
}

impl Default for SandboxParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            smoke_lifespan: DEFAULT_SMOKE_LIFESPAN,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
            seed: DEFAULT_SEED,
            layout: InitLayout::default(),
            random_weights: DEFAULT_RANDOM_WEIGHTS.to_vec(),
        }
    }
}

impl SandboxParams {
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms.max(1))
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.width < MIN_GRID_SIZE || self.height < MIN_GRID_SIZE {
            return Err(ParamsError::Invalid(format!(
                "grid must be at least {MIN_GRID_SIZE}x{MIN_GRID_SIZE}, got {}x{}",
                self.width, self.height
            )));
        }
        if self.smoke_lifespan < 1 {
            return Err(ParamsError::Invalid(format!(
                "smoke_lifespan must be positive, got {}",
                self.smoke_lifespan
            )));
        }
        if self
            .random_weights
            .iter()
            .any(|&(_, w)| !w.is_finite() || w < 0.0)
        {
            return Err(ParamsError::Invalid(
                "random_weights must be finite and non-negative".to_string(),
            ));
        }
        let total: f64 = self.random_weights.iter().map(|&(_, w)| w).sum();
        if self.layout == InitLayout::Random && total <= 0.0 {
            return Err(ParamsError::Invalid(
                "random_weights must have a positive sum".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        let params: Self =
            serde_json::from_str(json).map_err(|e| ParamsError::Parse(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ParamsError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ParamsError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Load params from `path`, logging a warning and returning defaults on
    /// any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_json_file(path) {
            Ok(params) => {
                info!("Loaded sandbox params from {}", path.display());
                params
            }
            Err(e) => {
                warn!("{}, falling back to defaults", e);
                Self::default()
            }
        }
    }
}
