//! Per-cell water fill level.
//!
//! `WaterVolumeGrid` stores a fraction in `[0, 1]` for every cell; it is only
//! meaningful where the cell grid holds `Water`. Painting may push a cell up
//! to `PAINT_WATER_CEILING`, everything else stays within
//! `MAX_WATER_VOLUME`.

/// Dense `width * height` volume grid, row-major like `CellGrid`.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterVolumeGrid {
    pub volumes: Vec<f64>,
    pub width: usize,
    pub height: usize,
}

impl WaterVolumeGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            volumes: vec![0.0; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.volumes[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, volume: f64) {
        let idx = self.index(row, col);
        self.volumes[idx] = volume;
    }

    /// Set the cell to `min(current + amount, cap)` and return the new value.
    #[inline]
    pub fn add_capped(&mut self, row: usize, col: usize, amount: f64, cap: f64) -> f64 {
        let idx = self.index(row, col);
        self.volumes[idx] = (self.volumes[idx] + amount).min(cap);
        self.volumes[idx]
    }

    /// Move `amount` from `from` to `to` without any clamping. Callers size
    /// `amount` against the receiver's remaining capacity beforehand.
    #[inline]
    pub fn transfer(&mut self, from: (usize, usize), to: (usize, usize), amount: f64) {
        let src = self.index(from.0, from.1);
        let dst = self.index(to.0, to.1);
        self.volumes[src] -= amount;
        self.volumes[dst] += amount;
    }

    pub fn matches_shape(&self, width: usize, height: usize) -> bool {
        self.width == width && self.height == height && self.volumes.len() == width * height
    }
}

/// Visual fill tier used to pick a water tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaterTier {
    /// `volume <= 0.25`
    Quarter,
    /// `0.25 < volume <= 0.5`
    Half,
    /// `0.5 < volume <= 0.75`
    ThreeQuarters,
    /// `volume > 0.75`
    Full,
}

impl WaterTier {
    pub const ALL: [WaterTier; 4] = [
        WaterTier::Quarter,
        WaterTier::Half,
        WaterTier::ThreeQuarters,
        WaterTier::Full,
    ];

    pub fn from_volume(volume: f64) -> Self {
        if volume <= 0.25 {
            WaterTier::Quarter
        } else if volume <= 0.5 {
            WaterTier::Half
        } else if volume <= 0.75 {
            WaterTier::ThreeQuarters
        } else {
            WaterTier::Full
        }
    }
}
