//! Procedural tile art: one square RGBA tile per cell type, and four tiles
//! for water keyed by volume tier.

use bevy::prelude::*;

use simulation::config::TILE_SIZE;
use simulation::grid::CellType;
use simulation::water_volume::WaterTier;

// ---------------------------------------------------------------------------
// Tile keys
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Empty,
    Wall,
    Sand,
    Wood,
    Fire,
    SmokeDark,
    SmokeLight,
    Water(WaterTier),
    Ice,
}

impl TileKind {
    pub const COUNT: usize = 12;

    /// Tile for a cell. `volume` only matters for water.
    pub fn for_cell(cell: CellType, volume: f64) -> Self {
        match cell {
            CellType::Empty => TileKind::Empty,
            CellType::Wall => TileKind::Wall,
            CellType::Sand => TileKind::Sand,
            CellType::Wood => TileKind::Wood,
            CellType::Fire => TileKind::Fire,
            CellType::SmokeDark => TileKind::SmokeDark,
            CellType::SmokeLight => TileKind::SmokeLight,
            CellType::Water => TileKind::Water(WaterTier::from_volume(volume)),
            CellType::Ice => TileKind::Ice,
        }
    }

    pub fn index(self) -> usize {
        match self {
            TileKind::Empty => 0,
            TileKind::Wall => 1,
            TileKind::Sand => 2,
            TileKind::Wood => 3,
            TileKind::Fire => 4,
            TileKind::SmokeDark => 5,
            TileKind::SmokeLight => 6,
            TileKind::Water(WaterTier::Quarter) => 7,
            TileKind::Water(WaterTier::Half) => 8,
            TileKind::Water(WaterTier::ThreeQuarters) => 9,
            TileKind::Water(WaterTier::Full) => 10,
            TileKind::Ice => 11,
        }
    }

    fn all() -> impl Iterator<Item = TileKind> {
        [
            TileKind::Empty,
            TileKind::Wall,
            TileKind::Sand,
            TileKind::Wood,
            TileKind::Fire,
            TileKind::SmokeDark,
            TileKind::SmokeLight,
        ]
        .into_iter()
        .chain(WaterTier::ALL.into_iter().map(TileKind::Water))
        .chain(std::iter::once(TileKind::Ice))
    }
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub(crate) fn to_rgba8(r: f32, g: f32, b: f32) -> [u8; 4] {
    [
        (r.clamp(0.0, 1.0) * 255.0) as u8,
        (g.clamp(0.0, 1.0) * 255.0) as u8,
        (b.clamp(0.0, 1.0) * 255.0) as u8,
        255,
    ]
}

/// Cheap per-pixel hash in `[0, 1)` for speckle and grain.
fn pixel_noise(x: u32, y: u32, salt: u32) -> f32 {
    let mut h = x.wrapping_mul(0x27d4_eb2d) ^ y.wrapping_mul(0x1656_67b1) ^ salt;
    h ^= h >> 15;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    (h & 0xffff) as f32 / 65536.0
}

const BACKGROUND: (f32, f32, f32) = (0.08, 0.08, 0.10);

fn water_fill(tier: WaterTier) -> f32 {
    match tier {
        WaterTier::Quarter => 0.25,
        WaterTier::Half => 0.5,
        WaterTier::ThreeQuarters => 0.75,
        WaterTier::Full => 1.0,
    }
}

/// Color of pixel `(x, y)` (y down) inside a `size`-pixel tile of `kind`.
fn tile_pixel(kind: TileKind, x: u32, y: u32, size: u32) -> [u8; 4] {
    let n = pixel_noise(x, y, kind.index() as u32);
    let fy = y as f32 / size as f32;
    let (r, g, b) = match kind {
        TileKind::Empty => BACKGROUND,
        TileKind::Wall => {
            // running-bond bricks, four courses per tile
            let course = size / 4;
            let row = y / course.max(1);
            let offset = if row % 2 == 0 { 0 } else { size / 4 };
            let mortar = y % course.max(1) == 0 || (x + offset) % (size / 2).max(1) == 0;
            if mortar {
                (0.30, 0.30, 0.32)
            } else {
                (0.52 + n * 0.06, 0.24 + n * 0.04, 0.20)
            }
        }
        TileKind::Sand => (0.86 + n * 0.08, 0.74 + n * 0.08, 0.46 + n * 0.06),
        TileKind::Wood => {
            let grain = ((x as f32 * 0.9 + n * 2.0).sin() * 0.5 + 0.5) * 0.10;
            (0.45 + grain, 0.29 + grain * 0.6, 0.14)
        }
        TileKind::Fire => {
            // yellow core fading to red at the top
            let heat = fy * 0.8 + n * 0.2;
            (1.0, 0.25 + heat * 0.6, 0.05 + heat * 0.1)
        }
        TileKind::SmokeDark => {
            let v = 0.22 + n * 0.08;
            (v, v, v + 0.02)
        }
        TileKind::SmokeLight => {
            let v = 0.58 + n * 0.10;
            (v, v, v + 0.03)
        }
        TileKind::Water(tier) => {
            if fy < 1.0 - water_fill(tier) {
                BACKGROUND
            } else {
                (0.12 + n * 0.04, 0.36 + n * 0.05, 0.78 + n * 0.06)
            }
        }
        TileKind::Ice => {
            let glint = if (x + y) % 11 == 0 { 0.12 } else { 0.0 };
            (0.74 + glint, 0.88 + glint, 0.96)
        }
    };
    to_rgba8(r, g, b)
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Pre-rendered tiles, each `tile_size * tile_size` pixels, row-major.
#[derive(Resource, Debug, Clone)]
pub struct TilePalette {
    pub tile_size: u32,
    tiles: Vec<Vec<[u8; 4]>>,
}

impl Default for TilePalette {
    fn default() -> Self {
        Self::procedural(TILE_SIZE)
    }
}

impl TilePalette {
    pub fn procedural(tile_size: u32) -> Self {
        let mut tiles = vec![Vec::new(); TileKind::COUNT];
        for kind in TileKind::all() {
            let mut pixels = Vec::with_capacity((tile_size * tile_size) as usize);
            for y in 0..tile_size {
                for x in 0..tile_size {
                    pixels.push(tile_pixel(kind, x, y, tile_size));
                }
            }
            tiles[kind.index()] = pixels;
        }
        Self { tile_size, tiles }
    }

    pub fn tile(&self, kind: TileKind) -> &[[u8; 4]] {
        &self.tiles[kind.index()]
    }
}
