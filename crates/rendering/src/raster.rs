//! Grid-to-pixel rasterization and upload as a Bevy `Image`.

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use simulation::grid::CellGrid;
use simulation::water_volume::WaterVolumeGrid;

use crate::tiles::{TileKind, TilePalette};

/// RGBA pixels for a whole grid, one tile per cell, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRaster {
    pub width_px: u32,
    pub height_px: u32,
    pub pixels: Vec<[u8; 4]>,
}

impl TileRaster {
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[(y * self.width_px + x) as usize]
    }

    /// Upload as an sRGB texture with nearest sampling so tiles stay crisp.
    pub fn into_image(self) -> Image {
        let mut data = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            data.extend_from_slice(pixel);
        }
        let mut image = Image::new(
            Extent3d {
                width: self.width_px,
                height: self.height_px,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            data,
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
        );
        image.sampler = bevy::image::ImageSampler::nearest();
        image
    }
}

/// Draw every cell with its palette tile. Water cells use the tile for their
/// volume tier; stale volumes under other cell types are ignored.
pub fn render_tiles(grid: &CellGrid, water: &WaterVolumeGrid, palette: &TilePalette) -> TileRaster {
    let tile = palette.tile_size;
    let width_px = grid.width as u32 * tile;
    let height_px = grid.height as u32 * tile;
    let mut pixels = vec![[0u8; 4]; (width_px * height_px) as usize];

    for row in 0..grid.height {
        for col in 0..grid.width {
            let volume = if water.matches_shape(grid.width, grid.height) {
                water.get(row, col)
            } else {
                0.0
            };
            let src = palette.tile(TileKind::for_cell(grid.get(row, col), volume));
            let x0 = col as u32 * tile;
            let y0 = row as u32 * tile;
            for ty in 0..tile {
                let dst = ((y0 + ty) * width_px + x0) as usize;
                let line = (ty * tile) as usize;
                pixels[dst..dst + tile as usize].copy_from_slice(&src[line..line + tile as usize]);
            }
        }
    }

    TileRaster {
        width_px,
        height_px,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulation::grid::CellType;
    use simulation::water_volume::WaterTier;

    #[test]
    fn test_raster_dimensions_follow_grid_and_tile_size() {
        let grid = CellGrid::bordered(5, 3);
        let water = WaterVolumeGrid::new(5, 3);
        let palette = TilePalette::procedural(8);
        let raster = render_tiles(&grid, &water, &palette);
        assert_eq!(raster.width_px, 40);
        assert_eq!(raster.height_px, 24);
        assert_eq!(raster.pixels.len(), 40 * 24);
    }

    #[test]
    fn test_each_cell_gets_its_tile() {
        let mut grid = CellGrid::bordered(4, 4);
        grid.set(1, 2, CellType::Sand);
        grid.set(2, 1, CellType::Water);
        let mut water = WaterVolumeGrid::new(4, 4);
        water.set(2, 1, 0.4);
        let palette = TilePalette::procedural(4);
        let raster = render_tiles(&grid, &water, &palette);

        let sand = palette.tile(TileKind::Sand);
        let half = palette.tile(TileKind::Water(WaterTier::Half));
        let wall = palette.tile(TileKind::Wall);
        for ty in 0..4 {
            for tx in 0..4 {
                let i = (ty * 4 + tx) as usize;
                assert_eq!(raster.pixel(8 + tx, 4 + ty), sand[i]);
                assert_eq!(raster.pixel(4 + tx, 8 + ty), half[i]);
                assert_eq!(raster.pixel(tx, ty), wall[i]);
            }
        }
    }

    #[test]
    fn test_mismatched_water_grid_renders_as_shallow() {
        let mut grid = CellGrid::bordered(3, 3);
        grid.set(1, 1, CellType::Water);
        let palette = TilePalette::procedural(2);
        let raster = render_tiles(&grid, &WaterVolumeGrid::new(1, 1), &palette);
        let quarter = palette.tile(TileKind::Water(WaterTier::Quarter));
        assert_eq!(raster.pixel(2, 2), quarter[0]);
    }

    #[test]
    fn test_into_image_dimensions() {
        let grid = CellGrid::bordered(3, 2);
        let raster = render_tiles(&grid, &WaterVolumeGrid::new(3, 2), &TilePalette::procedural(4));
        let image = raster.into_image();
        assert_eq!(image.width(), 12);
        assert_eq!(image.height(), 8);
    }
}
