use bevy::prelude::*;

pub mod input;
pub mod raster;
pub mod tiles;
pub mod view;

pub use input::{cursor_to_cell, SelectedElement};
pub use raster::{render_tiles, TileRaster};
pub use tiles::{TileKind, TilePalette};
pub use view::{SandboxSprite, SandboxView};

pub struct SandboxViewPlugin;

impl Plugin for SandboxViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TilePalette>()
            .init_resource::<SelectedElement>()
            .add_systems(
                Startup,
                view::spawn_view.after(simulation::world_init::init_sandbox),
            )
            .add_systems(
                Update,
                (
                    input::paint_under_cursor,
                    view::rebuild_view,
                    view::fit_camera,
                )
                    .chain(),
            );
    }
}
