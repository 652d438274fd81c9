//! 2D view of the sandbox: a camera and one sprite whose texture is rebuilt
//! whenever the simulation state changes.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use simulation::sandbox_state::SandboxState;

use crate::raster::render_tiles;
use crate::tiles::TilePalette;

/// Margin kept around the grid when fitting the camera to the window.
const VIEW_MARGIN: f32 = 1.1;

// ---------------------------------------------------------------------------
// Resources & components
// ---------------------------------------------------------------------------

/// Handle of the texture shown by the sandbox sprite.
#[derive(Resource)]
pub struct SandboxView {
    pub image: Handle<Image>,
}

/// Marker for the sprite showing the grid. Centered on the world origin.
#[derive(Component)]
pub struct SandboxSprite;

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

pub(crate) fn spawn_view(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    palette: Res<TilePalette>,
    state: Res<SandboxState>,
) {
    let raster = render_tiles(&state.grid, &state.water, &palette);
    let image = images.add(raster.into_image());

    commands.spawn(Camera2d);
    commands.spawn((
        Sprite::from_image(image.clone()),
        Transform::default(),
        SandboxSprite,
    ));
    commands.insert_resource(SandboxView { image });
}

pub(crate) fn rebuild_view(
    state: Res<SandboxState>,
    palette: Res<TilePalette>,
    view: Option<Res<SandboxView>>,
    mut images: ResMut<Assets<Image>>,
) {
    if !state.is_changed() {
        return;
    }
    let Some(view) = view else {
        return;
    };
    if let Some(image) = images.get_mut(&view.image) {
        *image = render_tiles(&state.grid, &state.water, &palette).into_image();
    }
}

/// Zoom the camera so the whole grid fits in the window.
pub(crate) fn fit_camera(
    state: Res<SandboxState>,
    palette: Res<TilePalette>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut projections: Query<&mut OrthographicProjection, With<Camera2d>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    if window.width() <= 0.0 || window.height() <= 0.0 {
        return;
    }
    let grid_w = (state.width() as u32 * palette.tile_size) as f32;
    let grid_h = (state.height() as u32 * palette.tile_size) as f32;
    let scale = (grid_w / window.width())
        .max(grid_h / window.height())
        .max(0.01)
        * VIEW_MARGIN;

    for mut projection in &mut projections {
        if (projection.scale - scale).abs() > 1e-4 {
            projection.scale = scale;
        }
    }
}
