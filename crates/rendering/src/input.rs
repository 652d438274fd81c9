//! Mouse painting: map the cursor to a grid cell and emit `PaintCell` events.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use simulation::grid::CellType;
use simulation::paint::PaintCell;
use simulation::sandbox_state::SandboxState;

use crate::tiles::TilePalette;

/// Element placed by the left mouse button.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedElement(pub CellType);

impl Default for SelectedElement {
    fn default() -> Self {
        Self(CellType::Sand)
    }
}

/// Map a world-space point to `(row, col)` on a `width` x `height` grid of
/// `tile_size` tiles centered on the origin. Row 0 is the top row.
pub fn cursor_to_cell(
    world: Vec2,
    width: usize,
    height: usize,
    tile_size: f32,
) -> Option<(usize, usize)> {
    if tile_size <= 0.0 {
        return None;
    }
    let half_w = width as f32 * tile_size / 2.0;
    let half_h = height as f32 * tile_size / 2.0;
    let x = world.x + half_w;
    let y = half_h - world.y;
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let col = (x / tile_size).floor() as usize;
    let row = (y / tile_size).floor() as usize;
    (row < height && col < width).then_some((row, col))
}

/// Returns `true` when egui is using the pointer, so clicks on panels don't
/// paint the grid underneath.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

/// Paint on press, then once per newly entered cell while the button is held.
pub(crate) fn paint_under_cursor(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    state: Res<SandboxState>,
    palette: Res<TilePalette>,
    selected: Res<SelectedElement>,
    mut contexts: EguiContexts,
    mut last_cell: Local<Option<(usize, usize)>>,
    mut paint: EventWriter<PaintCell>,
) {
    if !buttons.pressed(MouseButton::Left) {
        *last_cell = None;
        return;
    }
    if egui_wants_pointer(&mut contexts) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(screen_pos) = window.cursor_position() else {
        return;
    };
    let Ok((camera, cam_transform)) = cameras.get_single() else {
        return;
    };
    let Ok(world) = camera.viewport_to_world_2d(cam_transform, screen_pos) else {
        return;
    };
    let Some((row, col)) = cursor_to_cell(
        world,
        state.width(),
        state.height(),
        palette.tile_size as f32,
    ) else {
        return;
    };

    if !buttons.just_pressed(MouseButton::Left) && *last_cell == Some((row, col)) {
        return;
    }
    *last_cell = Some((row, col));
    paint.send(PaintCell {
        row,
        col,
        kind: selected.0,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_maps_corners_of_grid() {
        // 4x2 grid of 10px tiles spans x in [-20, 20), y in (-10, 10]
        assert_eq!(cursor_to_cell(Vec2::new(-19.0, 9.0), 4, 2, 10.0), Some((0, 0)));
        assert_eq!(cursor_to_cell(Vec2::new(19.0, -9.0), 4, 2, 10.0), Some((1, 3)));
        assert_eq!(cursor_to_cell(Vec2::new(1.0, 1.0), 4, 2, 10.0), Some((0, 2)));
    }

    #[test]
    fn test_cursor_outside_grid_is_none() {
        assert_eq!(cursor_to_cell(Vec2::new(-21.0, 0.0), 4, 2, 10.0), None);
        assert_eq!(cursor_to_cell(Vec2::new(20.5, 0.0), 4, 2, 10.0), None);
        assert_eq!(cursor_to_cell(Vec2::new(0.0, 10.5), 4, 2, 10.0), None);
        assert_eq!(cursor_to_cell(Vec2::new(0.0, -10.5), 4, 2, 10.0), None);
    }

    #[test]
    fn test_zero_tile_size_is_none() {
        assert_eq!(cursor_to_cell(Vec2::ZERO, 4, 4, 0.0), None);
    }

    #[test]
    fn test_default_selection_is_sand() {
        assert_eq!(SelectedElement::default().0, CellType::Sand);
    }
}
