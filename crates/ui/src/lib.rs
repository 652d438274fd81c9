use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod keybinds;
pub mod sandbox_panel;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_sandbox_theme)
            .add_systems(
                Update,
                (keybinds::run_control_keybinds, sandbox_panel::sandbox_panel_ui),
            );
    }
}
