//! Keyboard run controls.
//!
//! - Space: pause / resume
//! - `.`: single step while paused
//! - R: reset to the configured layout
//! - 1-7: pick an element

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use rendering::SelectedElement;
use simulation::grid::CellType;
use simulation::step_engine::StepControl;
use simulation::world_init::ResetSandbox;

use crate::sandbox_panel::PALETTE_ELEMENTS;

const DIGIT_KEYS: [KeyCode; 7] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
];

/// Element bound to a number key, in palette order.
pub fn element_for_key(key: KeyCode) -> Option<CellType> {
    DIGIT_KEYS
        .iter()
        .position(|&k| k == key)
        .map(|i| PALETTE_ELEMENTS[i])
}

pub fn run_control_keybinds(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut control: ResMut<StepControl>,
    mut selected: ResMut<SelectedElement>,
    mut reset: EventWriter<ResetSandbox>,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }

    if keyboard.just_pressed(KeyCode::Space) {
        control.toggle_pause();
        info!("Sandbox {}", if control.paused { "paused" } else { "resumed" });
    }
    if keyboard.just_pressed(KeyCode::Period) {
        control.request_step();
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        reset.send(ResetSandbox);
    }
    for key in keyboard.get_just_pressed() {
        if let Some(kind) = element_for_key(*key) {
            selected.0 = kind;
        }
    }
}
