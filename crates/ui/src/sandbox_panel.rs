//! Side window with the element palette, run controls, smoke lifespan and a
//! live census of the grid.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::SelectedElement;
use simulation::grid::CellType;
use simulation::sandbox_params::SandboxParams;
use simulation::stats::SandboxStats;
use simulation::step_engine::StepControl;
use simulation::world_init::ResetSandbox;

/// Elements offered for painting, in button and number-key order.
pub const PALETTE_ELEMENTS: [CellType; 7] = [
    CellType::Empty,
    CellType::Wall,
    CellType::Sand,
    CellType::Wood,
    CellType::Fire,
    CellType::Water,
    CellType::Ice,
];

const MAX_SMOKE_LIFESPAN: i32 = 60;

/// Swatch shown next to each element button.
fn element_swatch(kind: CellType) -> egui::Color32 {
    match kind {
        CellType::Empty => egui::Color32::from_rgb(20, 20, 26),
        CellType::Wall => egui::Color32::from_rgb(133, 61, 51),
        CellType::Sand => egui::Color32::from_rgb(230, 199, 125),
        CellType::Wood => egui::Color32::from_rgb(120, 76, 36),
        CellType::Fire => egui::Color32::from_rgb(255, 110, 20),
        CellType::SmokeDark => egui::Color32::from_rgb(60, 60, 64),
        CellType::SmokeLight => egui::Color32::from_rgb(160, 160, 168),
        CellType::Water => egui::Color32::from_rgb(36, 96, 205),
        CellType::Ice => egui::Color32::from_rgb(196, 228, 245),
    }
}

pub fn sandbox_panel_ui(
    mut contexts: EguiContexts,
    mut selected: ResMut<SelectedElement>,
    mut control: ResMut<StepControl>,
    mut params: ResMut<SandboxParams>,
    stats: Res<SandboxStats>,
    mut reset: EventWriter<ResetSandbox>,
) {
    egui::Window::new("Sandbox")
        .resizable(false)
        .default_width(200.0)
        .default_pos(egui::pos2(12.0, 12.0))
        .show(contexts.ctx_mut(), |ui| {
            // --- Element palette ---
            ui.label("Element");
            for (i, kind) in PALETTE_ELEMENTS.iter().copied().enumerate() {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, element_swatch(kind));
                    let text = format!("{} {}", i + 1, kind.label());
                    if ui.selectable_label(selected.0 == kind, text).clicked() {
                        selected.0 = kind;
                    }
                });
            }

            ui.separator();

            // --- Run controls ---
            ui.horizontal(|ui| {
                let label = if control.paused { "Resume" } else { "Pause" };
                if ui.button(label).clicked() {
                    control.toggle_pause();
                }
                if ui
                    .add_enabled(control.paused, egui::Button::new("Step"))
                    .clicked()
                {
                    control.request_step();
                }
                if ui.button("Reset").clicked() {
                    reset.send(ResetSandbox);
                }
            });

            // Bypass change detection unless the value actually moves.
            let mut lifespan = params.smoke_lifespan;
            if ui
                .add(egui::Slider::new(&mut lifespan, 1..=MAX_SMOKE_LIFESPAN).text("smoke life"))
                .changed()
            {
                params.smoke_lifespan = lifespan;
            }

            ui.separator();

            // --- Stats ---
            ui.label(format!("Step {}", stats.steps));
            egui::Grid::new("sandbox_stats").num_columns(2).show(ui, |ui| {
                for kind in CellType::ALL {
                    ui.label(kind.label());
                    ui.label(stats.count(kind).to_string());
                    ui.end_row();
                }
                ui.label("Water volume");
                ui.label(format!("{:.2}", stats.total_water));
                ui.end_row();
                ui.label("Deepest cell");
                ui.label(format!("{:.2}", stats.max_water));
                ui.end_row();
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_no_smoke_and_no_duplicates() {
        for (i, a) in PALETTE_ELEMENTS.iter().enumerate() {
            assert!(!a.is_smoke());
            for b in &PALETTE_ELEMENTS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_swatches_are_distinct_for_palette() {
        for (i, a) in PALETTE_ELEMENTS.iter().enumerate() {
            for b in &PALETTE_ELEMENTS[i + 1..] {
                assert_ne!(element_swatch(*a), element_swatch(*b));
            }
        }
    }
}
