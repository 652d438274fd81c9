use bevy_egui::{egui, EguiContexts};

pub fn apply_sandbox_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgb(28, 28, 34);
    let inactive = egui::Color32::from_rgb(48, 48, 58);
    let hover = egui::Color32::from_rgb(78, 70, 56);
    let active = egui::Color32::from_rgb(214, 168, 86);

    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.active.weak_bg_fill = active;
    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;

    // sand-colored selection so the active element stands out
    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.spacing.item_spacing = egui::vec2(6.0, 6.0);

    ctx.set_style(style);
}
