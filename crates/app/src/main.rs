use std::path::Path;

use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::sandbox_params::SandboxParams;

/// JSON file with `SandboxParams` overrides.
const PARAMS_ENV: &str = "SANDBOX_PARAMS";
/// Seed override, applied on top of the params file.
const SEED_ENV: &str = "SANDBOX_SEED";

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Sandbox".to_string(),
                    resolution: (1024.0, 768.0).into(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));

    // Resolved after DefaultPlugins so load warnings reach the log, and
    // inserted BEFORE SimulationPlugin so it sizes the grid and timestep.
    let params = resolve_params(
        std::env::var(PARAMS_ENV).ok(),
        std::env::var(SEED_ENV).ok(),
    );
    app.insert_resource(params).add_plugins((
        simulation::SimulationPlugin,
        rendering::SandboxViewPlugin,
        ui::UiPlugin,
    ));

    app.run();
}

/// Defaults, overridden by the params file, overridden by the seed variable.
/// Unreadable or invalid input is logged and skipped.
fn resolve_params(params_path: Option<String>, seed: Option<String>) -> SandboxParams {
    let mut params = match params_path {
        Some(path) => SandboxParams::load_or_default(Path::new(&path)),
        None => SandboxParams::default(),
    };
    if let Some(raw) = seed {
        match raw.trim().parse::<u64>() {
            Ok(seed) => params.seed = seed,
            Err(e) => warn!("Ignoring {}={:?}: {}", SEED_ENV, raw, e),
        }
    }
    params
}
