//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `bevy_platformer::game::configure_headless` to install gameplay plugins.

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy_platformer::common::tunables::Tunables;

pub fn app_headless() -> App {
    app_headless_with(Tunables::default())
}

/// Headless app with fixed tunables (the on-disk file is ignored) and a manual
/// clock, so every `update` runs at least one fixed step.
pub fn app_headless_with(tunables: Tunables) -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(20)));
    app.insert_resource(tunables);

    bevy_platformer::game::configure_headless(&mut app);
    // `App::run` normally does this; manual `update` loops must finish plugin setup themselves.
    app.finish();
    app.cleanup();
    app
}

pub fn tick(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}
