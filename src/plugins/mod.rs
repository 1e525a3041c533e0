//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod core;
pub mod enemies;
pub mod physics;
pub mod player;
pub mod power_ups;
pub mod projectiles;
pub mod world;

// Render-only
pub mod camera;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    player::plugin(app);
    enemies::plugin(app);
    power_ups::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
}
