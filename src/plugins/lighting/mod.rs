//! Lighting plugin (Firefly) (render-only).
//!
//! The player carries a lantern whose reach shrinks with their health, and every
//! pickup gets a small coloured glow so it reads against the dark level.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::actor::Health;
use crate::common::state::GameState;
use crate::plugins::player::Player;
use crate::plugins::power_ups::collectible::Collectible;

const LANTERN_MIN_RANGE: f32 = 220.0;
const LANTERN_MAX_RANGE: f32 = 450.0;
const PICKUP_GLOW_RANGE: f32 = 90.0;

#[derive(Component)]
pub struct Lantern;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), spawn_lantern)
        .add_systems(
            Update,
            (track_lantern, light_pickups).run_if(in_state(GameState::InGame)),
        );
}

fn spawn_lantern(mut commands: Commands) {
    commands.spawn((
        Name::new("Lantern"),
        Lantern,
        PointLight2d {
            color: Color::srgb(1.0, 0.9, 0.75),
            radius: LANTERN_MAX_RANGE,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

/// Lantern range for a given health fraction in `[0, 1]`.
#[inline]
fn lantern_range(fraction: f32) -> f32 {
    LANTERN_MIN_RANGE + (LANTERN_MAX_RANGE - LANTERN_MIN_RANGE) * fraction.clamp(0.0, 1.0)
}

fn track_lantern(
    q_player: Query<(&Transform, &Health), (With<Player>, Without<Lantern>)>,
    mut q_lantern: Query<(&mut Transform, &mut PointLight2d), (With<Lantern>, Without<Player>)>,
) {
    let Ok((tf_player, health)) = q_player.single() else { return; };
    let Ok((mut tf_lantern, mut light)) = q_lantern.single_mut() else { return; };

    tf_lantern.translation.x = tf_player.translation.x;
    tf_lantern.translation.y = tf_player.translation.y;

    let fraction = if health.max > 0 { health.hp as f32 / health.max as f32 } else { 0.0 };
    light.radius = lantern_range(fraction);
}

/// Pickups are spawned by gameplay code, which knows nothing about lights.
fn light_pickups(mut commands: Commands, q_new: Query<(Entity, &Sprite), Added<Collectible>>) {
    for (e, sprite) in &q_new {
        commands.entity(e).with_child((
            PointLight2d {
                color: sprite.color,
                radius: PICKUP_GLOW_RANGE,
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 10.0),
        ));
    }
}
