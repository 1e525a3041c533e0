//! Enemies plugin: static targets with Health, some of which are turrets that
//! shoot at the player.
//!
//! Turret shots are requested with `ProjectileOwner::Enemy`. The allocator builds
//! those unpooled, so when they hit something they are destroyed rather than
//! recycled.
//!
//! Despawning is deferred: the fixed step only marks `PendingDespawn`, and
//! `despawn_marked_enemies` removes the entities in PostUpdate.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::Occluder2d;

use crate::common::actor::Health;
use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::player::Player;
use crate::plugins::projectiles::allocator::allocate_projectiles;
use crate::plugins::projectiles::collision::process_projectile_collisions;
use crate::plugins::projectiles::messages::{FireRequest, ProjectileOwner};
use crate::plugins::projectiles::recipe::Preset;

const ENEMY_HP: i32 = 3;

#[derive(Component)]
pub struct Enemy;

#[derive(Component, Debug, Clone)]
pub struct Turret {
    pub cooldown: Timer,
}

/// Marker: enemy should be removed from the world.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_targets)
        .add_systems(
            Update,
            turret_fire
                .before(allocate_projectiles)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedPostUpdate,
            enemy_death
                .after(process_projectile_collisions)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            PostUpdate,
            despawn_marked_enemies.run_if(in_state(GameState::InGame)),
        );
}

/// Collision layers for an enemy that should no longer interact with anything.
#[inline]
fn non_interacting_enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [] as [Layer; 0])
}

fn spawn_targets(mut commands: Commands, tunables: Res<Tunables>) {
    let enemy_layers = CollisionLayers::new(
        Layer::Enemy,
        [Layer::World, Layer::Player, Layer::PlayerProjectile],
    );

    let placements = [
        (Vec2::new(0.0, 4.0), false),
        (Vec2::new(420.0, 164.0), true),
        (Vec2::new(700.0, -496.0), true),
    ];

    for (i, (pos, is_turret)) in placements.into_iter().enumerate() {
        let mut enemy = commands.spawn((
            Name::new(format!("Enemy{i}")),
            Enemy,
            Health::full(ENEMY_HP),
            Sprite {
                color: Color::srgb(0.9, 0.25, 0.25),
                custom_size: Some(Vec2::splat(28.0)),
                ..default()
            },
            Transform::from_translation(pos.extend(1.0)),
            RigidBody::Static,
            Collider::rectangle(28.0, 28.0),
            enemy_layers,
            Occluder2d::circle(14.0),
            DespawnOnExit(GameState::InGame),
        ));

        if is_turret {
            enemy.insert(Turret {
                cooldown: Timer::from_seconds(tunables.enemy_fire_interval_secs, TimerMode::Repeating),
            });
        }
    }
}

/// Producer: turrets fire an unpooled shot at the player whenever their
/// cooldown wraps.
fn turret_fire(
    time: Res<Time>,
    q_player: Query<&Transform, With<Player>>,
    mut q_turrets: Query<(&Transform, &mut Turret), (With<Enemy>, Without<PendingDespawn>)>,
    mut writer: MessageWriter<FireRequest>,
) {
    let Ok(player_tf) = q_player.single() else { return; };
    let target = player_tf.translation.truncate();

    for (tf, mut turret) in &mut q_turrets {
        turret.cooldown.tick(time.delta());
        if !turret.cooldown.just_finished() {
            continue;
        }

        let origin = tf.translation.truncate();
        let Some(direction) = (target - origin).try_normalize() else { continue; };

        writer.write(FireRequest {
            owner: ProjectileOwner::Enemy,
            preset: Preset::Standard,
            origin: origin + direction * 22.0,
            direction,
        });
    }
}

/// Mark dead enemies and stop them interacting.
fn enemy_death(
    mut commands: Commands,
    mut q: Query<(Entity, &Health, &mut CollisionLayers), (With<Enemy>, Without<PendingDespawn>)>,
) {
    for (e, hp, mut layers) in &mut q {
        if !hp.is_dead() {
            continue;
        }
        *layers = non_interacting_enemy_layers();
        commands.entity(e).insert(PendingDespawn);
        debug!("Enemy {e:?} destroyed");
    }
}

fn despawn_marked_enemies(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}

#[cfg(test)]
mod tests;
