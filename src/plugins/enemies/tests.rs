use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::actor::Health;
use crate::common::layers::Layer;
use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::player::Player;
use crate::plugins::projectiles::messages::{FireRequest, ProjectileOwner};

use super::*;

fn time_after(secs: f32) -> Time {
    let mut t = Time::<()>::default();
    t.advance_by(Duration::from_secs_f32(secs));
    t
}

fn fire_requests(world: &mut World) -> Vec<FireRequest> {
    world
        .resource_mut::<Messages<FireRequest>>()
        .drain()
        .collect()
}

#[test]
fn spawn_targets_creates_enemies_and_turrets() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    run_system_once(&mut world, spawn_targets);

    let enemies = world.query_filtered::<&Health, With<Enemy>>().iter(&world).count();
    let turrets = world.query::<&Turret>().iter(&world).count();
    assert_eq!(enemies, 3);
    assert_eq!(turrets, 2);
}

#[test]
fn turret_fires_unpooled_shot_at_player_when_cooldown_wraps() {
    let mut world = World::new();
    world.init_resource::<Messages<FireRequest>>();
    world.insert_resource(time_after(1.5));

    world.spawn((Player, Transform::from_xyz(-100.0, 0.0, 0.0)));
    world.spawn((
        Enemy,
        Transform::from_xyz(100.0, 0.0, 0.0),
        Turret { cooldown: Timer::from_seconds(1.0, TimerMode::Repeating) },
    ));

    run_system_once(&mut world, turret_fire);

    let requests = fire_requests(&mut world);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].owner, ProjectileOwner::Enemy);
    assert!(requests[0].direction.abs_diff_eq(Vec2::NEG_X, 1e-5));
    assert!(requests[0].origin.x < 100.0);
}

#[test]
fn turret_holds_fire_while_cooling_down() {
    let mut world = World::new();
    world.init_resource::<Messages<FireRequest>>();
    world.insert_resource(time_after(0.5));

    world.spawn((Player, Transform::from_xyz(-100.0, 0.0, 0.0)));
    world.spawn((
        Enemy,
        Transform::default(),
        Turret { cooldown: Timer::from_seconds(1.0, TimerMode::Repeating) },
    ));

    run_system_once(&mut world, turret_fire);

    assert!(fire_requests(&mut world).is_empty());
}

#[test]
fn dead_enemy_is_disabled_then_despawned() {
    let mut world = World::new();
    let e = world
        .spawn((
            Enemy,
            Health { hp: 0, max: 3 },
            CollisionLayers::new(Layer::Enemy, [Layer::PlayerProjectile]),
        ))
        .id();

    run_system_once(&mut world, enemy_death);

    assert!(world.get::<PendingDespawn>(e).is_some());
    assert!(!world.get::<CollisionLayers>(e).unwrap().filters.has_all(Layer::PlayerProjectile));

    run_system_once(&mut world, despawn_marked_enemies);
    assert!(world.get_entity(e).is_err());
}

#[test]
fn living_enemy_is_left_alone() {
    let mut world = World::new();
    let e = world
        .spawn((
            Enemy,
            Health::full(3),
            CollisionLayers::new(Layer::Enemy, [Layer::PlayerProjectile]),
        ))
        .id();

    run_system_once(&mut world, enemy_death);

    assert!(world.get::<PendingDespawn>(e).is_none());
}
