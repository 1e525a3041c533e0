mod common;

use bevy::prelude::*;
use bevy_platformer::common::actor::{CanReceivePowerUps, Health, Weapon};
use bevy_platformer::common::tunables::{PoolConfig, Tunables};
use bevy_platformer::plugins::player::Player;
use bevy_platformer::plugins::power_ups::collectible::Collectible;
use bevy_platformer::plugins::projectiles::lifecycle::ProjectileLifecycle;
use bevy_platformer::plugins::projectiles::pool::ProjectilePool;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();
    common::tick(&mut app, 3);
}

#[test]
fn player_spawns_as_a_power_up_receiver() {
    let mut app = common::app_headless();
    common::tick(&mut app, 2);

    let count = app
        .world_mut()
        .query_filtered::<(&Health, &Weapon, &CanReceivePowerUps), With<Player>>()
        .iter(app.world())
        .count();
    assert_eq!(count, 1);

    let pickups = app.world_mut().query::<&Collectible>().iter(app.world()).count();
    assert_eq!(pickups, 4);
}

#[test]
fn prewarmed_pool_has_parked_entities() {
    let mut app = common::app_headless_with(Tunables {
        pool: PoolConfig { prewarm_count: 6, ..default() },
        ..default()
    });
    common::tick(&mut app, 2);

    let pool = app.world().resource::<ProjectilePool>();
    assert_eq!(pool.idle_count(), 6);
    assert_eq!(pool.in_flight_count(), 0);

    let parked = app
        .world_mut()
        .query::<(&ProjectileLifecycle, &Visibility)>()
        .iter(app.world())
        .filter(|(l, v)| !l.is_in_flight() && **v == Visibility::Hidden)
        .count();
    assert_eq!(parked, 6);
}
