use bevy::prelude::*;
use avian2d::prelude::*;

use crate::common::actor::{AbilityDescriptor, ActiveAbility, CanReceivePowerUps, Facing, Health, Weapon};
use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;

use super::{Motion, Player, PlayerInput};

fn movement_world(input: PlayerInput, ability: ActiveAbility, motion: Motion) -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(Tunables { player_speed: 100.0, jump_speed: 250.0, ..default() });
    world.insert_resource(Time::<Fixed>::default());
    world.insert_resource(input);
    let e = world
        .spawn((Player, LinearVelocity::ZERO, Facing::default(), motion, ability))
        .id();
    (world, e)
}

#[test]
fn spawn_creates_player_as_power_up_receiver() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn);

    let mut q = world.query_filtered::<(&Health, &Weapon, &CanReceivePowerUps, &ActiveAbility), With<Player>>();
    let (health, weapon, flag, ability) = q.single(&world).expect("exactly one player");

    assert_eq!(health.hp, health.max);
    assert_eq!(weapon.ammo, weapon.max_ammo);
    assert!(flag.0);
    assert_eq!(ability.0, None);
}

#[test]
fn apply_movement_sets_run_velocity_and_facing() {
    let (mut world, e) = movement_world(
        PlayerInput { run_axis: -1.0, ..default() },
        ActiveAbility::default(),
        Motion::default(),
    );

    run_system_once(&mut world, super::apply_movement);

    assert_eq!(world.get::<LinearVelocity>(e).unwrap().x, -100.0);
    assert_eq!(world.get::<Facing>(e).unwrap().0, -1.0);
}

#[test]
fn jump_spends_one_jump_and_clears_the_latch() {
    let (mut world, e) = movement_world(
        PlayerInput { jump: true, ..default() },
        ActiveAbility::default(),
        Motion { jumps_left: 1, dash_left: 0.0 },
    );

    run_system_once(&mut world, super::apply_movement);

    assert_eq!(world.get::<LinearVelocity>(e).unwrap().y, 250.0);
    assert_eq!(world.get::<Motion>(e).unwrap().jumps_left, 0);
    assert!(!world.resource::<PlayerInput>().jump);
}

#[test]
fn jump_without_budget_does_nothing() {
    let (mut world, e) = movement_world(
        PlayerInput { jump: true, ..default() },
        ActiveAbility::default(),
        Motion::default(),
    );

    run_system_once(&mut world, super::apply_movement);

    assert_eq!(world.get::<LinearVelocity>(e).unwrap().y, 0.0);
}

#[test]
fn dash_requires_the_dash_ability() {
    let (mut world, e) = movement_world(
        PlayerInput { dash: true, ..default() },
        ActiveAbility(Some(AbilityDescriptor::Dash { speed: 900.0 })),
        Motion::default(),
    );
    run_system_once(&mut world, super::apply_movement);
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().x, 900.0);

    let (mut world, e) = movement_world(
        PlayerInput { dash: true, ..default() },
        ActiveAbility(Some(AbilityDescriptor::DoubleJump)),
        Motion::default(),
    );
    run_system_once(&mut world, super::apply_movement);
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().x, 0.0);
}

#[test]
fn double_jump_grants_an_extra_jump() {
    assert_eq!(ActiveAbility::default().extra_jumps(), 0);
    assert_eq!(ActiveAbility(Some(AbilityDescriptor::DoubleJump)).extra_jumps(), 1);
}
