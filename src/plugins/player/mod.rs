//! Player plugin.
//!
//! Pipeline:
//! - Update: sample input, write PlayerInput resource
//! - FixedUpdate: refill jumps when grounded, apply run/jump/dash to the dynamic body
//!
//! The player is the game's power-up receiver: it carries `Health`, a `Weapon`
//! drawing lasers from the projectile pool, an `ActiveAbility` slot and the
//! `CanReceivePowerUps` flag.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::actor::{
    AbilityDescriptor, ActiveAbility, CanReceivePowerUps, Facing, Health, Weapon,
};
use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::projectiles::recipe::Preset;

const PLAYER_SIZE: Vec2 = Vec2::new(22.0, 34.0);
const PLAYER_MAX_HP: i32 = 5;
const MAGAZINE: u32 = 12;

/// Seconds a dash overrides run input.
const DASH_SECS: f32 = 0.15;

#[derive(Component)]
pub struct Player;

#[derive(Component, Debug, Default)]
pub struct Motion {
    /// Jumps left before touching the ground again.
    pub jumps_left: u8,
    pub dash_left: f32,
}

#[derive(Resource, Default, Debug)]
struct PlayerInput {
    run_axis: f32,
    jump: bool,
    dash: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, gather_input)
        .add_systems(FixedUpdate, (refill_jumps, apply_movement).chain());
}

fn spawn(mut commands: Commands) {
    let layers = CollisionLayers::new(
        Layer::Player,
        [Layer::World, Layer::Enemy, Layer::EnemyProjectile, Layer::Pickup],
    );

    let ground_probe = ShapeCaster::new(
        Collider::rectangle(PLAYER_SIZE.x * 0.9, 2.0),
        Vec2::new(0.0, -PLAYER_SIZE.y * 0.5),
        0.0,
        Dir2::NEG_Y,
    )
    .with_max_distance(4.0)
    .with_query_filter(SpatialQueryFilter::from_mask(Layer::World));

    commands.spawn((
        Name::new("Player"),
        Player,
        (
            Health::full(PLAYER_MAX_HP),
            Weapon::loaded(MAGAZINE, Preset::Fast),
            ActiveAbility::default(),
            CanReceivePowerUps(true),
            Facing::default(),
            Motion::default(),
        ),
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(-600.0, -200.0, 1.0),
        RigidBody::Dynamic,
        LockedAxes::ROTATION_LOCKED,
        Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
        Friction::ZERO,
        layers,
        ground_probe,
        LinearVelocity::ZERO,
        DespawnOnExit(GameState::InGame),
    ));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else { return; };
    let mut axis = 0.0;

    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }

    input.run_axis = axis;
    // Latched until the fixed step consumes them.
    input.jump |= keys.just_pressed(KeyCode::Space);
    input.dash |= keys.just_pressed(KeyCode::ShiftLeft);
}

fn refill_jumps(mut q_player: Query<(&ShapeHits, &ActiveAbility, &mut Motion), With<Player>>) {
    let Ok((hits, ability, mut motion)) = q_player.single_mut() else {
        return;
    };
    if !hits.is_empty() {
        motion.jumps_left = 1 + ability.extra_jumps();
    }
}

fn apply_movement(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut input: ResMut<PlayerInput>,
    mut q_player: Query<
        (&mut LinearVelocity, &mut Facing, &mut Motion, &ActiveAbility),
        With<Player>,
    >,
) {
    let Ok((mut vel, mut facing, mut motion, ability)) = q_player.single_mut() else {
        return;
    };

    if input.run_axis != 0.0 {
        facing.0 = input.run_axis.signum();
    }

    if std::mem::take(&mut input.dash)
        && matches!(ability.0, Some(AbilityDescriptor::Dash { .. }))
    {
        motion.dash_left = DASH_SECS;
    }

    match ability.0 {
        Some(AbilityDescriptor::Dash { speed }) if motion.dash_left > 0.0 => {
            motion.dash_left -= time.delta_secs();
            vel.x = facing.0 * speed;
        }
        _ => {
            motion.dash_left = 0.0;
            vel.x = input.run_axis * tunables.player_speed;
        }
    }

    if std::mem::take(&mut input.jump) && motion.jumps_left > 0 {
        motion.jumps_left -= 1;
        vel.y = tunables.jump_speed;
    }
}

#[cfg(test)]
mod tests;
