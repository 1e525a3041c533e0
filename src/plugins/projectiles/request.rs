use bevy::prelude::*;
use bevy::ecs::message::MessageWriter;

use crate::common::actor::{Facing, Weapon};
use crate::plugins::player::Player;

use super::messages::{FireRequest, ProjectileOwner};

/// Distance from the player's centre where lasers appear.
const MUZZLE_OFFSET: f32 = 20.0;

/// Producer: read the fire key, spend a round, then write a FireRequest message.
///
/// This system intentionally does **not** access ProjectilePool.
pub fn request_player_fire(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut q_player: Query<(&Transform, &Facing, &mut Weapon), With<Player>>,
    mut writer: MessageWriter<FireRequest>,
) {
    let Some(keys) = keys else { return; };
    if !keys.just_pressed(KeyCode::KeyJ) { return; }

    let (tf, facing, mut weapon) = match q_player.single_mut() {
        Ok(v) => v,
        Err(e) => { debug!("No single armed Player: {e:?}"); return; }
    };

    if !weapon.try_consume() {
        debug!("Fire pressed with an empty magazine");
        return;
    }

    let direction = facing.direction();
    writer.write(FireRequest {
        owner: ProjectileOwner::Player,
        preset: weapon.preset,
        origin: tf.translation.truncate() + direction * MUZZLE_OFFSET,
        direction,
    });
}
