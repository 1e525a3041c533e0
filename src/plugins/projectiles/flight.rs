//! Fixed-step flight: drive movement and detect timeouts / leaving the arena.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::ecs::message::MessageWriter;

use crate::common::tunables::Tunables;

use super::components::ProjectileLifetime;
use super::lifecycle::ProjectileLifecycle;
use super::messages::{TerminalCause, TerminalCondition};

/// Keep each fired projectile's velocity in step with its movement strategy.
pub fn advance_projectiles(
    tunables: Res<Tunables>,
    mut q: Query<(&ProjectileLifecycle, &mut LinearVelocity)>,
) {
    for (lifecycle, mut vel) in &mut q {
        let Some(v) = lifecycle.velocity() else { continue; };
        vel.0 = v * tunables.pixels_per_meter;
    }
}

pub fn expire_projectiles(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut q: Query<(Entity, &ProjectileLifecycle, &mut ProjectileLifetime, &Transform)>,
    mut writer: MessageWriter<TerminalCondition>,
) {
    for (e, lifecycle, mut lifetime, tf) in &mut q {
        if !lifecycle.is_in_flight() {
            continue;
        }

        lifetime.tick(time.delta());

        let pos = tf.translation.truncate();
        let cause = if pos.x.abs() > tunables.arena_half_width
            || pos.y.abs() > tunables.arena_half_height
        {
            TerminalCause::OutOfBounds
        } else if lifetime.is_finished() {
            TerminalCause::Timeout
        } else {
            continue;
        };

        writer.write(TerminalCondition { projectile: e, cause });
    }
}
