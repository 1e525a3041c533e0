//! Return commit: retire finished flights.
//!
//! This system is the "owner" of the *parked invariants*.
//!
//! Invariant: a projectile returned to the pool must be:
//! - hidden
//! - velocity = 0
//! - collide with nothing (filters empty)
//!
//! Unpooled projectiles are despawned instead.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use super::lifecycle::{LifecycleState, ProjectileLifecycle};
use super::messages::TerminalCondition;
use super::pool::{inactive_projectile_layers, ProjectilePool};

pub fn return_or_destroy_commit(
    mut commands: Commands,
    mut pool: Option<ResMut<ProjectilePool>>,
    mut reader: MessageReader<TerminalCondition>,
    mut q: Query<(
        &mut ProjectileLifecycle,
        &mut Visibility,
        &mut LinearVelocity,
        &mut CollisionLayers,
    )>,
    // Several causes can end the same flight in one step; only the first counts.
    mut seen: Local<HashSet<Entity>>,
) -> Result {
    seen.clear();

    for ev in reader.read() {
        if !seen.insert(ev.projectile) { continue; }

        let Ok((mut lifecycle, mut vis, mut vel, mut layers)) = q.get_mut(ev.projectile) else {
            continue;
        };

        match lifecycle.return_or_destroy(pool.as_deref_mut())? {
            LifecycleState::Returned => {
                *vis = Visibility::Hidden;
                vel.0 = Vec2::ZERO;
                *layers = inactive_projectile_layers();
            }
            _ => commands.entity(ev.projectile).despawn(),
        }

        debug!("Retired {:?} ({:?}) -> {:?}", ev.projectile, ev.cause, lifecycle.state());
    }
    Ok(())
}
