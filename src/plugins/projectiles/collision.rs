//! Impact detection: projectile contacts become damage and `Impact` terminal conditions.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::actor::Health;
use crate::common::layers::Layer;

use super::lifecycle::ProjectileLifecycle;
use super::messages::{TerminalCause, TerminalCondition};

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

#[inline]
fn is_in_layer(layers: &CollisionLayers, layer: Layer) -> bool {
    layers.memberships.has_all(layer)
}

/// Translate projectile contacts into damage and `Impact` terminal conditions.
///
/// The projectile itself is not touched here; retiring it is the commit's job.
pub fn process_projectile_collisions(
    mut started: MessageReader<CollisionStart>,
    q_projectiles: Query<&ProjectileLifecycle>,
    q_layers: Query<&CollisionLayers>,
    mut q_health: Query<&mut Health>,
    mut writer: MessageWriter<TerminalCondition>,
    // Per-run dedupe: one impact per projectile
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);

        let p1 = q_projectiles.contains(t1.collider);
        let p2 = q_projectiles.contains(t2.collider);
        if !(p1 ^ p2) {
            continue; // must be exactly one projectile
        }
        let (projectile, other) = if p1 { (t1, t2) } else { (t2, t1) };

        if seen.contains(&projectile.collider) {
            continue;
        }

        let Ok(lifecycle) = q_projectiles.get(projectile.collider) else {
            continue;
        };
        // Parked projectiles collide with nothing; a stale contact is ignored.
        if !lifecycle.is_in_flight() {
            continue;
        }

        let Ok(other_layers) = q_layers.get(other.collider) else {
            continue;
        };

        if is_in_layer(other_layers, Layer::Enemy) || is_in_layer(other_layers, Layer::Player) {
            let damage = lifecycle.config().map_or(0, |c| c.damage);
            if let Ok(mut hp) = q_health.get_mut(other.gameplay_owner()) {
                hp.hp -= damage;
            }
        } else if !is_in_layer(other_layers, Layer::World) {
            continue;
        }

        seen.insert(projectile.collider);
        writer.write(TerminalCondition {
            projectile: projectile.collider,
            cause: TerminalCause::Impact,
        });
    }
}
