//! Fire consumer: build projectiles through the factory and launch them.
//!
//! # Fail-fast invariants
//! - A handle bound to an entity always points at a live projectile entity.
//! - Therefore, a bound entity must match the projectile query.
//!
//! If this is violated, we `expect()` and crash loudly. Lifecycle errors are
//! returned to Bevy's error handler with `?`.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::ecs::message::MessageReader;

use crate::common::tunables::Tunables;

use super::components::ProjectileLifetime;
use super::factory::ProjectileFactory;
use super::lifecycle::{ProjectileLifecycle, StraightLine};
use super::messages::{FireRequest, ProjectileOwner};
use super::pool::{active_projectile_layers, parked_projectile, ProjectilePool};

pub fn allocate_projectiles(
    mut commands: Commands,
    mut pool: Option<ResMut<ProjectilePool>>,
    tunables: Res<Tunables>,
    mut reader: MessageReader<FireRequest>,
    mut q: Query<(
        &mut ProjectileLifecycle,
        &mut ProjectileLifetime,
        &mut Transform,
        &mut Visibility,
        &mut LinearVelocity,
        &mut CollisionLayers,
    )>,
) -> Result {
    for req in reader.read() {
        let mut factory = match (req.owner, pool.as_deref_mut()) {
            (ProjectileOwner::Player, Some(pool)) => ProjectileFactory::pooled(pool),
            _ => ProjectileFactory::unpooled(),
        };
        let mut handle = factory.create_preset(req.preset);

        let placed = Transform::from_translation(req.origin.extend(2.0))
            .with_rotation(Quat::from_rotation_z(req.direction.to_angle()));
        let layers = active_projectile_layers(req.owner);
        let movement = StraightLine::new(req.direction);

        if let Some(e) = handle.entity() {
            let (mut lifecycle, mut lifetime, mut tf, mut vis, mut vel, mut current_layers) = q
                .get_mut(e)
                .expect("projectile handle bound to an entity missing projectile components");

            lifecycle.set_movement(movement);
            lifecycle.arm(handle)?;
            lifecycle.fire()?;

            lifetime.restart(tunables.projectile_lifetime_secs);
            *tf = placed;
            *vis = Visibility::Visible;
            vel.0 = lifecycle.velocity().unwrap_or(Vec2::ZERO) * tunables.pixels_per_meter;
            *current_layers = layers;
            continue;
        }

        // First use of this handle: spawn its entity.
        let name = if handle.is_pooled() { "Laser(Pooled)" } else { "Laser(Unpooled)" };
        let e = commands.spawn_empty().id();
        handle.bind_entity(e);

        let mut lifecycle = ProjectileLifecycle::with_movement(movement);
        lifecycle.arm(handle)?;
        lifecycle.fire()?;
        let vel = lifecycle.velocity().unwrap_or(Vec2::ZERO) * tunables.pixels_per_meter;

        let mut lifetime = ProjectileLifetime::default();
        lifetime.restart(tunables.projectile_lifetime_secs);

        commands
            .entity(e)
            .insert(parked_projectile(name, lifecycle))
            .insert((lifetime, placed, Visibility::Visible, LinearVelocity(vel), layers));
        debug!("Spawned {name} {e:?}");
    }
    Ok(())
}
