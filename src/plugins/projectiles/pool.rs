//! The projectile pool and the entities backing its handles.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::tunables::{GrowthPolicy, PoolConfig, Tunables};

use super::components::ProjectileLifetime;
use super::error::{PoolError, ReleaseRejection};
use super::handle::{HandleId, HandleState, PoolId, ProjectileHandle};
use super::lifecycle::ProjectileLifecycle;
use super::messages::ProjectileOwner;

/// Reuse buffer of projectile handles.
///
/// `idle` holds the handles the pool currently owns. `slots` records the
/// Idle/InFlight partition for every handle ever created, so a release can be
/// checked against what the pool actually handed out.
#[derive(Resource, Debug)]
pub struct ProjectilePool {
    id: PoolId,
    idle: Vec<ProjectileHandle>,
    slots: Vec<HandleState>,
    in_flight: usize,
    growth: GrowthPolicy,
}

impl ProjectilePool {
    pub fn new(config: &PoolConfig) -> Self {
        let id = PoolId::next();
        let n = config.prewarm_count;

        let idle = (0..n as u32)
            .map(|slot| ProjectileHandle::pooled(HandleId::new(id, slot)))
            .collect();

        Self {
            id,
            idle,
            slots: vec![HandleState::Idle; n],
            in_flight: 0,
            growth: config.growth_policy,
        }
    }

    #[inline]
    pub fn id(&self) -> PoolId {
        self.id
    }

    #[inline]
    pub fn idle_count(&self) -> usize {
        self.idle.len()
    }

    #[inline]
    pub fn in_flight_count(&self) -> usize {
        self.in_flight
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.slots.len()
    }

    pub fn owns(&self, handle: &ProjectileHandle) -> bool {
        handle.pool_id() == Some(self.id)
    }

    /// Take an idle handle, growing the pool when none is left. Never fails.
    ///
    /// Only `ProjectileFactory` calls this; everything else goes through it.
    pub(crate) fn acquire(&mut self) -> ProjectileHandle {
        let mut handle = match self.idle.pop() {
            Some(handle) => handle,
            None => self.grow(),
        };

        let slot = handle
            .id()
            .expect("pool handed out a detached handle")
            .slot();
        debug_assert_eq!(self.slots[slot], HandleState::Idle);

        self.slots[slot] = HandleState::InFlight;
        self.in_flight += 1;
        handle.set_state(HandleState::InFlight);
        handle
    }

    /// Give an in-flight handle back. It is immediately eligible for `acquire`.
    pub fn release(&mut self, mut handle: ProjectileHandle) -> Result<(), PoolError> {
        let reject = |reason| PoolError::InvalidRelease { pool: self.id, reason };

        let id = handle.id().ok_or_else(|| reject(ReleaseRejection::Detached))?;
        if id.pool() != self.id {
            return Err(reject(ReleaseRejection::ForeignPool(id)));
        }
        if handle.state() != HandleState::InFlight
            || self.slots.get(id.slot()) != Some(&HandleState::InFlight)
        {
            return Err(reject(ReleaseRejection::NotInFlight(id)));
        }

        self.slots[id.slot()] = HandleState::Idle;
        self.in_flight -= 1;
        handle.set_state(HandleState::Idle);
        self.idle.push(handle);
        Ok(())
    }

    pub(super) fn idle_handles_mut(&mut self) -> impl Iterator<Item = &mut ProjectileHandle> {
        self.idle.iter_mut()
    }

    /// Append one Idle slot as the growth policy allows.
    fn grow(&mut self) -> ProjectileHandle {
        let slot = match self.growth {
            GrowthPolicy::Unbounded => {
                let slot = self.slots.len() as u32;
                self.slots.push(HandleState::Idle);
                slot
            }
        };

        debug!("{} grew to {} handles", self.id, self.slots.len());
        ProjectileHandle::pooled(HandleId::new(self.id, slot))
    }
}

impl FromWorld for ProjectilePool {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<Tunables>()
            .map(|t| t.pool)
            .unwrap_or_default();
        Self::new(&config)
    }
}

#[inline]
pub(super) fn active_projectile_layers(owner: ProjectileOwner) -> CollisionLayers {
    match owner {
        ProjectileOwner::Player => {
            CollisionLayers::new(Layer::PlayerProjectile, [Layer::World, Layer::Enemy])
        }
        ProjectileOwner::Enemy => {
            CollisionLayers::new(Layer::EnemyProjectile, [Layer::World, Layer::Player])
        }
    }
}

/// Parked projectiles keep their physics components but collide with nothing.
#[inline]
pub(super) fn inactive_projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerProjectile, [] as [Layer; 0])
}

/// Components of a projectile entity in its parked (hidden, inert) form.
pub(super) fn parked_projectile(name: &'static str, lifecycle: ProjectileLifecycle) -> impl Bundle {
    (
        Name::new(name),
        lifecycle,
        ProjectileLifetime::default(),
        Sprite {
            color: Color::srgb(0.4, 0.95, 1.0),
            custom_size: Some(Vec2::new(14.0, 4.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 2.0),
        Visibility::Hidden,
        RigidBody::Dynamic,
        GravityScale(0.0),
        Collider::rectangle(14.0, 4.0),
        Sensor,
        inactive_projectile_layers(),
        LinearVelocity(Vec2::ZERO),
        CollisionEventsEnabled,
    )
}

/// Spawn one parked entity per pre-warmed handle and bind it.
pub fn init_projectile_pool(mut commands: Commands, mut pool: ResMut<ProjectilePool>) {
    let mut spawned = 0usize;
    for handle in pool.idle_handles_mut() {
        if handle.entity().is_some() {
            continue;
        }
        let e = commands
            .spawn(parked_projectile("Laser(Pooled)", ProjectileLifecycle::new()))
            .id();
        handle.bind_entity(e);
        spawned += 1;
    }
    debug!("Pre-warmed {spawned} pooled projectiles");
}
