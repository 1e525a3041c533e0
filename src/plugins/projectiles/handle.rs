//! Projectile handles: identity + configuration of one reusable projectile.
//!
//! A handle is a move-only value. The pool holds it while it is Idle, exactly one
//! `ProjectileLifecycle` holds it while it is InFlight. Because it is never cloned,
//! two lifecycles can't refer to the same flight.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use bevy::prelude::*;

use super::recipe::ProjectileRecipe;

static NEXT_POOL_ID: AtomicU32 = AtomicU32::new(1);

/// Process-unique identity of a pool instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoolId(u32);

impl PoolId {
    pub(super) fn next() -> Self {
        Self(NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pool#{}", self.0)
    }
}

/// Slot of a handle inside its owning pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandleId {
    pool: PoolId,
    slot: u32,
}

impl HandleId {
    pub(super) fn new(pool: PoolId, slot: u32) -> Self {
        Self { pool, slot }
    }

    #[inline]
    pub fn pool(self) -> PoolId {
        self.pool
    }

    #[inline]
    pub fn slot(self) -> usize {
        self.slot as usize
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/slot#{}", self.pool, self.slot)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HandleState {
    #[default]
    Idle,
    InFlight,
}

/// Per-flight configuration written by the builder.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectileConfig {
    pub speed: f32,
    pub damage: i32,
}

#[derive(Debug)]
pub struct ProjectileHandle {
    id: Option<HandleId>,
    state: HandleState,
    config: ProjectileConfig,
    entity: Option<Entity>,
}

impl ProjectileHandle {
    /// Fresh pool-owned handle (Idle, default configuration).
    pub(super) fn pooled(id: HandleId) -> Self {
        Self {
            id: Some(id),
            state: HandleState::Idle,
            config: ProjectileConfig::default(),
            entity: None,
        }
    }

    /// Handle with no owning pool. It is born in flight and can only be destroyed.
    pub(super) fn detached() -> Self {
        Self {
            id: None,
            state: HandleState::InFlight,
            config: ProjectileConfig::default(),
            entity: None,
        }
    }

    #[inline]
    pub fn id(&self) -> Option<HandleId> {
        self.id
    }

    #[inline]
    pub fn pool_id(&self) -> Option<PoolId> {
        self.id.map(HandleId::pool)
    }

    #[inline]
    pub fn is_pooled(&self) -> bool {
        self.id.is_some()
    }

    #[inline]
    pub fn state(&self) -> HandleState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &ProjectileConfig {
        &self.config
    }

    /// Entity that renders/simulates this handle, once one has been spawned.
    #[inline]
    pub fn entity(&self) -> Option<Entity> {
        self.entity
    }

    pub fn bind_entity(&mut self, entity: Entity) {
        self.entity = Some(entity);
    }

    pub(super) fn set_state(&mut self, state: HandleState) {
        self.state = state;
    }

    pub(super) fn configure(&mut self, recipe: &ProjectileRecipe) {
        self.config = ProjectileConfig {
            speed: recipe.speed(),
            damage: recipe.damage(),
        };
    }

    pub(super) fn reset_config(&mut self) {
        self.config = ProjectileConfig::default();
    }
}
