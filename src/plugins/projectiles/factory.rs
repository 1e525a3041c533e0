//! The single place new projectile handles come from.

use bevy::prelude::*;

use super::handle::ProjectileHandle;
use super::pool::ProjectilePool;
use super::recipe::{Preset, ProjectileRecipe};

/// Acquires a handle (from the pool when one is bound) and applies a recipe.
///
/// Without a pool the factory hands out detached handles; those are destroyed
/// instead of recycled when their flight ends.
pub struct ProjectileFactory<'a> {
    pool: Option<&'a mut ProjectilePool>,
}

impl<'a> ProjectileFactory<'a> {
    pub fn pooled(pool: &'a mut ProjectilePool) -> Self {
        Self { pool: Some(pool) }
    }

    pub fn unpooled() -> Self {
        Self { pool: None }
    }

    /// Returns a configured handle in the InFlight state, ready to arm and fire.
    pub fn create(&mut self, recipe: ProjectileRecipe) -> ProjectileHandle {
        let mut handle = match self.pool.as_deref_mut() {
            Some(pool) => pool.acquire(),
            None => ProjectileHandle::detached(),
        };
        handle.configure(&recipe);

        debug!(
            "Created projectile {:?} (speed {}, damage {})",
            handle.id(),
            recipe.speed(),
            recipe.damage()
        );
        handle
    }

    pub fn create_preset(&mut self, preset: Preset) -> ProjectileHandle {
        self.create(preset.recipe())
    }
}
