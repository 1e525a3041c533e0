//! Projectile construction: builder (what can be configured), director (which
//! presets exist).
//!
//! The builder is taken by value and consumed by `build`, so every construction
//! starts from a fresh builder and nothing leaks between recipes.

use serde::Deserialize;

use super::handle::ProjectileHandle;

/// Immutable configuration bundle consumed once by the factory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileRecipe {
    speed: f32,
    damage: i32,
}

impl ProjectileRecipe {
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn damage(&self) -> i32 {
        self.damage
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectileBuilder {
    speed: f32,
    damage: i32,
}

impl ProjectileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Speed in meters per second.
    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }

    pub fn build(self) -> ProjectileRecipe {
        ProjectileRecipe {
            speed: self.speed,
            damage: self.damage,
        }
    }

    /// Overwrite a live handle's configuration in place.
    pub fn build_onto(self, handle: &mut ProjectileHandle) {
        handle.configure(&self.build());
    }
}

/// Named recipes, each a fixed sequence of builder calls.
pub struct ProjectileDirector;

impl ProjectileDirector {
    pub fn standard() -> ProjectileRecipe {
        ProjectileBuilder::new().speed(15.0).damage(1).build()
    }

    pub fn fast() -> ProjectileRecipe {
        ProjectileBuilder::new().speed(30.0).damage(1).build()
    }
}

/// Serializable name of a director recipe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum Preset {
    #[default]
    Standard,
    Fast,
}

impl Preset {
    pub fn recipe(self) -> ProjectileRecipe {
        match self {
            Self::Standard => ProjectileDirector::standard(),
            Self::Fast => ProjectileDirector::fast(),
        }
    }
}
