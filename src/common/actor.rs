//! Actor components shared by the player, enemies and power-ups.

use bevy::prelude::*;
use serde::Deserialize;

use crate::plugins::projectiles::recipe::Preset;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub hp: i32,
    pub max: i32,
}

impl Health {
    pub fn full(max: i32) -> Self {
        Self { hp: max, max }
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

/// A projectile weapon with a finite magazine.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weapon {
    pub ammo: u32,
    pub max_ammo: u32,
    pub preset: Preset,
}

impl Weapon {
    pub fn loaded(max_ammo: u32, preset: Preset) -> Self {
        Self { ammo: max_ammo, max_ammo, preset }
    }

    /// Spend one round. Returns false on an empty magazine.
    #[inline]
    pub fn try_consume(&mut self) -> bool {
        if self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum AbilityDescriptor {
    DoubleJump,
    Dash { speed: f32 },
}

/// The single ability slot of an actor.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct ActiveAbility(pub Option<AbilityDescriptor>);

impl ActiveAbility {
    pub fn extra_jumps(&self) -> u8 {
        match self.0 {
            Some(AbilityDescriptor::DoubleJump) => 1,
            _ => 0,
        }
    }
}

/// Capability flag queried by collectibles before creating an effect.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanReceivePowerUps(pub bool);

/// Horizontal facing, +1 right / -1 left.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Facing(pub f32);

impl Default for Facing {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Facing {
    #[inline]
    pub fn direction(self) -> Vec2 {
        Vec2::new(self.0.signum(), 0.0)
    }
}
