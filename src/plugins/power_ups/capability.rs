//! Receiver-side capabilities.
//!
//! A collectible never owns the actor it touches. It asks the actor, through
//! `PowerUpReceiver`, whether it accepts power-ups and which optional
//! collaborators (health, weapon, ability slot) it has.

use bevy::prelude::*;

use crate::common::actor::{AbilityDescriptor, ActiveAbility, Health, Weapon};

use super::effect::{EffectOutcome, PowerUpEffect};

pub trait HealthCapability {
    /// Heal up to max. Returns the hp actually gained.
    fn heal(&mut self, amount: i32) -> i32;
}

pub trait WeaponCapability {
    fn reset_ammo(&mut self);
}

pub trait AbilityCapability {
    /// Replace the active ability, returning the previous one.
    fn equip_ability(&mut self, ability: AbilityDescriptor) -> Option<AbilityDescriptor>;
}

pub trait PowerUpReceiver {
    fn can_receive_power_ups(&self) -> bool;

    fn health(&mut self) -> Option<&mut dyn HealthCapability> {
        None
    }

    fn weapon(&mut self) -> Option<&mut dyn WeaponCapability> {
        None
    }

    fn abilities(&mut self) -> Option<&mut dyn AbilityCapability> {
        None
    }

    fn apply(&mut self, effect: &PowerUpEffect) -> EffectOutcome {
        effect.apply(self)
    }
}

impl HealthCapability for Health {
    fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        let target = self.hp.saturating_add(amount.max(0)).min(self.max);
        self.hp = self.hp.max(target);
        self.hp - before
    }
}

impl WeaponCapability for Weapon {
    fn reset_ammo(&mut self) {
        self.ammo = self.max_ammo;
    }
}

impl AbilityCapability for ActiveAbility {
    fn equip_ability(&mut self, ability: AbilityDescriptor) -> Option<AbilityDescriptor> {
        self.0.replace(ability)
    }
}

/// An actor entity seen through its optional components.
pub struct ReceiverView<'w> {
    pub eligible: bool,
    pub health: Option<Mut<'w, Health>>,
    pub weapon: Option<Mut<'w, Weapon>>,
    pub ability: Option<Mut<'w, ActiveAbility>>,
}

impl PowerUpReceiver for ReceiverView<'_> {
    fn can_receive_power_ups(&self) -> bool {
        self.eligible
    }

    fn health(&mut self) -> Option<&mut dyn HealthCapability> {
        self.health
            .as_deref_mut()
            .map(|h| h as &mut dyn HealthCapability)
    }

    fn weapon(&mut self) -> Option<&mut dyn WeaponCapability> {
        self.weapon
            .as_deref_mut()
            .map(|w| w as &mut dyn WeaponCapability)
    }

    fn abilities(&mut self) -> Option<&mut dyn AbilityCapability> {
        self.ability
            .as_deref_mut()
            .map(|a| a as &mut dyn AbilityCapability)
    }
}
