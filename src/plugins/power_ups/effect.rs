use bevy::prelude::*;

use crate::common::actor::AbilityDescriptor;

use super::capability::PowerUpReceiver;

/// What a collectible does to whoever picks it up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PowerUpEffect {
    ReloadWeapon,
    Heal(i32),
    GrantAbility(AbilityDescriptor),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EffectOutcome {
    Reloaded,
    /// The receiver has no weapon; reloading is a no-op.
    NoWeapon,
    Healed { amount: i32 },
    NoHealth,
    AbilityGranted { replaced: Option<AbilityDescriptor> },
    NoAbilitySlot,
}

impl PowerUpEffect {
    pub fn apply<R: PowerUpReceiver + ?Sized>(&self, receiver: &mut R) -> EffectOutcome {
        match *self {
            Self::ReloadWeapon => match receiver.weapon() {
                Some(weapon) => {
                    weapon.reset_ammo();
                    EffectOutcome::Reloaded
                }
                None => EffectOutcome::NoWeapon,
            },
            Self::Heal(amount) => match receiver.health() {
                Some(health) => EffectOutcome::Healed { amount: health.heal(amount) },
                None => {
                    warn!("Heal({amount}) applied to a receiver without health");
                    EffectOutcome::NoHealth
                }
            },
            Self::GrantAbility(ability) => match receiver.abilities() {
                Some(slot) => EffectOutcome::AbilityGranted {
                    replaced: slot.equip_ability(ability),
                },
                None => EffectOutcome::NoAbilitySlot,
            },
        }
    }
}
