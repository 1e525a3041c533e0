//! Single-use pickups that hand a power-up to whoever touches them.

use std::fmt;

use bevy::prelude::*;

use crate::common::actor::AbilityDescriptor;

use super::capability::PowerUpReceiver;
use super::effect::{EffectOutcome, PowerUpEffect};
use super::error::PowerUpError;

type EffectFactory =
    Box<dyn Fn(&mut dyn PowerUpReceiver) -> Result<PowerUpEffect, PowerUpError> + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContactOutcome {
    /// The collectible was already used up. Nothing happened.
    AlreadyConsumed,
    /// The receiver can't take power-ups. The collectible is still used up.
    Ineligible,
    Applied {
        effect: PowerUpEffect,
        outcome: EffectOutcome,
    },
}

#[derive(Component)]
pub struct Collectible {
    name: &'static str,
    active: bool,
    factory: EffectFactory,
}

impl fmt::Debug for Collectible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collectible")
            .field("name", &self.name)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl Collectible {
    pub fn new(
        name: &'static str,
        factory: impl Fn(&mut dyn PowerUpReceiver) -> Result<PowerUpEffect, PowerUpError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            name,
            active: true,
            factory: Box::new(factory),
        }
    }

    /// Heals `heal_amount`. Health is required: a receiver without it is a
    /// configuration error.
    pub fn one_up(heal_amount: i32) -> Self {
        Self::new("one-up", move |receiver| match receiver.health() {
            Some(_) => Ok(PowerUpEffect::Heal(heal_amount)),
            None => Err(PowerUpError::MissingCapability {
                collectible: "one-up",
                capability: "health",
            }),
        })
    }

    /// Refills the receiver's weapon, if it has one.
    pub fn ammo_crate() -> Self {
        Self::new("ammo-crate", |_| Ok(PowerUpEffect::ReloadWeapon))
    }

    pub fn ability_orb(ability: AbilityDescriptor) -> Self {
        Self::new("ability-orb", move |_| Ok(PowerUpEffect::GrantAbility(ability)))
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Contact always consumes the collectible, whether or not an effect lands.
    pub fn on_contact(
        &mut self,
        receiver: &mut dyn PowerUpReceiver,
    ) -> Result<ContactOutcome, PowerUpError> {
        if !self.active {
            return Ok(ContactOutcome::AlreadyConsumed);
        }
        self.active = false;

        if !receiver.can_receive_power_ups() {
            return Ok(ContactOutcome::Ineligible);
        }

        let effect = (self.factory)(&mut *receiver)?;
        let outcome = receiver.apply(&effect);
        Ok(ContactOutcome::Applied { effect, outcome })
    }
}
