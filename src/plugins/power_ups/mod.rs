//! Power-ups plugin: capability-gated collectibles.
//!
//! ```text
//!   CollisionStart(pickup, actor)
//!        │
//!        v
//!   Collectible::on_contact(receiver)        -- always consumes the pickup
//!        ├─ receiver can't take power-ups  -> Ineligible (no effect built)
//!        └─ factory closure builds one PowerUpEffect
//!             └─ receiver.apply(effect)     -- Reload / Heal / GrantAbility
//! ```
//!
//! Optional collaborators (weapon, ability slot) that are missing turn an effect
//! into a no-op. A missing required one (health for a one-up) is an error raised
//! while building the effect, before anything is applied.

use bevy::prelude::*;

use crate::common::state::GameState;

pub mod capability;
pub mod collectible;
pub mod effect;
pub mod error;
pub mod systems;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), systems::spawn_collectibles)
        .add_systems(
            Update,
            systems::collect_on_contact.run_if(in_state(GameState::InGame)),
        );
}
