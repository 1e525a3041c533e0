use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::actor::{AbilityDescriptor, ActiveAbility, CanReceivePowerUps, Health, Weapon};
use crate::common::layers::Layer;
use crate::common::state::GameState;

use super::capability::ReceiverView;
use super::collectible::{Collectible, ContactOutcome};

/// Pickup placement for the level: (collectible, position, colour).
fn level_pickups() -> Vec<(Collectible, Vec2, Color)> {
    vec![
        (Collectible::one_up(1), Vec2::new(-420.0, -120.0), Color::srgb(0.35, 0.95, 0.4)),
        (Collectible::ammo_crate(), Vec2::new(0.0, 40.0), Color::srgb(0.95, 0.8, 0.3)),
        (
            Collectible::ability_orb(AbilityDescriptor::DoubleJump),
            Vec2::new(420.0, 200.0),
            Color::srgb(0.7, 0.45, 1.0),
        ),
        (
            Collectible::ability_orb(AbilityDescriptor::Dash { speed: 900.0 }),
            Vec2::new(-300.0, 260.0),
            Color::srgb(0.4, 0.6, 1.0),
        ),
    ]
}

pub fn spawn_collectibles(mut commands: Commands) {
    // Pickups only ever report contacts with the player.
    let layers = CollisionLayers::new(Layer::Pickup, [Layer::Player]);

    for (collectible, pos, color) in level_pickups() {
        commands.spawn((
            Name::new(format!("Pickup({})", collectible.name())),
            collectible,
            Sprite {
                color,
                custom_size: Some(Vec2::splat(18.0)),
                ..default()
            },
            Transform::from_translation(pos.extend(1.5)),
            RigidBody::Static,
            Collider::circle(9.0),
            Sensor,
            layers,
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

/// Hand power-ups to actors that touch a collectible.
///
/// Any entity can touch a pickup. One without `CanReceivePowerUps` is seen as
/// ineligible, so the pickup is consumed without an effect.
///
/// A configuration error from the collectible is returned after the pickup has
/// been queued for despawn: contact always consumes it.
pub fn collect_on_contact(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    mut q_collectibles: Query<&mut Collectible>,
    mut q_receivers: Query<
        (
            Option<&CanReceivePowerUps>,
            Option<&mut Health>,
            Option<&mut Weapon>,
            Option<&mut ActiveAbility>,
        ),
        Without<Collectible>,
    >,
) -> Result {
    for ev in started.read() {
        let (pickup, actor) = if q_collectibles.contains(ev.collider1) {
            (ev.collider1, ev.body2.unwrap_or(ev.collider2))
        } else if q_collectibles.contains(ev.collider2) {
            (ev.collider2, ev.body1.unwrap_or(ev.collider1))
        } else {
            continue;
        };

        let Ok((eligible, health, weapon, ability)) = q_receivers.get_mut(actor) else {
            continue;
        };
        let Ok(mut collectible) = q_collectibles.get_mut(pickup) else {
            continue;
        };

        let mut receiver = ReceiverView {
            eligible: eligible.is_some_and(|c| c.0),
            health,
            weapon,
            ability,
        };

        let outcome = collectible.on_contact(&mut receiver);
        if outcome != Ok(ContactOutcome::AlreadyConsumed) {
            commands.entity(pickup).despawn();
        }

        match outcome? {
            ContactOutcome::AlreadyConsumed => {}
            ContactOutcome::Ineligible => {
                debug!("{actor:?} can't take power-ups; {} consumed", collectible.name());
            }
            ContactOutcome::Applied { effect, outcome } => {
                info!("{actor:?} picked up {}: {effect:?} -> {outcome:?}", collectible.name());
            }
        }
    }
    Ok(())
}
