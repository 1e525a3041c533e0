//! Projectiles plugin: **pooled lifecycle** + **builder/director/factory** construction,
//! wired through a message-based producer → consumer pipeline.
//!
//! # Ownership
//! A `ProjectileHandle` is a move-only value. While Idle it lives in
//! `ProjectilePool::idle`; while InFlight it lives inside exactly one
//! `ProjectileLifecycle` component. Double acquisition and double release are
//! therefore structural impossibilities for safe callers; the pool still checks
//! every release against its own Idle/InFlight record.
//!
//! # Data flow (big picture)
//! ```text
//!   Update schedule (variable dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) Producers: request_player_fire, enemies::turret_fire                  │
//!│      - writes: FireRequest message                                         │
//!│                                                                            │
//!│  (B) Consumer: allocate_projectiles                                        │
//!│      - ProjectileFactory::create  (ProjectilePool::acquire + recipe)       │
//!│      - ProjectileLifecycle::arm + fire                                     │
//!│      - spawns an entity for handles that have none yet                     │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!FixedUpdate / FixedPostUpdate (fixed dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (C) advance_projectiles: Movement -> LinearVelocity                       │
//!│  (D) expire_projectiles: Timeout / OutOfBounds -> TerminalCondition        │
//!│  (E) process_projectile_collisions: Impact -> damage + TerminalCondition   │
//!│  (F) return_or_destroy_commit                                              │
//!│      - ProjectileLifecycle::return_or_destroy(pool)                        │
//!│      - Returned: park the entity; Destroyed: despawn it                    │
//!└────────────────────────────────────────────────────────────────────────────┘
//!
//! Feedback loop:
//!   commit releases the handle into ProjectilePool
//!   the factory acquires it again on the next FireRequest
//! ```

pub mod components;
pub mod error;
pub mod handle;
pub mod pool;

// construction
pub mod factory;
pub mod lifecycle;
pub mod recipe;

// message-based pipeline
pub mod messages;
pub mod request;
pub mod allocator;
pub mod flight;
pub mod collision;
pub mod commit;

use bevy::prelude::*;
use avian2d::collision::narrow_phase::CollisionEventSystems;

use crate::common::state::GameState;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        // Pool sized from Tunables::pool; pre-warmed entities are spawned at startup.
        app.init_resource::<pool::ProjectilePool>()
            .add_message::<messages::FireRequest>()
            .add_message::<messages::TerminalCondition>()
            .add_systems(Startup, pool::init_projectile_pool);

        // Update-phase pipeline: request -> allocate
        app.add_systems(
            Update,
            (
                request::request_player_fire,
                allocator::allocate_projectiles.after(request::request_player_fire),
            )
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            (flight::advance_projectiles, flight::expire_projectiles)
                .run_if(in_state(GameState::InGame)),
        );

        // Fixed collision pipeline
        app.add_systems(
            FixedPostUpdate,
            collision::process_projectile_collisions
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedPostUpdate,
            commit::return_or_destroy_commit
                .after(collision::process_projectile_collisions)
                .run_if(in_state(GameState::InGame)),
        );
    }
}
