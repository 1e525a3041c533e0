//! Buffered projectile messages.
//!
//! Producers (player input, enemy turrets) only write `FireRequest`; the allocator
//! is the single writer that acquires from the pool. Collision and timeout
//! systems only write `TerminalCondition`; the commit system is the single place
//! that retires a flight.

use bevy::prelude::*;

use super::recipe::Preset;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileOwner {
    /// Player lasers are drawn from the pool.
    Player,
    /// Enemy shots are built unpooled and destroyed when they end.
    Enemy,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct FireRequest {
    pub owner: ProjectileOwner,
    pub preset: Preset,
    pub origin: Vec2,
    pub direction: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalCause {
    Impact,
    Timeout,
    OutOfBounds,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct TerminalCondition {
    pub projectile: Entity,
    pub cause: TerminalCause,
}
