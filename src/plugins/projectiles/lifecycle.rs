//! Per-projectile state machine.
//!
//! ```text
//!   Idle ──arm──> InFlight ──return_or_destroy──> Returned ──arm──> InFlight ...
//!                  │  ^                     └───> Destroyed (terminal)
//!                  └──┘ fire
//! ```
//!
//! Every transition from the wrong state is an `InvalidTransition`. Those are
//! caller bugs; masking them would corrupt pool accounting.

use std::fmt;

use bevy::prelude::*;

use super::error::LifecycleError;
use super::handle::{HandleState, ProjectileConfig, ProjectileHandle};
use super::pool::ProjectilePool;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LifecycleState {
    #[default]
    Idle,
    InFlight,
    Returned,
    Destroyed,
}

/// How a fired projectile moves. Speed is in meters per second.
pub trait Movement: Send + Sync + 'static {
    fn velocity(&self, speed: f32) -> Vec2;

    /// Position delta over one tick of `dt` seconds.
    fn delta(&self, speed: f32, dt: f32) -> Vec2 {
        self.velocity(speed) * dt
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StraightLine {
    direction: Vec2,
}

impl StraightLine {
    /// A zero direction falls back to +X.
    pub fn new(direction: Vec2) -> Self {
        Self {
            direction: direction.try_normalize().unwrap_or(Vec2::X),
        }
    }
}

impl Movement for StraightLine {
    fn velocity(&self, speed: f32) -> Vec2 {
        self.direction * speed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireOutcome {
    Moving,
    /// No movement strategy is set. The shot still counts as fired.
    Stationary,
}

#[derive(Component, Default)]
pub struct ProjectileLifecycle {
    state: LifecycleState,
    handle: Option<ProjectileHandle>,
    movement: Option<Box<dyn Movement>>,
    fired: bool,
}

impl fmt::Debug for ProjectileLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectileLifecycle")
            .field("state", &self.state)
            .field("handle", &self.handle)
            .field("has_movement", &self.movement.is_some())
            .field("fired", &self.fired)
            .finish()
    }
}

impl ProjectileLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movement(movement: impl Movement) -> Self {
        Self {
            movement: Some(Box::new(movement)),
            ..Self::default()
        }
    }

    pub fn set_movement(&mut self, movement: impl Movement) {
        self.movement = Some(Box::new(movement));
    }

    pub fn clear_movement(&mut self) {
        self.movement = None;
    }

    #[inline]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    #[inline]
    pub fn is_in_flight(&self) -> bool {
        self.state == LifecycleState::InFlight
    }

    #[inline]
    pub fn handle(&self) -> Option<&ProjectileHandle> {
        self.handle.as_ref()
    }

    /// Configuration of the current flight.
    #[inline]
    pub fn config(&self) -> Option<&ProjectileConfig> {
        self.handle.as_ref().map(ProjectileHandle::config)
    }

    /// Take ownership of a configured handle from the factory.
    pub fn arm(&mut self, handle: ProjectileHandle) -> Result<(), LifecycleError> {
        match self.state {
            LifecycleState::Idle | LifecycleState::Returned => {}
            from => return Err(LifecycleError::InvalidTransition { op: "arm", from }),
        }
        if handle.state() != HandleState::InFlight {
            return Err(LifecycleError::HandleNotInFlight);
        }

        self.handle = Some(handle);
        self.state = LifecycleState::InFlight;
        self.fired = false;
        Ok(())
    }

    pub fn fire(&mut self) -> Result<FireOutcome, LifecycleError> {
        if self.state != LifecycleState::InFlight {
            return Err(LifecycleError::InvalidTransition {
                op: "fire",
                from: self.state,
            });
        }

        self.fired = true;
        if self.movement.is_none() {
            debug!("Fired projectile without a movement strategy");
            return Ok(FireOutcome::Stationary);
        }
        Ok(FireOutcome::Moving)
    }

    /// Current velocity, or `None` unless fired, in flight and movable.
    pub fn velocity(&self) -> Option<Vec2> {
        if !self.fired || !self.is_in_flight() {
            return None;
        }
        let speed = self.config()?.speed;
        Some(self.movement.as_ref()?.velocity(speed))
    }

    /// End the flight: recycle the handle if it came from `pool`, otherwise
    /// destroy it for good.
    pub fn return_or_destroy(
        &mut self,
        pool: Option<&mut ProjectilePool>,
    ) -> Result<LifecycleState, LifecycleError> {
        if self.state != LifecycleState::InFlight {
            return Err(LifecycleError::InvalidTransition {
                op: "return_or_destroy",
                from: self.state,
            });
        }
        let Some(mut handle) = self.handle.take() else {
            return Err(LifecycleError::HandleNotInFlight);
        };

        handle.reset_config();
        self.fired = false;

        self.state = match pool {
            Some(pool) if handle.is_pooled() => {
                pool.release(handle)?;
                LifecycleState::Returned
            }
            _ => {
                if handle.is_pooled() {
                    warn!("No pool bound for {:?}; destroying it", handle.id());
                }
                LifecycleState::Destroyed
            }
        };
        Ok(self.state)
    }
}
