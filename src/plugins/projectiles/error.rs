//! Lifecycle and pool errors.
//!
//! Both are caller bugs. They are returned, never retried, and the ECS systems
//! forward them to Bevy's error handler with `?`.

use thiserror::Error;

use super::handle::{HandleId, PoolId};
use super::lifecycle::LifecycleState;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseRejection {
    #[error("handle is not bound to any pool")]
    Detached,
    #[error("handle {0} belongs to another pool")]
    ForeignPool(HandleId),
    #[error("handle {0} is not in flight")]
    NotInFlight(HandleId),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    #[error("invalid release into {pool}: {reason}")]
    InvalidRelease {
        pool: PoolId,
        reason: ReleaseRejection,
    },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("invalid transition: cannot {op} a projectile that is {from:?}")]
    InvalidTransition {
        op: &'static str,
        from: LifecycleState,
    },

    #[error("cannot arm a projectile with a handle that is not in flight")]
    HandleNotInFlight,

    #[error(transparent)]
    Pool(#[from] PoolError),
}
