//! Tunable gameplay constants.
//!
//! Defaults are compiled in. A RON file can override any subset of fields:
//!
//! ```ron
//! (
//!     player_speed: 380.0,
//!     pool: (prewarm_count: 32),
//! )
//! ```

use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Where the core plugin looks for overrides.
pub const TUNABLES_PATH: &str = "assets/tunables.ron";

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    pub jump_speed: f32,
    pub gravity: f32,
    /// Seconds before an in-flight projectile times out.
    pub projectile_lifetime_secs: f32,
    /// Projectiles leaving this box are retired as out of bounds.
    pub arena_half_width: f32,
    pub arena_half_height: f32,
    pub enemy_fire_interval_secs: f32,
    pub pool: PoolConfig,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 320.0,
            jump_speed: 620.0,
            gravity: 1500.0,
            projectile_lifetime_secs: 2.5,
            arena_half_width: 1024.0,
            arena_half_height: 576.0,
            enemy_fire_interval_secs: 2.0,
            pool: PoolConfig::default(),
        }
    }
}

/// How a pool may grow once its idle handles run out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum GrowthPolicy {
    /// Create a new handle on every empty acquire.
    #[default]
    Unbounded,
}

/// Projectile pool configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Handles created up front, before the first acquire.
    pub prewarm_count: usize,
    pub growth_policy: GrowthPolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tunables: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tunables: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

impl Tunables {
    pub fn from_ron_str(src: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(src)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let src = std::fs::read_to_string(path)?;
        Self::from_ron_str(&src)
    }

    /// Load overrides from `path`, falling back to defaults.
    ///
    /// A missing file is normal; a malformed one is logged and ignored.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No tunables file at {}; using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(tunables) => {
                info!("Loaded tunables from {}", path.display());
                tunables
            }
            Err(e) => {
                warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
