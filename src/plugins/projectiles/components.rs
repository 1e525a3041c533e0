use bevy::prelude::*;

/// Time left before an in-flight projectile times out.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct ProjectileLifetime(pub Timer);

impl Default for ProjectileLifetime {
    fn default() -> Self {
        Self(Timer::from_seconds(0.0, TimerMode::Once))
    }
}

impl ProjectileLifetime {
    #[inline]
    pub fn restart(&mut self, secs: f32) {
        self.0 = Timer::from_seconds(secs, TimerMode::Once);
    }
}
