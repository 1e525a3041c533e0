//! Camera plugin (render-only).
//!
//! A side-scrolling follow camera. Horizontal tracking is tighter than vertical
//! so jumps don't jerk the view.
//!
//! B0001: a system cannot hold `Query<&Transform>` and `Query<&mut Transform>` unless
//! Bevy can prove them disjoint, so both queries carry `With`/`Without` filters.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::player::Player;

#[derive(Component)]
pub struct MainCamera {
    pub horizontal_responsiveness: f32,
    pub vertical_responsiveness: f32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            follow_player
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera {
            horizontal_responsiveness: 6.0,
            vertical_responsiveness: 2.5,
        },
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}

/// Frame-rate independent exponential smoothing factor.
#[inline]
fn smoothing(responsiveness: f32, dt: f32) -> f32 {
    1.0 - (-responsiveness * dt).exp()
}

fn follow_player(
    time: Res<Time>,
    q_player: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut q_cam: Query<(&mut Transform, &MainCamera), Without<Player>>,
) {
    let Ok(tf_player) = q_player.single() else { return; };
    let Ok((mut tf_cam, cam)) = q_cam.single_mut() else { return; };

    let dt = time.delta_secs();
    let ax = smoothing(cam.horizontal_responsiveness, dt);
    let ay = smoothing(cam.vertical_responsiveness, dt);

    tf_cam.translation.x += (tf_player.translation.x - tf_cam.translation.x) * ax;
    tf_cam.translation.y += (tf_player.translation.y - tf_cam.translation.y) * ay;
}
