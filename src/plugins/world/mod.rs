//! World plugin: spawns the level (ground, platforms, bounding walls).

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::state::GameState;

const HALF_W: f32 = 960.0;
const HALF_H: f32 = 540.0;
const THICKNESS: f32 = 30.0;

/// Floating platforms: (centre, size).
const PLATFORMS: [(Vec2, Vec2); 4] = [
    (Vec2::new(-420.0, -180.0), Vec2::new(220.0, 20.0)),
    (Vec2::new(0.0, -20.0), Vec2::new(260.0, 20.0)),
    (Vec2::new(420.0, 140.0), Vec2::new(220.0, 20.0)),
    (Vec2::new(-300.0, 200.0), Vec2::new(180.0, 20.0)),
];

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_level);
}

#[inline]
fn solid_layers() -> CollisionLayers {
    CollisionLayers::new(
        Layer::World,
        [
            Layer::Player,
            Layer::Enemy,
            Layer::PlayerProjectile,
            Layer::EnemyProjectile,
        ],
    )
}

fn spawn_level(mut commands: Commands) {
    let wall_color = Color::srgb(0.25, 0.27, 0.33);
    let platform_color = Color::srgb(0.32, 0.3, 0.26);

    let mut spawn_solid = |name: String, pos: Vec2, size: Vec2, color: Color| {
        commands.spawn((
            Name::new(name),
            Sprite::from_color(color, size),
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            solid_layers(),
            DespawnOnExit(GameState::InGame),
        ));
    };

    let span = HALF_W * 2.0 + THICKNESS * 2.0;
    spawn_solid("Ground".into(), Vec2::new(0.0, -HALF_H + THICKNESS * 0.5), Vec2::new(span, THICKNESS), wall_color);
    spawn_solid("WallLeft".into(), Vec2::new(-HALF_W - THICKNESS * 0.5, 0.0), Vec2::new(THICKNESS, HALF_H * 2.0), wall_color);
    spawn_solid("WallRight".into(), Vec2::new(HALF_W + THICKNESS * 0.5, 0.0), Vec2::new(THICKNESS, HALF_H * 2.0), wall_color);

    PLATFORMS
        .iter()
        .enumerate()
        .for_each(|(i, &(pos, size))| spawn_solid(format!("Platform{i}"), pos, size, platform_color));
}
