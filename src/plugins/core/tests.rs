use bevy::prelude::*;
use crate::plugins::core;
use crate::common::tunables::{GrowthPolicy, Tunables};

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn keeps_preinserted_tunables() {
    let mut app = App::new();
    app.insert_resource(Tunables { player_speed: 1.0, ..default() });
    core::plugin(&mut app);
    assert_eq!(app.world().resource::<Tunables>().player_speed, 1.0);
}

#[test]
fn tunables_default_pool_is_cold_and_unbounded() {
    let t = Tunables::default();
    assert_eq!(t.pool.prewarm_count, 0);
    assert_eq!(t.pool.growth_policy, GrowthPolicy::Unbounded);
}

#[test]
fn partial_ron_overrides_only_named_fields() {
    let t = Tunables::from_ron_str("(player_speed: 200.0, pool: (prewarm_count: 8))")
        .expect("valid tunables");
    assert_eq!(t.player_speed, 200.0);
    assert_eq!(t.pool.prewarm_count, 8);
    assert_eq!(t.jump_speed, Tunables::default().jump_speed);
}

#[test]
fn malformed_ron_is_a_parse_error() {
    let err = Tunables::from_ron_str("(player_speed: \"fast\")").unwrap_err();
    assert!(matches!(err, crate::common::tunables::ConfigError::Parse(_)));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let t = Tunables::load_or_default("does/not/exist.ron");
    assert_eq!(t, Tunables::default());
}
