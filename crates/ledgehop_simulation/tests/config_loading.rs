//! Загрузка tunables и уровня из внешних данных (JSON)
//!
//! Неуказанные поля берутся из Default, невалидный уровень отклоняется.

use ledgehop_simulation::{Aabb, AttackConfig, Level, LevelError, MovementConfig, PhysicsConfig};

#[test]
fn test_partial_physics_config_keeps_defaults() {
    let config: PhysicsConfig = serde_json::from_str(r#"{ "gravity": 980.0 }"#).unwrap();

    assert_eq!(config.gravity, 980.0);
    assert_eq!(config.friction, PhysicsConfig::default().friction);
    assert_eq!(config.contact_epsilon, PhysicsConfig::default().contact_epsilon);
}

#[test]
fn test_movement_config_air_control() {
    let config: MovementConfig = serde_json::from_str(r#"{ "air_control": true }"#).unwrap();

    assert!(config.air_control);
    assert_eq!(config.horizontal_accel, 30.0);
    assert_eq!(config.jump_impulse, 325.0);
}

#[test]
fn test_attack_config_from_json() {
    let config: AttackConfig = serde_json::from_str(r#"{ "active_frames": 30, "weapon_width": 80.0 }"#).unwrap();

    assert_eq!(config.active_frames, 30);
    assert_eq!(config.weapon_width, 80.0);
    assert_eq!(config.weapon_height, 5.0);
}

#[test]
fn test_empty_object_is_default() {
    let physics: PhysicsConfig = serde_json::from_str("{}").unwrap();
    let attack: AttackConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(physics, PhysicsConfig::default());
    assert_eq!(attack, AttackConfig::default());
}

#[test]
fn test_level_from_json_array() {
    let json = r#"[
        { "x": 0.0, "y": 800.0, "width": 1200.0, "height": 100.0 },
        { "x": 700.0, "y": 200.0, "width": 500.0, "height": 100.0 }
    ]"#;

    let level: Level = serde_json::from_str(json).unwrap();

    assert_eq!(level.len(), 2);
    assert_eq!(level.obstacles()[0], Aabb::new(0.0, 800.0, 1200.0, 100.0));
    assert_eq!(level.obstacles()[1], Aabb::new(700.0, 200.0, 500.0, 100.0));
}

#[test]
fn test_level_with_negative_width_is_rejected() {
    let json = r#"[
        { "x": 0.0, "y": 800.0, "width": 1200.0, "height": 100.0 },
        { "x": 10.0, "y": 10.0, "width": -5.0, "height": 10.0 }
    ]"#;

    let err = serde_json::from_str::<Level>(json).unwrap_err();
    assert!(err.to_string().contains("obstacle #1"), "unexpected error: {}", err);

    let direct = Level::new(vec![Aabb::new(10.0, 10.0, -5.0, 10.0)]).unwrap_err();
    assert!(matches!(direct, LevelError::NegativeSize { index: 0, .. }));
}

#[test]
fn test_level_round_trips_through_json() {
    let level = ledgehop_simulation::test_level();

    let json = serde_json::to_string(&level).unwrap();
    let restored: Level = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, level);
}
