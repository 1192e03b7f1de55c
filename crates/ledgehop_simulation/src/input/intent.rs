//! Intent mapping: команды → скорость тела
//!
//! Выполняется раз в кадр ДО kinematic step.
//! Ускорение и импульс прыжка НЕ умножаются на dt (per-frame константы).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::control::{Control, ControlInput};
use crate::combat::{AttackConfig, AttackState};
use crate::components::{Body, Facing, Player};

/// Горизонтальное ускорение за кадр (units/sec)
pub const HORIZONTAL_ACCEL: f32 = 30.0;

/// Начальная скорость прыжка вверх (units/sec)
pub const JUMP_IMPULSE: f32 = 325.0;

/// Параметры управления
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct MovementConfig {
    pub horizontal_accel: f32,
    pub jump_impulse: f32,
    /// false: горизонтальный intent и прыжок работают только на земле
    pub air_control: bool,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            horizontal_accel: HORIZONTAL_ACCEL,
            jump_impulse: JUMP_IMPULSE,
            air_control: false,
        }
    }
}

/// Результат intent mapping (для логов)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentOutcome {
    pub jumped: bool,
}

/// Применить snapshot команд к телу
///
/// - Jump: только с земли, vy = -jump_impulse, on_ground сбрасывается
/// - Влево/вправо: moving = true, facing меняется (кроме атаки), ускорение с clamp ±max_speed
/// - Отпускание последнего направления: moving = false → дальше работает трение
///
/// Без air_control прыжок и ускорение игнорируются в воздухе;
/// отпускание направления обрабатывается всегда (иначе edge потеряется).
pub fn apply_intent(
    body: &mut Body,
    input: &ControlInput,
    attacking: bool,
    config: &MovementConfig,
) -> IntentOutcome {
    let mut outcome = IntentOutcome::default();

    if body.on_ground || config.air_control {
        if input.is_held(Control::Jump) && body.on_ground {
            body.velocity.y = -config.jump_impulse;
            body.on_ground = false;
            outcome.jumped = true;
        }

        if input.is_held(Control::MoveLeft) {
            steer(body, Facing::Left, attacking, config);
        }
        if input.is_held(Control::MoveRight) {
            steer(body, Facing::Right, attacking, config);
        }
    }

    let released = input.just_released(Control::MoveLeft) || input.just_released(Control::MoveRight);
    if released && !input.any_direction_held() {
        body.moving = false;
    }

    outcome
}

fn steer(body: &mut Body, side: Facing, attacking: bool, config: &MovementConfig) {
    body.moving = true;
    // Во время атаки facing заморожен
    if !attacking {
        body.facing = side;
    }
    body.velocity.x = accelerate(body.velocity.x, side, config.horizontal_accel, body.max_speed);
}

/// Добавить ускорение в сторону `side`, результат в [-max_speed, max_speed]
pub fn accelerate(vx: f32, side: Facing, accel: f32, max_speed: f32) -> f32 {
    (vx + side.sign() * accel).clamp(-max_speed, max_speed)
}

/// Система: intent mapping для игрока + старт атаки по нажатию
pub fn apply_control_intent(
    mut players: Query<(Entity, &mut Body, &ControlInput, &mut AttackState), With<Player>>,
    config: Res<MovementConfig>,
    attack_config: Res<AttackConfig>,
) {
    for (entity, mut body, input, mut attack) in players.iter_mut() {
        let outcome = apply_intent(&mut body, input, attack.attacking, &config);

        if outcome.jumped {
            crate::logger::log(&format!("Player {:?} jumped from y={:.1}", entity, body.bounds.y));
        }

        if input.just_pressed(Control::Attack) && attack.initiate(attack_config.active_frames) {
            crate::logger::log(&format!("Player {:?} attack started ({:?})", entity, body.facing));
        }
    }
}

/// Plugin: intent в SimulationSet::Intent, сброс edges в SimulationSet::Cleanup
pub struct ControlPlugin;

impl Plugin for ControlPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementConfig>()
            .add_systems(FixedUpdate, apply_control_intent.in_set(crate::SimulationSet::Intent))
            .add_systems(
                FixedUpdate,
                super::control::clear_input_edges.in_set(crate::SimulationSet::Cleanup),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Aabb;
    use proptest::prelude::*;

    fn grounded_body() -> Body {
        let mut body = Body::new(Aabb::new(100.0, 740.0, 20.0, 60.0));
        body.on_ground = true;
        body
    }

    fn holding(controls: &[Control]) -> ControlInput {
        let mut input = ControlInput::default();
        for &control in controls {
            input.press(control);
        }
        input
    }

    #[test]
    fn test_jump_from_ground() {
        let mut body = grounded_body();
        let outcome = apply_intent(&mut body, &holding(&[Control::Jump]), false, &MovementConfig::default());

        assert!(outcome.jumped);
        assert_eq!(body.velocity.y, -325.0);
        assert!(!body.on_ground);
    }

    #[test]
    fn test_no_jump_in_air() {
        let mut body = grounded_body();
        body.on_ground = false;

        let config = MovementConfig { air_control: true, ..default() };
        let outcome = apply_intent(&mut body, &holding(&[Control::Jump]), false, &config);

        assert!(!outcome.jumped);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_acceleration_and_facing() {
        let mut body = grounded_body();
        let config = MovementConfig::default();

        apply_intent(&mut body, &holding(&[Control::MoveRight]), false, &config);
        assert!(body.moving);
        assert_eq!(body.facing, Facing::Right);
        assert_eq!(body.velocity.x, 30.0);

        apply_intent(&mut body, &holding(&[Control::MoveLeft]), false, &config);
        assert_eq!(body.facing, Facing::Left);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn test_facing_frozen_while_attacking() {
        let mut body = grounded_body();
        body.facing = Facing::Left;

        apply_intent(&mut body, &holding(&[Control::MoveRight]), true, &MovementConfig::default());

        assert_eq!(body.facing, Facing::Left);
        assert_eq!(body.velocity.x, 30.0); // ускорение всё равно работает
    }

    #[test]
    fn test_max_speed_clamp() {
        let mut body = grounded_body();
        let input = holding(&[Control::MoveRight]);
        let config = MovementConfig::default();

        for _ in 0..20 {
            apply_intent(&mut body, &input, false, &config);
            assert!(body.velocity.x <= body.max_speed);
        }
        assert_eq!(body.velocity.x, 200.0);
    }

    #[test]
    fn test_release_hands_over_to_friction() {
        let mut body = grounded_body();
        let config = MovementConfig::default();
        let mut input = holding(&[Control::MoveLeft]);

        apply_intent(&mut body, &input, false, &config);
        assert!(body.moving);

        input.clear_edges();
        input.release(Control::MoveLeft);
        apply_intent(&mut body, &input, false, &config);
        assert!(!body.moving);
    }

    #[test]
    fn test_release_one_side_while_other_held() {
        let mut body = grounded_body();
        let config = MovementConfig::default();
        let mut input = holding(&[Control::MoveLeft, Control::MoveRight]);
        apply_intent(&mut body, &input, false, &config);

        input.clear_edges();
        input.release(Control::MoveLeft);
        apply_intent(&mut body, &input, false, &config);

        assert!(body.moving);
        assert_eq!(body.facing, Facing::Right);
    }

    #[test]
    fn test_no_air_control_by_default() {
        let mut body = grounded_body();
        body.on_ground = false;
        body.velocity.x = 50.0;

        apply_intent(&mut body, &holding(&[Control::MoveLeft]), false, &MovementConfig::default());

        assert_eq!(body.velocity.x, 50.0);
        assert!(!body.moving);
        assert_eq!(body.facing, Facing::Left); // default, не изменился
    }

    #[test]
    fn test_air_control_option() {
        let mut body = grounded_body();
        body.on_ground = false;

        let config = MovementConfig { air_control: true, ..default() };
        apply_intent(&mut body, &holding(&[Control::MoveRight]), false, &config);

        assert_eq!(body.velocity.x, 30.0);
        assert_eq!(body.facing, Facing::Right);
    }

    #[test]
    fn test_release_in_air_still_clears_moving() {
        let mut body = grounded_body();
        let config = MovementConfig::default();
        let mut input = holding(&[Control::MoveRight]);
        apply_intent(&mut body, &input, false, &config);

        body.on_ground = false;
        input.clear_edges();
        input.release(Control::MoveRight);
        apply_intent(&mut body, &input, false, &config);

        assert!(!body.moving);
    }

    #[test]
    fn test_accelerate_toward_side() {
        assert_eq!(accelerate(0.0, Facing::Right, 30.0, 200.0), 30.0);
        assert_eq!(accelerate(0.0, Facing::Left, 30.0, 200.0), -30.0);
        assert_eq!(accelerate(190.0, Facing::Right, 30.0, 200.0), 200.0);
        assert_eq!(accelerate(-190.0, Facing::Left, 30.0, 200.0), -200.0);
        // Разворот: сначала гасим скорость в противоположную сторону
        assert_eq!(accelerate(200.0, Facing::Left, 30.0, 200.0), 170.0);
    }

    proptest! {
        #[test]
        fn prop_accelerate_never_exceeds_max(
            start in -200.0f32..200.0,
            accel in 0.0f32..100.0,
            right in any::<bool>(),
            frames in 1usize..50,
        ) {
            let side = if right { Facing::Right } else { Facing::Left };
            let mut vx = start;
            for _ in 0..frames {
                vx = accelerate(vx, side, accel, 200.0);
                prop_assert!(vx.abs() <= 200.0);
            }
        }
    }
}
