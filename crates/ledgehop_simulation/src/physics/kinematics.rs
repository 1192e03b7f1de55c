//! Kinematic step: интеграция + AABB resolution
//!
//! Порядок за кадр (сохранять, от него зависит ощущение прыжка):
//! 1. next = bounds
//! 2. next.y += vy·dt, ЗАТЕМ vy += G·dt
//! 3. vertical resolution (первое пересечение побеждает)
//! 4. трение (если не зажато направление)
//! 5. next.x += vx·dt
//! 6. horizontal resolution (первое пересечение побеждает)
//! 7. bounds = next
//!
//! `on_ground` сбрасывается в начале каждого шага и детектится заново,
//! поэтому тело, сошедшее с уступа, сразу становится airborne.
//!
//! Все сравнения граней идут с допуском `contact_epsilon`: после snap'а
//! `(top - h) + h` в f32 может оказаться на ulp ниже верхней грани пола,
//! и такой контакт не должен считаться пересечением.

use bevy::prelude::*;

use super::config::PhysicsConfig;
use crate::components::Body;
use crate::level::Level;

/// Что произошло за шаг (для логов и тестов)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Переход airborne → grounded
    pub landed: bool,
    pub hit_ceiling: bool,
    pub hit_wall: bool,
}

/// Один kinematic step тела против уровня
///
/// `dt <= 0` или не-finite (пауза, сбой часов): полный no-op:
/// ни смещения, ни гравитации, ни трения.
pub fn step_body(body: &mut Body, level: &Level, dt: f32, config: &PhysicsConfig) -> StepOutcome {
    let mut outcome = StepOutcome::default();
    if !dt.is_finite() || dt <= 0.0 {
        return outcome;
    }

    let was_on_ground = body.on_ground;
    let bounds = body.bounds;
    let mut next = bounds;

    // Vertical: смещение до гравитации
    next.y += body.velocity.y * dt;
    body.velocity.y += config.gravity * dt;

    let eps = config.contact_epsilon;

    body.on_ground = false;
    // Боковой контакт со стеной (перекрытие по X в пределах eps) не опора и не потолок
    if let Some(wall) = level.first_colliding(&next, Vec2::new(eps, 0.0)) {
        // Above считаем по позиции ДО вертикального смещения
        if bounds.above(wall, eps) {
            body.on_ground = true;
            next.y = wall.top() - bounds.height;
        } else {
            next.y = wall.bottom();
            outcome.hit_ceiling = true;
        }
        body.velocity.y = 0.0;
    } else if body.velocity.y >= 0.0 {
        // Касание ребром не пересечение: тело, лежащее ровно на полу,
        // находим отдельной проверкой опоры
        if let Some(floor) = level.resting_support(&next, eps) {
            body.on_ground = true;
            next.y = floor.top() - bounds.height;
            body.velocity.y = 0.0;
        }
    }
    outcome.landed = body.on_ground && !was_on_ground;

    if !body.moving && body.velocity.x != 0.0 {
        body.velocity.x = apply_friction(body.velocity.x, config.friction);
    }

    // Horizontal
    next.x += body.velocity.x * dt;

    // Пол под ногами (перекрытие по Y в пределах eps) сюда не попадает
    if let Some(wall) = level.first_colliding(&next, Vec2::new(0.0, eps)) {
        if bounds.left() >= wall.right() - eps {
            next.x = wall.right();
        } else {
            next.x = wall.left() - bounds.width;
        }
        body.velocity.x = 0.0;
        outcome.hit_wall = true;
    }

    body.bounds = next;
    outcome
}

/// Тянет vx к нулю на `friction`, без перескока через ноль
pub fn apply_friction(vx: f32, friction: f32) -> f32 {
    if vx > 0.0 {
        (vx - friction).max(0.0)
    } else if vx < 0.0 {
        (vx + friction).min(0.0)
    } else {
        0.0
    }
}

/// Система: kinematic step для всех тел
///
/// Работает в FixedUpdate, dt = Time<Fixed>::delta_secs().
pub fn kinematic_step(
    mut bodies: Query<(Entity, &mut Body)>,
    level: Res<Level>,
    config: Res<PhysicsConfig>,
    time: Res<Time<Fixed>>,
) {
    let dt = time.delta_secs();

    for (entity, mut body) in bodies.iter_mut() {
        let outcome = step_body(&mut body, &level, dt, &config);

        if outcome.landed {
            crate::logger::log(&format!(
                "Entity {:?} landed at ({:.1}, {:.1})",
                entity, body.bounds.x, body.bounds.y
            ));
        }
    }
}

/// Plugin: kinematic step в SimulationSet::Kinematics
pub struct KinematicsPlugin;

impl Plugin for KinematicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PhysicsConfig>()
            .add_systems(FixedUpdate, kinematic_step.in_set(crate::SimulationSet::Kinematics));
    }
}
