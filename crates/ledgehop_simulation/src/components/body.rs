//! Кинематическое тело: прямоугольник + скорость + состояние опоры

use bevy::prelude::*;

use crate::geometry::Aabb;

/// Максимальная горизонтальная скорость по умолчанию (units/sec)
pub const DEFAULT_MAX_SPEED: f32 = 200.0;

/// Стартовое здоровье (физика его не читает)
pub const DEFAULT_HEALTH: i32 = 100;

/// Направление взгляда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

impl Facing {
    /// Знак направления по оси X (-1 влево, +1 вправо)
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Тело игрока или монстра
///
/// Мутируется каждый кадр intent mapping'ом и kinematic step'ом.
/// Не шарится между entity: каждое тело резолвится только против Level.
///
/// Инвариант: размер `bounds` не меняется после спавна.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Body {
    /// Текущий прямоугольник (читает рендер)
    pub bounds: Aabb,
    /// units/sec, +y вниз
    pub velocity: Vec2,
    pub max_speed: f32,
    /// Зажато ли горизонтальное направление (иначе работает трение)
    pub moving: bool,
    /// Пересчитывается каждый kinematic step
    pub on_ground: bool,
    pub facing: Facing,
    pub health: i32,
}

impl Body {
    pub fn new(bounds: Aabb) -> Self {
        Self {
            bounds,
            velocity: Vec2::ZERO,
            max_speed: DEFAULT_MAX_SPEED,
            moving: false,
            on_ground: false,
            facing: Facing::Left,
            health: DEFAULT_HEALTH,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_defaults() {
        let body = Body::new(Aabb::new(10.0, 0.0, 20.0, 60.0));

        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.max_speed, 200.0);
        assert!(!body.moving);
        assert!(!body.on_ground);
        assert_eq!(body.facing, Facing::Left);
        assert_eq!(body.health, 100);
    }

    #[test]
    fn test_facing_sign() {
        assert_eq!(Facing::Left.sign(), -1.0);
        assert_eq!(Facing::Right.sign(), 1.0);
    }
}
