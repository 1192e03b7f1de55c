//! Level: упорядоченный набор статических препятствий (стен)
//!
//! Владелец: сцена (Resource). Во время симуляции только читается.
//! Порядок элементов важен: при нескольких пересечениях побеждает
//! первое по порядку препятствие.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Aabb;

/// Размер тестовой арены (world units)
pub const ARENA_WIDTH: f32 = 1200.0;
pub const ARENA_HEIGHT: f32 = 900.0;
pub const WALL_THICKNESS: f32 = 5.0;

/// Ошибки загрузки уровня из внешних данных
#[derive(Debug, Error, PartialEq)]
pub enum LevelError {
    #[error("obstacle #{index} has negative size ({width} x {height})")]
    NegativeSize { index: usize, width: f32, height: f32 },

    #[error("obstacle #{index} has non-finite coordinates")]
    NonFinite { index: usize },
}

/// Набор препятствий уровня
///
/// Пустой уровень валиден: тела просто падают бесконечно.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Aabb>", into = "Vec<Aabb>")]
pub struct Level {
    obstacles: Vec<Aabb>,
}

impl Level {
    /// Создать уровень с валидацией каждого прямоугольника
    pub fn new(obstacles: Vec<Aabb>) -> Result<Self, LevelError> {
        if let Err(err) = validate(&obstacles) {
            crate::logger::log_warning(&format!("Rejected level data: {}", err));
            return Err(err);
        }

        Ok(Self { obstacles })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn obstacles(&self) -> &[Aabb] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Первое (по порядку) препятствие, пересекающее `rect`
    ///
    /// Перекрытие не глубже `tolerance` по какой-либо оси пропускается:
    /// вертикальный проход игнорирует боковой контакт со стеной,
    /// горизонтальный игнорирует пол под ногами. `Vec2::ZERO`: строгий тест.
    pub fn first_colliding(&self, rect: &Aabb, tolerance: Vec2) -> Option<&Aabb> {
        self.obstacles.iter().find(|wall| rect.penetrates(wall, tolerance))
    }

    /// Первое препятствие, на котором `rect` стоит без пересечения:
    /// нижняя грань в пределах `epsilon` от верхней грани стены,
    /// строгое перекрытие по X.
    pub fn resting_support(&self, rect: &Aabb, epsilon: f32) -> Option<&Aabb> {
        self.obstacles
            .iter()
            .find(|wall| rect.overlaps_x(wall) && (wall.top() - rect.bottom()).abs() <= epsilon)
    }
}

impl TryFrom<Vec<Aabb>> for Level {
    type Error = LevelError;

    fn try_from(obstacles: Vec<Aabb>) -> Result<Self, Self::Error> {
        Self::new(obstacles)
    }
}

impl From<Level> for Vec<Aabb> {
    fn from(level: Level) -> Self {
        level.obstacles
    }
}

fn validate(obstacles: &[Aabb]) -> Result<(), LevelError> {
    for (index, rect) in obstacles.iter().enumerate() {
        let finite = rect.x.is_finite()
            && rect.y.is_finite()
            && rect.width.is_finite()
            && rect.height.is_finite();
        if !finite {
            return Err(LevelError::NonFinite { index });
        }
        if rect.width < 0.0 || rect.height < 0.0 {
            return Err(LevelError::NegativeSize {
                index,
                width: rect.width,
                height: rect.height,
            });
        }
    }

    Ok(())
}

/// Четыре граничные стены арены: верх, лево, низ, право
pub fn four_walls(width: f32, height: f32, thickness: f32) -> [Aabb; 4] {
    [
        Aabb::new(0.0, 0.0, width, thickness),
        Aabb::new(0.0, 0.0, thickness, height),
        Aabb::new(0.0, height - thickness, width, thickness),
        Aabb::new(width - thickness, 0.0, thickness, height),
    ]
}

/// Пол тестовой арены
pub fn arena_floor() -> Aabb {
    Aabb::new(0.0, 800.0, ARENA_WIDTH, 100.0)
}

/// Тестовый уровень: стены арены, две платформы, пол
pub fn test_level() -> Level {
    let mut obstacles = four_walls(ARENA_WIDTH, ARENA_HEIGHT, WALL_THICKNESS).to_vec();
    obstacles.push(Aabb::new(0.0, 100.0, 600.0, 100.0));
    obstacles.push(Aabb::new(700.0, 200.0, 500.0, 100.0));
    obstacles.push(arena_floor());

    Level { obstacles }
}
