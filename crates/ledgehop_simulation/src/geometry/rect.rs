//! AABB value type + предикат пересечения

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aabb
// ============================================================================

/// Прямоугольник без вращения (world units)
///
/// Инвариант: `width >= 0 && height >= 0` (см. [`Aabb::is_valid`]).
/// Level валидируется при загрузке, размер тела не меняется после спавна.
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    /// Нулевой прямоугольник в начале координат (hitbox без атаки)
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// `self` целиком над `other`: нижняя грань не ниже верхней грани other
    ///
    /// `epsilon` поглощает ошибку округления после snap'а
    /// (`(top - h) + h` в f32 может дать top + 1 ulp). 0 — строгое сравнение.
    #[inline]
    pub fn above(&self, other: &Aabb, epsilon: f32) -> bool {
        self.bottom() <= other.top() + epsilon
    }

    /// Глубина перекрытия по X и по Y (<= 0, если по оси перекрытия нет)
    #[inline]
    pub fn overlap_depth(&self, other: &Aabb) -> Vec2 {
        Vec2::new(
            self.right().min(other.right()) - self.left().max(other.left()),
            self.bottom().min(other.bottom()) - self.top().max(other.top()),
        )
    }

    /// Перекрытие глубже `tolerance.x` по X и глубже `tolerance.y` по Y
    ///
    /// Контакт в пределах допуска (тело стоит на полу или прижато к стене)
    /// не считается проникновением. С `Vec2::ZERO` для непустых прямоугольников
    /// совпадает с [`colliding`].
    #[inline]
    pub fn penetrates(&self, other: &Aabb, tolerance: Vec2) -> bool {
        let depth = self.overlap_depth(other);
        depth.x > tolerance.x && depth.y > tolerance.y
    }

    /// Строгое перекрытие только по горизонтали
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        other.right() > self.left() && self.right() > other.left()
    }

    /// Конечные координаты и неотрицательный размер
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

/// Попарный AABB тест
///
/// True только если открытые внутренности пересекаются по обеим осям.
/// Касание ребром НЕ пересечение: тело лежит на полу, не выталкиваясь.
#[inline]
pub fn colliding(a: &Aabb, b: &Aabb) -> bool {
    b.right() > a.left() && b.bottom() > a.top() && a.right() > b.left() && a.bottom() > b.top()
}
