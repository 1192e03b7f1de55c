//! Physics tunables

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Гравитация (units/sec²), +y вниз
pub const GRAVITY: f32 = 500.0;

/// Трение при отпущенном направлении (units/sec за кадр, НЕ умножается на dt)
pub const FRICTION: f32 = 20.0;

/// Допуск для resting contact (тело стоит ровно на верхней грани стены)
pub const CONTACT_EPSILON: f32 = 1e-3;

/// Параметры kinematic step
///
/// `#[serde(default)]`: внешние данные могут задать только часть полей.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub friction: f32,
    pub contact_epsilon: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            contact_epsilon: CONTACT_EPSILON,
        }
    }
}
