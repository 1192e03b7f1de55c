//! Axis-aligned геометрия
//!
//! Экранные координаты: `y` растёт вниз, поэтому `top() <= bottom()`.

pub mod rect;

pub use rect::{colliding, Aabb};
