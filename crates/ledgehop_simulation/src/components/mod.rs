//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - body: кинематическое тело (bounds, velocity, ground state, facing)
//! - player: player control marker + spawn helper
//! - monster: монстр (alive flag) + spawn helper

pub mod body;
pub mod monster;
pub mod player;

// Re-exports для удобного импорта
pub use body::*;
pub use monster::*;
pub use player::*;
