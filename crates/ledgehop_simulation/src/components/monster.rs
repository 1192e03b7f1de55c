//! Monster: мишень для оружия игрока (AI нет)

use bevy::prelude::*;

use super::{Body, PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::geometry::Aabb;

/// Монстр
///
/// `alive` читает рендер; попадание оружия ставит `false`,
/// после чего `despawn_slain_monsters` удаляет entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Monster {
    pub alive: bool,
}

impl Default for Monster {
    fn default() -> Self {
        Self { alive: true }
    }
}

/// Spawn helper: монстр того же размера что и игрок
pub fn spawn_monster(commands: &mut Commands, x: f32, y: f32) -> Entity {
    commands
        .spawn((
            Monster::default(),
            Body::new(Aabb::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT)),
        ))
        .id()
}
