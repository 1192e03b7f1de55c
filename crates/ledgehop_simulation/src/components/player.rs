//! Player control marker component
//!
//! Отмечает entity которым управляет внешний input (клавиатура или autopilot).

use bevy::prelude::*;

use super::Body;
use crate::combat::AttackState;
use crate::geometry::Aabb;
use crate::input::ControlInput;

pub const PLAYER_WIDTH: f32 = 20.0;
pub const PLAYER_HEIGHT: f32 = 60.0;

/// Marker component для player-controlled entity
///
/// Required Components: `ControlInput` (snapshot команд) и `AttackState`
/// (оружие), так что intent и combat системы видят игрока сразу после spawn.
///
/// # Архитектурная заметка
/// - Intent/attack системы используют `With<Player>` filter
/// - Монстры управляются только физикой (AI нет)
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(ControlInput, AttackState)]
pub struct Player;

/// Spawn helper: игрок стандартного размера в точке (x, y), левый верхний угол
pub fn spawn_player(commands: &mut Commands, x: f32, y: f32) -> Entity {
    commands
        .spawn((
            Player,
            Body::new(Aabb::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT)),
        ))
        .id()
}
