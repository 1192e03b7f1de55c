//! AttackState component
//!
//! Одиночный удар ближнего боя, живёт пока идёт countdown "active frames".

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{Body, Facing};
use crate::geometry::Aabb;

// ============================================================================
// Tunables
// ============================================================================

/// Сколько кадров удар активен после команды атаки
pub const ATTACK_FRAMES: u32 = 15;

pub const WEAPON_WIDTH: f32 = 50.0;
pub const WEAPON_HEIGHT: f32 = 5.0;
/// Смещение клинка от верхней грани тела
pub const WEAPON_OFFSET_Y: f32 = 25.0;

/// Параметры оружия и удара
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct AttackConfig {
    pub active_frames: u32,
    pub weapon_width: f32,
    pub weapon_height: f32,
    pub weapon_offset_y: f32,
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            active_frames: ATTACK_FRAMES,
            weapon_width: WEAPON_WIDTH,
            weapon_height: WEAPON_HEIGHT,
            weapon_offset_y: WEAPON_OFFSET_Y,
        }
    }
}

// ============================================================================
// Attack State Component
// ============================================================================

/// Текущий удар
///
/// `aframes` уменьшается раз в кадр пока > 0. Hitbox оружия существует только
/// при ненулевом счётчике; на нуле состояние сбрасывается и можно бить снова.
/// Повторная атака посреди удара игнорируется.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct AttackState {
    /// Пока true, facing заморожен
    pub attacking: bool,
    /// Оставшиеся активные кадры
    pub aframes: u32,
    /// Временный hitbox, `Aabb::ZERO` вне удара
    pub weapon: Aabb,
}

impl AttackState {
    /// Начать удар. false (и ничего не делает), если удар уже идёт
    pub fn initiate(&mut self, active_frames: u32) -> bool {
        if self.aframes != 0 {
            return false;
        }
        self.aframes = active_frames;
        self.attacking = true;
        true
    }

    /// Hitbox активен в этом кадре
    pub fn is_active(&self) -> bool {
        self.aframes > 0
    }

    /// Один кадр: countdown, hitbox рядом с телом, reset на нуле
    pub fn tick(&mut self, body: &Body, config: &AttackConfig) {
        if self.aframes > 0 {
            self.aframes -= 1;
            self.weapon = weapon_hitbox(&body.bounds, body.facing, config);
        }

        if self.aframes == 0 {
            self.attacking = false;
            self.weapon = Aabb::ZERO;
        }
    }
}

/// Прямоугольник клинка для тела, смотрящего в `facing`
///
/// Тонкая горизонтальная полоса на `weapon_offset_y` ниже верха тела,
/// вплотную к левой или правой грани.
pub fn weapon_hitbox(bounds: &Aabb, facing: Facing, config: &AttackConfig) -> Aabb {
    let x = match facing {
        Facing::Left => bounds.left() - config.weapon_width,
        Facing::Right => bounds.right(),
    };

    Aabb::new(x, bounds.y + config.weapon_offset_y, config.weapon_width, config.weapon_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_body(facing: Facing) -> Body {
        let mut body = Body::new(Aabb::new(100.0, 740.0, 20.0, 60.0));
        body.facing = facing;
        body
    }

    #[test]
    fn test_initiate_only_when_idle() {
        let mut attack = AttackState::default();

        assert!(attack.initiate(ATTACK_FRAMES));
        assert!(attack.attacking);
        assert_eq!(attack.aframes, 15);

        // Mid-swing: игнорируется
        attack.aframes = 3;
        assert!(!attack.initiate(ATTACK_FRAMES));
        assert_eq!(attack.aframes, 3);
    }

    #[test]
    fn test_hitbox_placement() {
        let config = AttackConfig::default();

        let left = weapon_hitbox(&player_body(Facing::Left).bounds, Facing::Left, &config);
        assert_eq!(left, Aabb::new(50.0, 765.0, 50.0, 5.0));

        let right = weapon_hitbox(&player_body(Facing::Right).bounds, Facing::Right, &config);
        assert_eq!(right, Aabb::new(120.0, 765.0, 50.0, 5.0));
    }

    #[test]
    fn test_swing_lifecycle() {
        let config = AttackConfig::default();
        let body = player_body(Facing::Right);
        let mut attack = AttackState::default();
        attack.initiate(config.active_frames);

        // 15 кадров → 14 кадров с живым hitbox'ом, на 15-м reset
        let mut active_frames = 0;
        for _ in 0..15 {
            attack.tick(&body, &config);
            if attack.is_active() {
                active_frames += 1;
                assert!(attack.attacking);
                assert_eq!(attack.weapon.width, 50.0);
            }
        }

        assert_eq!(active_frames, 14);
        assert!(!attack.attacking);
        assert_eq!(attack.weapon, Aabb::ZERO);
        assert!(attack.initiate(config.active_frames));
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let mut attack = AttackState::default();
        attack.tick(&player_body(Facing::Left), &AttackConfig::default());
        assert_eq!(attack, AttackState::default());
    }
}
