//! Combat module: атака игрока
//!
//! - AttackState: countdown активных кадров + hitbox оружия
//! - resolve_weapon_hits: hitbox против монстров (одноразовый overlap test)
//! - despawn_slain_monsters: удаление мертвых
//!
//! Body-vs-body resolution здесь нет: удар только выключает alive.

use bevy::prelude::*;

pub mod attack;
pub mod hits;

// Re-export основных типов
pub use attack::{weapon_hitbox, AttackConfig, AttackState, ATTACK_FRAMES};
pub use hits::{despawn_slain_monsters, resolve_weapon_hits, tick_attacks, MonsterSlain};

/// Combat Plugin
///
/// Порядок выполнения (SimulationSet::Combat):
/// 1. tick_attacks — countdown + hitbox рядом с телом
/// 2. resolve_weapon_hits — попадания → MonsterSlain
/// 3. despawn_slain_monsters — удаление
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AttackConfig>()
            .add_event::<MonsterSlain>()
            .add_systems(
                FixedUpdate,
                (tick_attacks, resolve_weapon_hits, despawn_slain_monsters)
                    .chain()
                    .in_set(crate::SimulationSet::Combat),
            );
    }
}
