//! Weapon hit detection система
//!
//! Одноразовая проверка пересечения: hitbox оружия против bounds монстров.
//! Не участвует в resolution, только ставит alive = false.

use bevy::prelude::*;

use super::attack::{AttackConfig, AttackState};
use crate::components::{Body, Monster, Player};
use crate::geometry::colliding;

/// Событие: монстр убит ударом
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct MonsterSlain {
    pub monster: Entity,
    pub attacker: Entity,
}

/// Система: countdown атак + позиционирование hitbox
///
/// Идёт ПОСЛЕ kinematic step: клинок следует за уже сдвинутым телом.
pub fn tick_attacks(mut attackers: Query<(&Body, &mut AttackState)>, config: Res<AttackConfig>) {
    for (body, mut attack) in attackers.iter_mut() {
        attack.tick(body, &config);
    }
}

/// Система: hitbox оружия игрока против живых монстров
pub fn resolve_weapon_hits(
    players: Query<(Entity, &AttackState), With<Player>>,
    mut monsters: Query<(Entity, &Body, &mut Monster)>,
    mut slain_events: EventWriter<MonsterSlain>,
) {
    for (attacker, attack) in players.iter() {
        if !attack.is_active() {
            continue;
        }

        for (monster_entity, body, mut monster) in monsters.iter_mut() {
            if !monster.alive || !colliding(&attack.weapon, &body.bounds) {
                continue;
            }

            monster.alive = false;
            slain_events.write(MonsterSlain {
                monster: monster_entity,
                attacker,
            });

            crate::logger::log_info(&format!(
                "Hit monster {:?} at ({:.1}, {:.1})",
                monster_entity, body.bounds.x, body.bounds.y
            ));
        }
    }
}

/// Система: удалить монстров с alive == false
pub fn despawn_slain_monsters(mut commands: Commands, monsters: Query<(Entity, &Monster)>) {
    // Явно false каждый кадр
    let mut monsters_died = false;

    for (entity, monster) in monsters.iter() {
        if !monster.alive {
            commands.entity(entity).despawn();
            monsters_died = true;
        }
    }

    if monsters_died {
        let remaining = monsters.iter().filter(|(_, monster)| monster.alive).count();
        crate::logger::log(&format!("Despawned slain monsters, {} remain", remaining));
    }
}
