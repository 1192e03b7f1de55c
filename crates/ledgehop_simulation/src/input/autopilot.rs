//! Autopilot: seeded источник команд для headless режима
//!
//! В headless нет клавиатуры: autopilot пишет тот же `ControlInput`,
//! что и настоящий input коллаборатор. Весь рандом идёт через
//! `DeterministicRng`, поэтому прогоны с одним seed идентичны.

use bevy::prelude::*;
use rand::Rng;

use super::control::{Control, ControlInput};
use crate::DeterministicRng;

/// Параметры "бота" (вероятности за кадр)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
#[require(ControlInput)]
pub struct Autopilot {
    /// Шанс сменить горизонтальное направление
    pub turn_chance: f64,
    pub jump_chance: f64,
    pub attack_chance: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            turn_chance: 0.02,
            jump_chance: 0.01,
            attack_chance: 0.03,
        }
    }
}

/// Один кадр autopilot'а: обновить snapshot команд
pub fn drive_input<R: Rng>(pilot: &Autopilot, input: &mut ControlInput, rng: &mut R) {
    if rng.gen_bool(pilot.turn_chance) {
        match rng.gen_range(0..3) {
            0 => {
                input.release(Control::MoveRight);
                input.press(Control::MoveLeft);
            }
            1 => {
                input.release(Control::MoveLeft);
                input.press(Control::MoveRight);
            }
            _ => {
                input.release(Control::MoveLeft);
                input.release(Control::MoveRight);
            }
        }
    }

    input.set(Control::Jump, rng.gen_bool(pilot.jump_chance));
    input.set(Control::Attack, rng.gen_bool(pilot.attack_chance));
}

/// Система: autopilot для всех entity с `Autopilot`
pub fn drive_autopilot(mut pilots: Query<(&Autopilot, &mut ControlInput)>, mut rng: ResMut<DeterministicRng>) {
    for (pilot, mut input) in pilots.iter_mut() {
        drive_input(pilot, &mut input, &mut rng.rng);
    }
}

/// Plugin: autopilot в SimulationSet::Input
///
/// Требует `DeterministicRng` (см. `create_headless_app`).
pub struct AutopilotPlugin;

impl Plugin for AutopilotPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, drive_autopilot.in_set(crate::SimulationSet::Input));
    }
}
