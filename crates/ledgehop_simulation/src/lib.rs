//! Ledgehop Simulation Core
//!
//! ECS-симуляция 2D платформера на Bevy 0.16 (headless, без рендера).
//!
//! Кадр симуляции (FixedUpdate, 60Hz):
//! 1. Input — источник команд (autopilot в headless режиме)
//! 2. Intent — команды → скорость тела
//! 3. Kinematics — gravity + интеграция + AABB resolution против Level
//! 4. Combat — countdown атаки, hitbox против монстров
//! 5. Cleanup — сброс input edges
//!
//! Рендер/окно/клавиатура — внешний коллаборатор: пишет `ControlInput`,
//! читает `Body::bounds`, `Monster::alive` и `Level`.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod combat;
pub mod components;
pub mod geometry;
pub mod input;
pub mod level;
pub mod logger;
pub mod physics;

// Re-export базовых типов для удобства
pub use combat::{AttackConfig, AttackState, CombatPlugin, MonsterSlain};
pub use components::*;
pub use geometry::{colliding, Aabb};
pub use input::{Autopilot, AutopilotPlugin, Control, ControlInput, ControlPlugin, MovementConfig};
pub use level::{test_level, Level, LevelError};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use physics::{step_body, KinematicsPlugin, PhysicsConfig, StepOutcome};

/// Частота симуляции (Hz)
pub const TICK_RATE_HZ: f64 = 60.0;

/// Фазы кадра, выполняются строго по порядку
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Intent,
    Kinematics,
    Combat,
    Cleanup,
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Level: если ресурс уже вставлен — используется он, иначе тестовый уровень.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<Level>() {
            app.insert_resource(test_level());
        }

        app
            // Fixed timestep 60Hz: один physics step на кадр
            .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Input,
                    SimulationSet::Intent,
                    SimulationSet::Kinematics,
                    SimulationSet::Combat,
                    SimulationSet::Cleanup,
                )
                    .chain(),
            )
            .add_plugins((ControlPlugin, KinematicsPlugin, CombatPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
///
/// `seed` хранится для логов: какой прогон воспроизводить.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время не wall-clock: каждый `app.update()` продвигает часы ровно на
/// один fixed tick (первый update — нулевой, как у Time<Real>).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / TICK_RATE_HZ,
        )));

    app
}

/// Текстовый snapshot компонентов `T` для сравнения прогонов
///
/// Одна строка на entity: `index: {:?}`, строки упорядочены по Entity index,
/// так что порядок итерации query на результат не влияет.
pub fn world_snapshot<T>(world: &mut World) -> String
where
    T: Component + std::fmt::Debug,
{
    let mut lines: Vec<(u32, String)> = world
        .query::<(Entity, &T)>()
        .iter(world)
        .map(|(entity, component)| (entity.index(), format!("{:?}", component)))
        .collect();
    lines.sort_unstable_by_key(|(index, _)| *index);

    lines
        .into_iter()
        .map(|(index, line)| format!("{}: {}\n", index, line))
        .collect()
}
