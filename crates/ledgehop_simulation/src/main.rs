//! Headless симуляция Ledgehop
//!
//! Тестовый уровень, игрок под autopilot'ом, один монстр.
//! Без рендера: позиции пишутся в лог.

use ledgehop_simulation::{
    create_headless_app, log_info, spawn_monster, spawn_player, Autopilot, AutopilotPlugin, Body, DeterministicRng,
    Monster, SimulationPlugin,
};

fn main() {
    let mut app = create_headless_app(42);
    app.add_plugins((SimulationPlugin, AutopilotPlugin));

    let seed = app.world().resource::<DeterministicRng>().seed;
    log_info(&format!("Starting Ledgehop headless simulation (seed: {})", seed));

    let player = {
        let world = app.world_mut();
        let player = spawn_player(&mut world.commands(), 10.0, 0.0);
        spawn_monster(&mut world.commands(), 500.0, 40.0);
        world.flush();
        world.entity_mut(player).insert(Autopilot::default());
        player
    };

    // 1000 тиков
    for tick in 0..1000 {
        app.update();

        if tick % 100 == 0 {
            let world = app.world_mut();
            let monsters_alive = world.query::<&Monster>().iter(world).filter(|m| m.alive).count();

            if let Some(body) = world.get::<Body>(player) {
                log_info(&format!(
                    "Tick {}: player at ({:.1}, {:.1}) on_ground={} monsters={}",
                    tick, body.bounds.x, body.bounds.y, body.on_ground, monsters_alive
                ));
            }
        }
    }

    log_info("Simulation complete!");
}
