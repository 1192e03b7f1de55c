//! Input domain: snapshot команд и intent mapping
//!
//! Содержит:
//! - Control (логические команды: влево, вправо, прыжок, атака)
//! - ControlInput (per-frame snapshot: held / just pressed / just released)
//! - MovementConfig (ускорение, прыжок, air control)
//! - apply_intent (команды → изменение скорости тела)
//! - Autopilot (seeded источник команд для headless)
//!
//! Опрос клавиатуры - дело внешнего коллаборатора: он зовёт
//! `ControlInput::press/release`, симуляция только читает snapshot.

pub mod autopilot;
pub mod control;
pub mod intent;

// Re-export all components and systems
pub use autopilot::*;
pub use control::*;
pub use intent::*;
