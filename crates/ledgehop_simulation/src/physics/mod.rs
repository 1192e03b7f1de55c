//! Physics simulation module
//!
//! Discrete position correction против статического Level:
//! - вертикальная интеграция + gravity, затем resolution
//! - трение, горизонтальная интеграция, затем resolution
//!
//! Не моделируем: вращение, склоны, swept collision, body-vs-body.
//! На большой скорости / низком FPS тело может пройти сквозь тонкую стену.

pub mod config;
pub mod kinematics;

// Re-export основных типов
pub use config::{PhysicsConfig, CONTACT_EPSILON, FRICTION, GRAVITY};
pub use kinematics::{apply_friction, kinematic_step, step_body, KinematicsPlugin, StepOutcome};
