//! Animation bridge domain — ECS state → host animation параметры
//!
//! Чистый output-адаптер: наружу уходят continuous параметры (Speed,
//! Horizontal/Vertical), флаги (IsRunning, FaceRight/FaceLeft) и one-shot
//! триггеры (Attack, RunAttack). Обратно ничего не читается — единственный
//! inbound путь это notify_attack_finished в combat domain.

pub mod sink;
pub mod systems;

pub use sink::{params, AnimationBridge, AnimationSink, RecordingSink};
pub use systems::sync_animation_parameters;
