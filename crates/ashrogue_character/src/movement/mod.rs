//! Movement domain — velocity из input (FixedUpdate) + facing (Update)
//!
//! # Архитектура
//! - ECS пишет Velocity.linvel rapier-тела; физику степает host
//! - Headless режим: прямая интеграция velocity → Transform
//! - Facing sticky — обновляется только выше deadzone

pub mod facing;
pub mod velocity;

pub use facing::{next_facing, resolve_facing};
pub use velocity::{
    apply_movement_velocity, integrate_velocity_to_transform, spawn_player_character,
};
