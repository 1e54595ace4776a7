//! ECS компоненты персонажа
//!
//! Motion state разложен по компонентам (по одному на concern):
//! input, скорости, facing — всё живёт на player entity.

pub mod movement;
pub mod player;

pub use movement::{Facing, MoveInput, MovementSpeed, INPUT_DEADZONE};
pub use player::Player;
