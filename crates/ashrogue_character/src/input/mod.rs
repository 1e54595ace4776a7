//! Player input domain — поллинг host input service → ECS state
//!
//! # Архитектура
//! - `InputSource` — injected capability (host реализует поверх своего Input API)
//! - `sample_player_input` читает source раз в кадр, нормализует и пишет MoveInput
//! - Attack edge → AttackIntent event (combat domain)
//!
//! Flow:
//! 1. Host (или ScriptedInput в тестах) отдаёт сырые оси [-1,1] и кнопки
//! 2. sample_player_input нормализует вектор (zero остаётся zero)
//! 3. MoveInput перезаписывается целиком, AttackIntent пишется на нажатие

pub mod source;
pub mod systems;

pub use source::{Axis, InputService, InputSource, NullInput, ScriptedInput};
pub use systems::sample_player_input;
