//! Combat domain — бинарный attack state, управляемый host анимацией.
//!
//! ECS ответственность:
//! - AttackState lifecycle (insert на trigger, remove на finished)
//! - Attack/RunAttack триггеры в animation bridge
//!
//! Host ответственность:
//! - Проигрывание attack анимации
//! - Вызов notify_attack_finished когда анимация доиграла
//!
//! # Attack Flow
//!
//! ```text
//! Input edge → AttackIntent (ECS)
//!   ↓
//! start_attacks: insert AttackState + trigger "Attack" (+ "RunAttack")
//!   ↓
//! Host играет анимацию
//!   ↓
//! Host → notify_attack_finished → AttackFinished (ECS)
//!   ↓
//! finish_attacks: remove AttackState
//! ```

pub mod attack;

pub use attack::{
    finish_attacks, notify_attack_finished, start_attacks, wants_run_attack, AttackFinished,
    AttackIntent, AttackState,
};
