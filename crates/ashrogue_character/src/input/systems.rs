//! Input sampling system (ECS)

use bevy::prelude::*;

use crate::combat::AttackIntent;
use crate::components::{MoveInput, Player};

use super::source::{Axis, InputService};

/// Сэмплер input — первый в Update цепочке.
///
/// - Читает: InputService (сырые оси + кнопки)
/// - Пишет: MoveInput (перезапись целиком), AttackIntent (edge)
/// - Query: With<Player>
///
/// Нормализация: нулевой вектор остаётся нулевым, любой ненулевой
/// приводится к единичной длине.
pub fn sample_player_input(
    service: Res<InputService>,
    mut players: Query<(Entity, &mut MoveInput), With<Player>>,
    mut attack_intents: EventWriter<AttackIntent>,
) {
    // Один поллинг на кадр (attack edge — one-shot, читаем до цикла)
    let raw = Vec2::new(
        service.0.axis(Axis::Horizontal),
        service.0.axis(Axis::Vertical),
    );
    let direction = normalize_input(raw);
    let run = service.0.run_held();
    let attack = service.0.attack_pressed();

    for (entity, mut input) in players.iter_mut() {
        input.direction = direction;
        input.run = run;

        if attack {
            attack_intents.write(AttackIntent { entity });
        }
    }
}

/// Нормализация сырого input-вектора: ZERO (и вырожденно малые) → ZERO,
/// иначе → unit length.
pub fn normalize_input(raw: Vec2) -> Vec2 {
    raw.normalize_or_zero()
}
