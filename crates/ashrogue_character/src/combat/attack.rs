//! Attack state lifecycle (trigger → attacking → finished).

use bevy::prelude::*;

use crate::animation::{params, AnimationBridge};
use crate::components::MoveInput;

// ============================================================================
// Components
// ============================================================================

/// Компонент "персонаж атакует".
///
/// Присутствие компонента == attacking. Таймера внутри нет: снимается
/// ТОЛЬКО внешней нотификацией о завершении анимации.
///
/// Повторный AttackIntent во время атаки молча перезаписывает компонент и
/// повторно стреляет триггером (permissive, без очереди и cooldown'а).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AttackState;

// ============================================================================
// Events
// ============================================================================

/// Intent: персонаж хочет атаковать (attack edge из input).
#[derive(Event, Clone, Debug)]
pub struct AttackIntent {
    /// Entity, начинающий атаку
    pub entity: Entity,
}

/// Host нотификация: attack анимация доиграла.
///
/// Идемпотентна — finished без активной атаки остаётся no-op.
#[derive(Event, Clone, Debug)]
pub struct AttackFinished {
    /// Entity, чья атака закончилась
    pub entity: Entity,
}

// ============================================================================
// Host entry point
// ============================================================================

/// Host-side entry point: animation система сообщает, что attack анимация
/// завершилась. Единственный inbound вызов, который персонаж ожидает
/// снаружи своих per-frame callbacks.
pub fn notify_attack_finished(world: &mut World, entity: Entity) {
    world.send_event(AttackFinished { entity });
}

// ============================================================================
// Systems
// ============================================================================

/// Run-атака: run зажат И магнитуда input выше deadzone в момент триггера.
pub fn wants_run_attack(input: &MoveInput) -> bool {
    input.run && input.is_moving()
}

/// System: старт атак (обработка AttackIntent).
///
/// - Вставляет AttackState
/// - Триггер "Attack" в animation bridge
/// - Дополнительно "RunAttack" если атака на бегу (ПОВЕРХ обычного триггера)
pub fn start_attacks(
    mut intents: EventReader<AttackIntent>,
    inputs: Query<&MoveInput>,
    mut bridge: ResMut<AnimationBridge>,
    mut commands: Commands,
) {
    for intent in intents.read() {
        commands.entity(intent.entity).insert(AttackState);
        bridge.0.set_trigger(params::ATTACK);

        if let Ok(input) = inputs.get(intent.entity) {
            if wants_run_attack(input) {
                bridge.0.set_trigger(params::RUN_ATTACK);
            }
        }

        crate::log(&format!("⚔️ Attack started (entity: {:?})", intent.entity));
    }
}

/// System: завершение атак (обработка AttackFinished).
///
/// Remove отсутствующего компонента — no-op, поэтому повторные или
/// лишние нотификации безопасны.
pub fn finish_attacks(mut finished: EventReader<AttackFinished>, mut commands: Commands) {
    for event in finished.read() {
        commands.entity(event.entity).remove::<AttackState>();
        crate::log(&format!("✅ Attack finished (entity: {:?})", event.entity));
    }
}
