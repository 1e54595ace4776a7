//! Animation parameter sync (ECS → host, раз в кадр).

use bevy::prelude::*;

use crate::components::{Facing, MoveInput, Player};

use super::sink::{params, AnimationBridge};

/// System: выталкивает state персонажа в host анимацию.
///
/// Последняя в Update цепочке — видит уже готовый кадр:
/// - Speed = магнитуда input (0 или 1 после нормализации)
/// - IsRunning = run-модификатор (пушится и без движения)
/// - FaceRight/FaceLeft — взаимоисключающая пара из Facing
///
/// Триггеры атак сюда не входят — они стреляют по месту в start_attacks.
pub fn sync_animation_parameters(
    query: Query<(&MoveInput, &Facing), With<Player>>,
    mut bridge: ResMut<AnimationBridge>,
) {
    for (input, facing) in query.iter() {
        bridge.0.set_float(params::SPEED, input.direction.length());
        bridge.0.set_bool(params::IS_RUNNING, input.run);
        bridge.0.set_bool(params::FACE_RIGHT, facing.is_right());
        bridge.0.set_bool(params::FACE_LEFT, facing.is_left());
    }
}
