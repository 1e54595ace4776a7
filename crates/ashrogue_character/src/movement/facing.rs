//! Facing resolution — sticky left/right из горизонтальной компоненты input.

use bevy::prelude::*;

use crate::animation::{params, AnimationBridge};
use crate::components::{Facing, MoveInput, Player};

/// Чистая логика facing (вынесена для прямых тестов).
///
/// - Магнитуда ≤ deadzone → facing не меняется (sticky last-known)
/// - Горизонталь ненулевая → Right при x > 0, Left при x < 0
/// - Чисто вертикальный input facing не трогает
pub fn next_facing(current: Facing, direction: Vec2) -> Facing {
    if direction.length() <= crate::components::INPUT_DEADZONE {
        return current;
    }

    if direction.x > 0.0 {
        Facing::Right
    } else if direction.x < 0.0 {
        Facing::Left
    } else {
        current
    }
}

/// Система facing — после сэмплера, до animation sync.
///
/// Side effect: пока input выше deadzone, сырые компоненты направления
/// уходят в host анимацию как continuous параметры Horizontal/Vertical
/// (ниже deadzone параметры замораживаются вместе с facing).
pub fn resolve_facing(
    mut query: Query<(&MoveInput, &mut Facing), With<Player>>,
    mut bridge: ResMut<AnimationBridge>,
) {
    for (input, mut facing) in query.iter_mut() {
        if !input.is_moving() {
            continue;
        }

        *facing = next_facing(*facing, input.direction);

        bridge.0.set_float(params::HORIZONTAL, input.direction.x);
        bridge.0.set_float(params::VERTICAL, input.direction.y);
    }
}
