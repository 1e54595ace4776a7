//! Motion state компоненты: направленный input, скорости, facing

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Deadzone магнитуды input: ниже неё facing не обновляется,
/// а атака не считается "бегущей".
pub const INPUT_DEADZONE: f32 = 0.1;

/// Направленный input персонажа (перезаписывается сэмплером раз в кадр)
///
/// Инвариант: `direction` — нулевой ИЛИ единичный вектор (нормализация в
/// сэмплере, диагональ не быстрее осевого движения).
///
/// Для headless тестов — mock input через ScriptedInput source,
/// либо запись компонента напрямую.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MoveInput {
    /// Направление движения (normalized или ZERO)
    pub direction: Vec2,
    /// Run-модификатор зажат (held)
    pub run: bool,
}

impl MoveInput {
    /// Значимое движение — магнитуда выше deadzone.
    pub fn is_moving(&self) -> bool {
        self.direction.length() > INPUT_DEADZONE
    }
}

/// Скорости движения персонажа
///
/// Velocity = direction * speed * fixed_delta, поэтому значения крупные:
/// при тике 0.02s walk 400 даёт 8 m/s.
#[derive(Component, Clone, Copy, Debug, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct MovementSpeed {
    /// Скорость ходьбы
    pub walk: f32,
    /// Скорость бега (run-модификатор)
    pub run: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self {
            walk: 400.0,
            run: 600.0,
        }
    }
}

/// Бинарное направление взгляда (мирроринг спрайта в host анимации)
///
/// Sticky: обновляется только когда магнитуда input выше INPUT_DEADZONE
/// и горизонтальная компонента ненулевая. Начальное значение — Right.
#[derive(
    Component, Clone, Copy, Debug, Default, PartialEq, Eq, Reflect, Serialize, Deserialize,
)]
#[reflect(Component)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn is_right(&self) -> bool {
        matches!(self, Facing::Right)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Facing::Left)
    }
}
