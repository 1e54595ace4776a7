//! Velocity application — движение персонажа от input.
//!
//! Движение задаётся прямой записью линейной скорости (direct velocity
//! control, не силами): velocity = direction * speed * fixed_delta.
//!
//! Тело — rapier Dynamic с gravity scale 0 и залоченным вращением:
//! top-down персонаж, физика нужна только для коллизий.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::components::{Facing, MoveInput, MovementSpeed, Player};

/// Система движения — каждый fixed tick пишет линейную скорость тела.
///
/// - Читает: MoveInput, MovementSpeed, Time<Fixed>
/// - Пишет: Velocity.linvel
/// - Query: With<Player>
///
/// Атака движение НЕ блокирует: run-attack скользит, стоячая атака
/// остаётся стоячей просто потому что input нулевой.
pub fn apply_movement_velocity(
    mut query: Query<(&MoveInput, &MovementSpeed, &mut Velocity), With<Player>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (input, speeds, mut velocity) in query.iter_mut() {
        let speed = if input.run { speeds.run } else { speeds.walk };
        velocity.linvel = input.direction * speed * delta;
    }
}

/// Прямая интеграция velocity → Transform (headless режим).
///
/// Когда rapier plugin не подключен (headless прогон), velocity никто не
/// степает — интегрируем сами: position += velocity * dt.
pub fn integrate_velocity_to_transform(
    mut query: Query<(&Velocity, &mut Transform), With<Player>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (velocity, mut transform) in query.iter_mut() {
        transform.translation += velocity.linvel.extend(0.0) * delta;
    }
}

/// Spawn helper для player персонажа.
///
/// Собирает entity целиком:
/// - Transform
/// - Motion state: MoveInput + MovementSpeed + Facing (default Right)
/// - Player marker
/// - Rapier body: Dynamic, gravity scale 0 (top-down), вращение залочено,
///   capsule collider
pub fn spawn_player_character(commands: &mut Commands, position: Vec2) -> Entity {
    commands
        .spawn((
            // Bevy transform
            Transform::from_translation(position.extend(0.0)),

            // Motion state
            MoveInput::default(),
            MovementSpeed::default(),
            Facing::default(),
            Player,

            // Rapier physics body
            RigidBody::Dynamic,
            Velocity::default(),
            GravityScale(0.0),
            LockedAxes::ROTATION_LOCKED,
            Collider::capsule_y(0.5, 0.4),
        ))
        .id()
}
