//! Player control marker component

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// Input/движение/facing системы используют `With<Player>` filter;
/// всё остальное (AI, скриптовые акторы) живёт без этого компонента.
///
/// # Single-player
/// Обычно ровно один entity имеет этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
