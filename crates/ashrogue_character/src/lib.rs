//! ASHROGUE Character Core
//!
//! ECS-слой поведения играбельного персонажа на Bevy 0.16 (strategic layer)
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (input intent, motion state, attack state)
//! - Host engine = tactical layer (physics stepping, rendering, animation playback)
//!
//! Host сим-слою предоставляет две capabilities (injected, подменяемые в тестах):
//! - `InputSource` — поллинг сырого input раз в кадр
//! - `AnimationSink` — параметры и one-shot триггеры анимации
//!
//! Обратно host делает ровно один вызов: `notify_attack_finished`
//! (attack анимация доиграла).

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod animation;
pub mod combat;
pub mod components;
pub mod input;
pub mod logger;
pub mod movement;

// Re-export базовых типов для удобства
pub use animation::{params, AnimationBridge, AnimationSink, RecordingSink};
pub use combat::{notify_attack_finished, AttackFinished, AttackIntent, AttackState};
pub use components::{Facing, MoveInput, MovementSpeed, Player, INPUT_DEADZONE};
pub use input::{Axis, InputService, InputSource, NullInput, ScriptedInput};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel,
    LogPrinter,
};
pub use movement::spawn_player_character;

/// Главный plugin поведения персонажа
///
/// Порядок Update цепочки = data flow:
/// input sampling → attack lifecycle → facing → animation sync.
/// Движение — отдельно в FixedUpdate (фиксированный физический tick).
pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 50Hz (0.02s) — скорости MovementSpeed тюнились под этот tick
            .insert_resource(Time::<Fixed>::from_hz(50.0))
            // Регистрация событий
            .add_event::<AttackIntent>()
            .add_event::<AttackFinished>()
            // Input service опционален: нет устройства → нулевой input
            .init_resource::<InputService>()
            // Fail fast если host не подключил animation sink
            .add_systems(Startup, validate_host_bindings);

        // Per-frame цепочка (frame callback host'а)
        app.add_systems(
            Update,
            (
                // Фаза 1: Сырой input → MoveInput + AttackIntent
                input::sample_player_input,
                // Фаза 2: Attack lifecycle (finished раньше новых триггеров)
                combat::finish_attacks,
                combat::start_attacks,
                // Фаза 3: Facing из горизонтальной компоненты input
                movement::resolve_facing,
                // Фаза 4: Выталкиваем state в host анимацию
                animation::sync_animation_parameters,
            )
                .chain(), // Последовательное выполнение
        );

        // Fixed-timestep цепочка (physics callback host'а)
        app.add_systems(
            FixedUpdate,
            (
                movement::apply_movement_velocity,
                movement::integrate_velocity_to_transform, // Прямая интеграция (rapier только для collisions)
            )
                .chain(),
        );
    }
}

/// Startup guard: обязательные host bindings должны стоять до первого кадра.
///
/// `AnimationBridge` обязателен — молчаливый no-op маскировал бы отсутствие
/// анимаций, поэтому падаем сразу с внятным сообщением. `InputService`
/// опционален по контракту (отсутствие устройства == нулевой input).
fn validate_host_bindings(bridge: Option<Res<AnimationBridge>>) {
    if bridge.is_none() {
        panic!(
            "CharacterPlugin: AnimationBridge resource is not installed — \
             host must provide an AnimationSink before startup"
        );
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless прогона персонажа
///
/// Host bindings (InputService, AnimationBridge) и CharacterPlugin
/// вешает вызывающая сторона.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(50.0)); // 50Hz FixedUpdate

    app
}

/// Прогнать один кадровый callback host'а (Update цепочка).
///
/// Вместе с `run_physics_tick` — две точки входа, которые дёргает
/// внешний driver (host loop, headless binary, тесты).
pub fn run_frame(app: &mut App) {
    app.world_mut().run_schedule(Update);
}

/// Прогнать один фиксированный физический tick (FixedUpdate цепочка).
///
/// Продвигает `Time<Fixed>` ровно на один timestep. Host с собственным
/// fixed-loop'ом гоняет FixedUpdate сам — этот helper для headless режима.
pub fn run_physics_tick(app: &mut App) {
    let timestep = app.world().resource::<Time<Fixed>>().timestep();
    app.world_mut()
        .resource_mut::<Time<Fixed>>()
        .advance_by(timestep);
    app.world_mut().run_schedule(FixedUpdate);
}

/// Snapshot мира для сравнения детерминизма
///
/// Собираем компоненты типа T в детерминированный байтовый формат:
/// сортировка по Entity ID, сериализация через Debug.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
