//! Character controller integration test
//!
//! Headless прогон полного цикла: scripted input → movement/facing →
//! animation параметры → attack lifecycle.
//!
//! Driver — ручной: run_frame (Update) + run_physics_tick (FixedUpdate),
//! как host loop, только детерминированно.

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use ashrogue_character::*;

const FIXED_DELTA: f32 = 0.02; // 50Hz tick

/// Helper: полный headless app + host doubles.
fn create_character_app(seed: u64) -> (App, ScriptedInput, RecordingSink) {
    let mut app = create_headless_app(seed);
    app.add_plugins(CharacterPlugin);

    let input = ScriptedInput::new();
    let sink = RecordingSink::new();
    app.insert_resource(InputService::new(input.clone()));
    app.insert_resource(AnimationBridge::new(sink.clone()));

    (app, input, sink)
}

/// Helper: spawn персонажа и применить отложенные команды.
fn spawn_player(app: &mut App) -> Entity {
    let entity = spawn_player_character(&mut app.world_mut().commands(), Vec2::ZERO);
    app.world_mut().flush();
    entity
}

/// Helper: один кадр + один физический tick.
fn tick(app: &mut App) {
    run_frame(app);
    run_physics_tick(app);
}

fn is_attacking(app: &App, entity: Entity) -> bool {
    app.world().entity(entity).contains::<AttackState>()
}

#[test]
fn test_walk_right_velocity_and_facing() {
    let (mut app, input, sink) = create_character_app(42);
    let player = spawn_player(&mut app);

    input.set_axes(1.0, 0.0);
    tick(&mut app);

    // velocity = direction * walk * fixed_delta = (8, 0)
    let velocity = app.world().get::<Velocity>(player).unwrap();
    let expected = 400.0 * FIXED_DELTA;
    assert!(
        (velocity.linvel.x - expected).abs() < 1e-4,
        "linvel.x = {}",
        velocity.linvel.x
    );
    assert_eq!(velocity.linvel.y, 0.0);

    assert_eq!(*app.world().get::<Facing>(player).unwrap(), Facing::Right);
    assert_eq!(sink.float(params::SPEED), Some(1.0));
    assert_eq!(sink.flag(params::IS_RUNNING), Some(false));
    assert_eq!(sink.flag(params::FACE_RIGHT), Some(true));
    assert_eq!(sink.flag(params::FACE_LEFT), Some(false));
    assert_eq!(sink.float(params::HORIZONTAL), Some(1.0));
    assert_eq!(sink.float(params::VERTICAL), Some(0.0));
}

#[test]
fn test_run_speed_applied() {
    let (mut app, input, _sink) = create_character_app(42);
    let player = spawn_player(&mut app);

    input.set_axes(0.0, 1.0);
    input.set_run(true);
    tick(&mut app);

    let velocity = app.world().get::<Velocity>(player).unwrap();
    let expected = 600.0 * FIXED_DELTA;
    assert!(
        (velocity.linvel.y - expected).abs() < 1e-4,
        "linvel.y = {}",
        velocity.linvel.y
    );
    assert_eq!(velocity.linvel.x, 0.0);
}

#[test]
fn test_idle_zero_velocity_keeps_facing() {
    let (mut app, input, sink) = create_character_app(42);
    let player = spawn_player(&mut app);

    // Разогнались влево — facing Left
    input.set_axes(-1.0, 0.0);
    tick(&mut app);
    assert_eq!(*app.world().get::<Facing>(player).unwrap(), Facing::Left);

    // Отпустили стик (run зажат, но без движения он ни на что не влияет)
    input.set_axes(0.0, 0.0);
    input.set_run(true);
    tick(&mut app);

    let velocity = app.world().get::<Velocity>(player).unwrap();
    assert_eq!(velocity.linvel, Vec2::ZERO);
    assert_eq!(*app.world().get::<Facing>(player).unwrap(), Facing::Left);
    assert_eq!(sink.float(params::SPEED), Some(0.0));
    assert_eq!(sink.flag(params::IS_RUNNING), Some(true));
    assert_eq!(sink.flag(params::FACE_LEFT), Some(true));
    assert_eq!(sink.flag(params::FACE_RIGHT), Some(false));
}

#[test]
fn test_pure_vertical_input_keeps_facing() {
    let (mut app, input, _sink) = create_character_app(42);
    let player = spawn_player(&mut app);

    input.set_axes(-1.0, 0.0);
    tick(&mut app);
    assert_eq!(*app.world().get::<Facing>(player).unwrap(), Facing::Left);

    // Чисто вертикальное движение facing не трогает
    input.set_axes(0.0, 1.0);
    tick(&mut app);
    assert_eq!(*app.world().get::<Facing>(player).unwrap(), Facing::Left);
}

#[test]
fn test_standing_attack_fires_only_attack_trigger() {
    let (mut app, input, sink) = create_character_app(42);
    let player = spawn_player(&mut app);

    input.press_attack();
    tick(&mut app);

    assert!(is_attacking(&app, player));
    assert_eq!(sink.trigger_count(params::ATTACK), 1);
    assert_eq!(sink.trigger_count(params::RUN_ATTACK), 0);
}

#[test]
fn test_run_attack_fires_both_triggers() {
    let (mut app, input, sink) = create_character_app(42);
    let player = spawn_player(&mut app);

    input.set_axes(1.0, 0.0);
    input.set_run(true);
    input.press_attack();
    tick(&mut app);

    assert!(is_attacking(&app, player));
    assert_eq!(sink.trigger_count(params::ATTACK), 1);
    assert_eq!(sink.trigger_count(params::RUN_ATTACK), 1);
}

#[test]
fn test_attack_finished_clears_state_and_is_idempotent() {
    let (mut app, input, _sink) = create_character_app(42);
    let player = spawn_player(&mut app);

    input.press_attack();
    tick(&mut app);
    assert!(is_attacking(&app, player));

    // Host сообщает о завершении анимации
    notify_attack_finished(app.world_mut(), player);
    tick(&mut app);
    assert!(!is_attacking(&app, player));

    // Повторная нотификация на Idle — no-op, без паники
    notify_attack_finished(app.world_mut(), player);
    tick(&mut app);
    assert!(!is_attacking(&app, player));
}

#[test]
fn test_movement_continues_during_attack() {
    let (mut app, input, _sink) = create_character_app(42);
    let player = spawn_player(&mut app);

    input.set_axes(1.0, 0.0);
    input.press_attack();
    tick(&mut app);

    assert!(is_attacking(&app, player));
    let velocity = app.world().get::<Velocity>(player).unwrap();
    assert!(
        velocity.linvel.x > 0.0,
        "attack must not freeze movement, linvel.x = {}",
        velocity.linvel.x
    );

    // И на следующем тике атака всё ещё идёт, движение тоже
    tick(&mut app);
    assert!(is_attacking(&app, player));
    assert!(app.world().get::<Velocity>(player).unwrap().linvel.x > 0.0);
}

#[test]
fn test_reentrant_attack_retriggers() {
    let (mut app, input, sink) = create_character_app(42);
    let player = spawn_player(&mut app);

    input.press_attack();
    tick(&mut app);
    input.press_attack();
    tick(&mut app);

    // Повторный intent во время атаки — повторный триггер, state на месте
    assert!(is_attacking(&app, player));
    assert_eq!(sink.trigger_count(params::ATTACK), 2);
}

#[test]
fn test_null_input_defaults_to_idle() {
    // Без InputService плагин подставляет NullInput: нулевой input, без паник
    let mut app = create_headless_app(42);
    app.add_plugins(CharacterPlugin);
    app.insert_resource(AnimationBridge::new(RecordingSink::new()));

    let player = spawn_player(&mut app);
    tick(&mut app);

    assert_eq!(
        app.world().get::<MoveInput>(player).unwrap().direction,
        Vec2::ZERO
    );
    assert_eq!(
        app.world().get::<Velocity>(player).unwrap().linvel,
        Vec2::ZERO
    );
}

#[test]
#[should_panic(expected = "AnimationBridge")]
fn test_missing_animation_sink_fails_fast() {
    let mut app = create_headless_app(1);
    app.add_plugins(CharacterPlugin);

    // Host забыл animation sink — падаем на старте, не no-op'аем молча
    app.update();
}
