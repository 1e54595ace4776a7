//! Headless прогон персонажа ASHROGUE
//!
//! Скриптованный input: стоим → идём вправо → бежим по диагонали →
//! атака на бегу → завершение атаки. Печатает state каждые 50 кадров.

use ashrogue_character::*;
use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

fn main() {
    let seed = 42;
    println!("Starting ASHROGUE headless character run (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(CharacterPlugin);

    // Host doubles: скриптовый input + записывающий animation sink
    let input = ScriptedInput::new();
    let sink = RecordingSink::new();
    app.insert_resource(InputService::new(input.clone()));
    app.insert_resource(AnimationBridge::new(sink.clone()));

    let player = spawn_player_character(&mut app.world_mut().commands(), Vec2::ZERO);
    app.world_mut().flush();

    for frame in 0..400 {
        // Скриптовые фазы input
        match frame {
            100 => input.set_axes(1.0, 0.0),
            200 => {
                input.set_axes(-1.0, -1.0);
                input.set_run(true);
            }
            300 => input.press_attack(),
            350 => notify_attack_finished(app.world_mut(), player),
            _ => {}
        }

        run_frame(&mut app);
        run_physics_tick(&mut app);

        if frame % 50 == 0 {
            let velocity = app
                .world()
                .get::<Velocity>(player)
                .map(|v| v.linvel)
                .unwrap_or(Vec2::ZERO);
            let position = app
                .world()
                .get::<Transform>(player)
                .map(|t| t.translation.truncate())
                .unwrap_or(Vec2::ZERO);
            let facing = app.world().get::<Facing>(player).copied().unwrap_or_default();
            let attacking = app.world().entity(player).contains::<AttackState>();

            println!(
                "Frame {}: pos ({:.2}, {:.2}), vel ({:.2}, {:.2}), facing {:?}, attacking {}",
                frame, position.x, position.y, velocity.x, velocity.y, facing, attacking
            );
        }
    }

    println!("Triggers fired: {:?}", sink.triggers());
    println!("Run complete!");
}
