//! Injected input capability (host input service + test doubles).

use bevy::prelude::*;
use std::sync::{Arc, Mutex};

/// Ось directional input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Capability: чтение player input, поллится раз в кадр.
///
/// Host реализует поверх своего input API (keyboard, gamepad).
///
/// Контракт:
/// - `axis` — сырое значение в [-1, 1], без сглаживания и deadzone
/// - `run_held` — run-модификатор зажат (held)
/// - `attack_pressed` — атака нажата ИМЕННО в этом кадре (edge, не held)
pub trait InputSource: Send + Sync {
    fn axis(&self, axis: Axis) -> f32;
    fn run_held(&self) -> bool;
    fn attack_pressed(&self) -> bool;
}

/// Resource-обёртка над InputSource
///
/// Default — NullInput: отсутствие устройства == нулевой input, не ошибка.
#[derive(Resource)]
pub struct InputService(pub Box<dyn InputSource>);

impl Default for InputService {
    fn default() -> Self {
        Self(Box::new(NullInput))
    }
}

impl InputService {
    pub fn new(source: impl InputSource + 'static) -> Self {
        Self(Box::new(source))
    }
}

/// Источник "нет устройства": все оси 0, все кнопки false.
pub struct NullInput;

impl InputSource for NullInput {
    fn axis(&self, _axis: Axis) -> f32 {
        0.0
    }

    fn run_held(&self) -> bool {
        false
    }

    fn attack_pressed(&self) -> bool {
        false
    }
}

/// Скриптуемый input для headless тестов и demo binary.
///
/// Shared handle: clone остаётся у теста, вторая копия уходит в InputService.
/// `press_attack` — one-shot: флаг сбрасывается при чтении (семантика
/// "pressed this frame" при поллинге раз в кадр).
#[derive(Clone, Default)]
pub struct ScriptedInput {
    state: Arc<Mutex<ScriptedState>>,
}

#[derive(Default)]
struct ScriptedState {
    horizontal: f32,
    vertical: f32,
    run: bool,
    attack: bool,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Установить сырые значения осей (без нормализации — её делает сэмплер).
    pub fn set_axes(&self, horizontal: f32, vertical: f32) {
        let mut state = self.state.lock().unwrap();
        state.horizontal = horizontal;
        state.vertical = vertical;
    }

    pub fn set_run(&self, held: bool) {
        self.state.lock().unwrap().run = held;
    }

    /// Нажать атаку (однократно; сбросится при следующем поллинге).
    pub fn press_attack(&self) {
        self.state.lock().unwrap().attack = true;
    }
}

impl InputSource for ScriptedInput {
    fn axis(&self, axis: Axis) -> f32 {
        let state = self.state.lock().unwrap();
        match axis {
            Axis::Horizontal => state.horizontal,
            Axis::Vertical => state.vertical,
        }
    }

    fn run_held(&self) -> bool {
        self.state.lock().unwrap().run
    }

    fn attack_pressed(&self) -> bool {
        let mut state = self.state.lock().unwrap();
        std::mem::take(&mut state.attack)
    }
}
