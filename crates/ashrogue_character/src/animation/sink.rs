//! Injected animation capability (host animation system + test doubles).

use bevy::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Имена animation параметров — контракт с host animation графом.
pub mod params {
    /// Continuous: магнитуда directional input (0 или 1 после нормализации)
    pub const SPEED: &str = "Speed";
    /// Flag: run-модификатор зажат
    pub const IS_RUNNING: &str = "IsRunning";
    /// Flag: взгляд вправо (взаимоисключающе с FaceLeft)
    pub const FACE_RIGHT: &str = "FaceRight";
    /// Flag: взгляд влево
    pub const FACE_LEFT: &str = "FaceLeft";
    /// Continuous: горизонтальная компонента направления
    pub const HORIZONTAL: &str = "Horizontal";
    /// Continuous: вертикальная компонента направления
    pub const VERTICAL: &str = "Vertical";
    /// One-shot: обычная атака
    pub const ATTACK: &str = "Attack";
    /// One-shot: атака на бегу (стреляет поверх Attack)
    pub const RUN_ATTACK: &str = "RunAttack";
}

/// Capability: параметрический sink host анимации.
///
/// Триггеры — edge-triggered one-shot события: host потребляет и
/// auto-reset'ит их сам, мы только стреляем.
pub trait AnimationSink: Send + Sync {
    fn set_float(&mut self, param: &str, value: f32);
    fn set_bool(&mut self, param: &str, value: bool);
    fn set_trigger(&mut self, param: &str);
}

/// Resource-обёртка над AnimationSink.
///
/// ОБЯЗАТЕЛЬНЫЙ host binding: отсутствие ресурса — ошибка конфигурации,
/// персонаж падает на старте (никаких молчаливых no-op).
#[derive(Resource)]
pub struct AnimationBridge(pub Box<dyn AnimationSink>);

impl AnimationBridge {
    pub fn new(sink: impl AnimationSink + 'static) -> Self {
        Self(Box::new(sink))
    }
}

/// Записывающий sink для headless тестов и demo binary.
///
/// Shared handle: clone остаётся у теста для ассертов, вторая копия
/// уходит в AnimationBridge.
#[derive(Clone, Default)]
pub struct RecordingSink {
    state: Arc<Mutex<RecordedParams>>,
}

#[derive(Default)]
struct RecordedParams {
    floats: HashMap<String, f32>,
    bools: HashMap<String, bool>,
    triggers: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Последнее записанное float значение параметра.
    pub fn float(&self, param: &str) -> Option<f32> {
        self.state.lock().unwrap().floats.get(param).copied()
    }

    /// Последнее записанное bool значение параметра.
    pub fn flag(&self, param: &str) -> Option<bool> {
        self.state.lock().unwrap().bools.get(param).copied()
    }

    /// Все выстреленные триггеры, в порядке выстрела.
    pub fn triggers(&self) -> Vec<String> {
        self.state.lock().unwrap().triggers.clone()
    }

    /// Сколько раз стрелял конкретный триггер.
    pub fn trigger_count(&self, param: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .triggers
            .iter()
            .filter(|t| t.as_str() == param)
            .count()
    }
}

impl AnimationSink for RecordingSink {
    fn set_float(&mut self, param: &str, value: f32) {
        self.state
            .lock()
            .unwrap()
            .floats
            .insert(param.to_string(), value);
    }

    fn set_bool(&mut self, param: &str, value: bool) {
        self.state
            .lock()
            .unwrap()
            .bools
            .insert(param.to_string(), value);
    }

    fn set_trigger(&mut self, param: &str) {
        self.state.lock().unwrap().triggers.push(param.to_string());
    }
}
