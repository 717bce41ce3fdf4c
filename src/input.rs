//! Input boundary
//!
//! Raw key events land in a small table of atomic flags keyed by logical
//! action; the game samples that table once per frame through `InputSource`.
//! There is no edge detection here: a held key reads as held every frame.

use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// The three things a player can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Start,
    Jump,
    Squat,
}

impl LogicalKey {
    pub const ALL: [LogicalKey; 3] = [LogicalKey::Start, LogicalKey::Jump, LogicalKey::Squat];

    fn index(self) -> usize {
        match self {
            LogicalKey::Start => 0,
            LogicalKey::Jump => 1,
            LogicalKey::Squat => 2,
        }
    }
}

/// Something that can answer the three per-frame input queries
pub trait InputSource {
    fn wants_start(&self) -> bool;
    fn wants_jump(&self) -> bool;
    fn wants_squat(&self) -> bool;
}

impl TickInput {
    /// Snapshot an input source for one tick
    pub fn sample<I: InputSource + ?Sized>(source: &I) -> Self {
        Self {
            start: source.wants_start(),
            jump: source.wants_jump(),
            squat: source.wants_squat(),
        }
    }
}

/// A fixed input reads back as itself; handy for scripted runs
impl InputSource for TickInput {
    fn wants_start(&self) -> bool {
        self.start
    }

    fn wants_jump(&self) -> bool {
        self.jump
    }

    fn wants_squat(&self) -> bool {
        self.squat
    }
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn wants_start(&self) -> bool {
        (**self).wants_start()
    }

    fn wants_jump(&self) -> bool {
        (**self).wants_jump()
    }

    fn wants_squat(&self) -> bool {
        (**self).wants_squat()
    }
}

impl<T: InputSource + ?Sized> InputSource for Rc<T> {
    fn wants_start(&self) -> bool {
        (**self).wants_start()
    }

    fn wants_jump(&self) -> bool {
        (**self).wants_jump()
    }

    fn wants_squat(&self) -> bool {
        (**self).wants_squat()
    }
}

impl<T: InputSource + ?Sized> InputSource for Arc<T> {
    fn wants_start(&self) -> bool {
        (**self).wants_start()
    }

    fn wants_jump(&self) -> bool {
        (**self).wants_jump()
    }

    fn wants_squat(&self) -> bool {
        (**self).wants_squat()
    }
}

/// Raw key codes (DOM `KeyboardEvent.code` names) bound to each action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub start: String,
    pub jump: String,
    pub squat: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            start: "Enter".to_string(),
            jump: "ArrowUp".to_string(),
            squat: "ArrowDown".to_string(),
        }
    }
}

impl KeyBindings {
    /// Which action a raw key code drives, if any
    pub fn lookup(&self, code: &str) -> Option<LogicalKey> {
        LogicalKey::ALL
            .into_iter()
            .find(|key| self.code_for(*key) == code)
    }

    pub fn code_for(&self, key: LogicalKey) -> &str {
        match key {
            LogicalKey::Start => &self.start,
            LogicalKey::Jump => &self.jump,
            LogicalKey::Squat => &self.squat,
        }
    }
}

/// Pressed/released flags for each logical key
#[derive(Debug, Default)]
pub struct KeyState {
    pressed: [AtomicBool; 3],
}

impl KeyState {
    pub fn set(&self, key: LogicalKey, pressed: bool) {
        self.pressed[key.index()].store(pressed, Ordering::Relaxed);
    }

    pub fn is_pressed(&self, key: LogicalKey) -> bool {
        self.pressed[key.index()].load(Ordering::Relaxed)
    }

    pub fn release_all(&self) {
        for flag in &self.pressed {
            flag.store(false, Ordering::Relaxed);
        }
    }
}

/// Keyboard-driven input: event handlers write, the frame loop reads
#[derive(Debug, Default)]
pub struct KeyboardInput {
    bindings: KeyBindings,
    state: KeyState,
}

impl KeyboardInput {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            state: KeyState::default(),
        }
    }

    /// Handle a raw key press. Returns whether the key is bound.
    pub fn key_down(&self, code: &str) -> bool {
        self.apply(code, true)
    }

    /// Handle a raw key release. Returns whether the key is bound.
    pub fn key_up(&self, code: &str) -> bool {
        self.apply(code, false)
    }

    /// Forget held keys (e.g. when the window loses focus and releases never arrive)
    pub fn release_all(&self) {
        self.state.release_all();
    }

    fn apply(&self, code: &str, pressed: bool) -> bool {
        match self.bindings.lookup(code) {
            Some(key) => {
                self.state.set(key, pressed);
                true
            }
            None => {
                log::debug!("Ignoring unbound key {code}");
                false
            }
        }
    }
}

impl InputSource for KeyboardInput {
    fn wants_start(&self) -> bool {
        self.state.is_pressed(LogicalKey::Start)
    }

    fn wants_jump(&self) -> bool {
        self.state.is_pressed(LogicalKey::Jump)
    }

    fn wants_squat(&self) -> bool {
        self.state.is_pressed(LogicalKey::Squat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.lookup("Enter"), Some(LogicalKey::Start));
        assert_eq!(bindings.lookup("ArrowUp"), Some(LogicalKey::Jump));
        assert_eq!(bindings.lookup("ArrowDown"), Some(LogicalKey::Squat));
        assert_eq!(bindings.lookup("KeyQ"), None);
    }

    #[test]
    fn test_press_and_release() {
        let input = KeyboardInput::default();
        assert!(input.key_down("ArrowUp"));
        assert!(input.wants_jump());
        assert!(!input.wants_start());

        // Repeated keydown (auto-repeat) changes nothing
        assert!(input.key_down("ArrowUp"));
        assert!(input.wants_jump());

        assert!(input.key_up("ArrowUp"));
        assert!(!input.wants_jump());
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let input = KeyboardInput::default();
        assert!(!input.key_down("Space"));
        assert_eq!(TickInput::sample(&input), TickInput::default());
    }

    #[test]
    fn test_custom_bindings() {
        let input = KeyboardInput::new(KeyBindings {
            jump: "Space".to_string(),
            ..Default::default()
        });
        assert!(!input.key_down("ArrowUp"));
        assert!(input.key_down("Space"));
        assert!(input.wants_jump());
    }

    #[test]
    fn test_sample_through_shared_handle() {
        let input = Arc::new(KeyboardInput::default());
        let writer = Arc::clone(&input);
        writer.key_down("Enter");
        writer.key_down("ArrowDown");

        let sampled = TickInput::sample(&input);
        assert!(sampled.start);
        assert!(sampled.squat);
        assert!(!sampled.jump);

        input.release_all();
        assert_eq!(TickInput::sample(&input), TickInput::default());
    }

    #[test]
    fn test_keyboard_input_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KeyboardInput>();
    }

    #[test]
    fn test_bindings_json_defaults() {
        let bindings: KeyBindings = serde_json::from_str(r#"{ "jump": "KeyW" }"#).unwrap();
        assert_eq!(bindings.jump, "KeyW");
        assert_eq!(bindings.start, "Enter");
    }
}
