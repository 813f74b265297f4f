// Keyboard state tracking

use super::key::Key;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Keys currently held down
#[derive(Debug, Default)]
pub struct KeyboardState {
    pressed: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    ///
    /// Returns the key and whether it went down, or `None` for unmapped keys
    /// and auto-repeats.
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) -> Option<(Key, bool)> {
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        let key = Key::from_key_code(code)?;

        match event.state {
            ElementState::Pressed if event.repeat => None,
            ElementState::Pressed => self.press(key).then_some((key, true)),
            ElementState::Released => self.release(key).then_some((key, false)),
        }
    }

    /// Register a key press, returning `false` if it was already down
    pub fn press(&mut self, key: Key) -> bool {
        self.pressed.insert(key)
    }

    /// Register a key release, returning `false` if it was not down
    pub fn release(&mut self, key: Key) -> bool {
        self.pressed.remove(&key)
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Forget every key, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keyboard = KeyboardState::new();

        assert!(keyboard.press(Key::Left));
        assert!(keyboard.is_pressed(Key::Left));

        assert!(keyboard.release(Key::Left));
        assert!(!keyboard.is_pressed(Key::Left));
    }

    #[test]
    fn test_repeated_press_is_not_an_edge() {
        let mut keyboard = KeyboardState::new();
        assert!(keyboard.press(Key::A));

        assert!(!keyboard.press(Key::A));
        assert!(keyboard.is_pressed(Key::A));
    }

    #[test]
    fn test_release_without_press() {
        let mut keyboard = KeyboardState::new();
        assert!(!keyboard.release(Key::Up));
        assert!(!keyboard.is_pressed(Key::Up));
    }

    #[test]
    fn test_keys_are_tracked_independently() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::Right);
        keyboard.press(Key::Up);
        keyboard.release(Key::Up);

        assert!(keyboard.is_pressed(Key::Right));
        assert!(!keyboard.is_pressed(Key::Up));
    }

    #[test]
    fn test_reset() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::Shift);
        keyboard.press(Key::Left);
        keyboard.reset();
        assert!(!keyboard.is_pressed(Key::Shift));
        assert!(!keyboard.is_pressed(Key::Left));
    }
}
