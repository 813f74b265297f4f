// Symbolic key alphabet mapped from winit key codes

use std::fmt;

use winit::keyboard::KeyCode;

/// Keys the game understands
///
/// Left and right modifier keys collapse into one symbol each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Escape,
    Alt,
    Ctrl,
    Shift,
}

impl Key {
    /// Translate a physical key code, or `None` for keys outside the alphabet
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        let key = match code {
            KeyCode::KeyA => Self::A,
            KeyCode::KeyB => Self::B,
            KeyCode::KeyC => Self::C,
            KeyCode::KeyD => Self::D,
            KeyCode::KeyE => Self::E,
            KeyCode::KeyF => Self::F,
            KeyCode::KeyG => Self::G,
            KeyCode::KeyH => Self::H,
            KeyCode::KeyI => Self::I,
            KeyCode::KeyJ => Self::J,
            KeyCode::KeyK => Self::K,
            KeyCode::KeyL => Self::L,
            KeyCode::KeyM => Self::M,
            KeyCode::KeyN => Self::N,
            KeyCode::KeyO => Self::O,
            KeyCode::KeyP => Self::P,
            KeyCode::KeyQ => Self::Q,
            KeyCode::KeyR => Self::R,
            KeyCode::KeyS => Self::S,
            KeyCode::KeyT => Self::T,
            KeyCode::KeyU => Self::U,
            KeyCode::KeyV => Self::V,
            KeyCode::KeyW => Self::W,
            KeyCode::KeyX => Self::X,
            KeyCode::KeyY => Self::Y,
            KeyCode::KeyZ => Self::Z,
            KeyCode::ArrowUp => Self::Up,
            KeyCode::ArrowDown => Self::Down,
            KeyCode::ArrowLeft => Self::Left,
            KeyCode::ArrowRight => Self::Right,
            KeyCode::Space => Self::Space,
            KeyCode::Enter | KeyCode::NumpadEnter => Self::Enter,
            KeyCode::Escape => Self::Escape,
            KeyCode::AltLeft | KeyCode::AltRight => Self::Alt,
            KeyCode::ControlLeft | KeyCode::ControlRight => Self::Ctrl,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Self::Shift,
            _ => return None,
        };
        Some(key)
    }

    /// Lower-case name of the key
    pub fn name(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
            Self::E => "e",
            Self::F => "f",
            Self::G => "g",
            Self::H => "h",
            Self::I => "i",
            Self::J => "j",
            Self::K => "k",
            Self::L => "l",
            Self::M => "m",
            Self::N => "n",
            Self::O => "o",
            Self::P => "p",
            Self::Q => "q",
            Self::R => "r",
            Self::S => "s",
            Self::T => "t",
            Self::U => "u",
            Self::V => "v",
            Self::W => "w",
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Space => "space",
            Self::Enter => "enter",
            Self::Escape => "escape",
            Self::Alt => "alt",
            Self::Ctrl => "ctrl",
            Self::Shift => "shift",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_arrows() {
        assert_eq!(Key::from_key_code(KeyCode::KeyA), Some(Key::A));
        assert_eq!(Key::from_key_code(KeyCode::KeyZ), Some(Key::Z));
        assert_eq!(Key::from_key_code(KeyCode::ArrowUp), Some(Key::Up));
        assert_eq!(Key::from_key_code(KeyCode::ArrowLeft), Some(Key::Left));
    }

    #[test]
    fn test_modifiers_collapse() {
        assert_eq!(Key::from_key_code(KeyCode::ShiftLeft), Some(Key::Shift));
        assert_eq!(Key::from_key_code(KeyCode::ShiftRight), Some(Key::Shift));
        assert_eq!(Key::from_key_code(KeyCode::ControlRight), Some(Key::Ctrl));
        assert_eq!(Key::from_key_code(KeyCode::AltLeft), Some(Key::Alt));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(Key::from_key_code(KeyCode::F1), None);
        assert_eq!(Key::from_key_code(KeyCode::Digit1), None);
        assert_eq!(Key::from_key_code(KeyCode::Tab), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Key::Space.to_string(), "space");
        assert_eq!(Key::Q.name(), "q");
    }
}
