use std::fmt;

/// Keyboard key identifier carried by key events.
///
/// Backends map platform key codes into these variants where possible.
/// Anything else arrives as `KeyCode::Unknown` with the backend's raw code.
#[rustfmt::skip]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KeyCode {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    /// Platform key without a named variant.
    Unknown(u32),
}

impl KeyCode {
    /// Maps an ASCII letter or digit to its key, ignoring case.
    pub fn from_char(c: char) -> Option<KeyCode> {
        #[rustfmt::skip]
        const LETTERS: [KeyCode; 26] = [
            KeyCode::A, KeyCode::B, KeyCode::C, KeyCode::D, KeyCode::E, KeyCode::F,
            KeyCode::G, KeyCode::H, KeyCode::I, KeyCode::J, KeyCode::K, KeyCode::L,
            KeyCode::M, KeyCode::N, KeyCode::O, KeyCode::P, KeyCode::Q, KeyCode::R,
            KeyCode::S, KeyCode::T, KeyCode::U, KeyCode::V, KeyCode::W, KeyCode::X,
            KeyCode::Y, KeyCode::Z,
        ];
        #[rustfmt::skip]
        const DIGITS: [KeyCode; 10] = [
            KeyCode::Digit0, KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3,
            KeyCode::Digit4, KeyCode::Digit5, KeyCode::Digit6, KeyCode::Digit7,
            KeyCode::Digit8, KeyCode::Digit9,
        ];

        let c = c.to_ascii_uppercase();
        match c {
            'A'..='Z' => Some(LETTERS[(c as u8 - b'A') as usize]),
            '0'..='9' => Some(DIGITS[(c as u8 - b'0') as usize]),
            ' ' => Some(KeyCode::Space),
            _ => None,
        }
    }

    pub fn is_modifier(self) -> bool {
        matches!(self, KeyCode::Shift | KeyCode::Control | KeyCode::Alt | KeyCode::Meta)
    }
}

/// Mouse button identifier carried by button events.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Unknown(code) => write!(f, "Unknown({code})"),
            other => write!(f, "{:?}", other),
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Other(b) => write!(f, "Button{b}"),
            other => write!(f, "{:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_char_letters_ignore_case() {
        assert_eq!(KeyCode::from_char('a'), Some(KeyCode::A));
        assert_eq!(KeyCode::from_char('Z'), Some(KeyCode::Z));
    }

    #[test]
    fn from_char_digits_and_space() {
        assert_eq!(KeyCode::from_char('0'), Some(KeyCode::Digit0));
        assert_eq!(KeyCode::from_char('9'), Some(KeyCode::Digit9));
        assert_eq!(KeyCode::from_char(' '), Some(KeyCode::Space));
    }

    #[test]
    fn from_char_rejects_punctuation() {
        assert_eq!(KeyCode::from_char('#'), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(KeyCode::Escape.to_string(), "Escape");
        assert_eq!(KeyCode::Unknown(42).to_string(), "Unknown(42)");
        assert_eq!(MouseButton::Left.to_string(), "Left");
        assert_eq!(MouseButton::Other(7).to_string(), "Button7");
    }
}
