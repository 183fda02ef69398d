//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to demo actions: mode selection, mode cycling,
//! redraw, fullscreen and exit.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Select a mode by zero-based index (digit keys 1-9)
    SelectMode(usize),
    /// Advance to the next mode, wrapping around (Space)
    NextMode,
    /// Redraw the current frame (R key)
    Redraw,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `None` for key releases and unbound keys.
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        if let Some(index) = Self::digit_index(key) {
            return Some(InputAction::SelectMode(index));
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::Space => Some(InputAction::NextMode),
            KeyCode::KeyR => Some(InputAction::Redraw),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            _ => None,
        }
    }

    /// Zero-based mode index for digit keys `1`-`9` (top row or numpad)
    fn digit_index(key: KeyCode) -> Option<usize> {
        let index = match key {
            KeyCode::Digit1 | KeyCode::Numpad1 => 0,
            KeyCode::Digit2 | KeyCode::Numpad2 => 1,
            KeyCode::Digit3 | KeyCode::Numpad3 => 2,
            KeyCode::Digit4 | KeyCode::Numpad4 => 3,
            KeyCode::Digit5 | KeyCode::Numpad5 => 4,
            KeyCode::Digit6 | KeyCode::Numpad6 => 5,
            KeyCode::Digit7 | KeyCode::Numpad7 => 6,
            KeyCode::Digit8 | KeyCode::Numpad8 => 7,
            KeyCode::Digit9 | KeyCode::Numpad9 => 8,
            _ => return None,
        };
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed),
            Some(InputAction::Exit)
        );
    }

    #[test]
    fn test_digits_select_modes() {
        let digits = [
            KeyCode::Digit1,
            KeyCode::Digit2,
            KeyCode::Digit3,
            KeyCode::Digit4,
            KeyCode::Digit5,
        ];
        for (i, key) in digits.into_iter().enumerate() {
            assert_eq!(
                InputMapper::map_keyboard(key, ElementState::Pressed),
                Some(InputAction::SelectMode(i)),
                "Key {:?}",
                key
            );
        }
    }

    #[test]
    fn test_numpad_matches_digit_row() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Numpad3, ElementState::Pressed),
            InputMapper::map_keyboard(KeyCode::Digit3, ElementState::Pressed)
        );
    }

    #[test]
    fn test_zero_not_mapped() {
        assert_eq!(InputMapper::map_keyboard(KeyCode::Digit0, ElementState::Pressed), None);
    }

    #[test]
    fn test_space_cycles() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Space, ElementState::Pressed),
            Some(InputAction::NextMode)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        for key in [KeyCode::Escape, KeyCode::Space, KeyCode::Digit1] {
            assert_eq!(InputMapper::map_keyboard(key, ElementState::Released), None);
        }
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyR, ElementState::Pressed),
            Some(InputAction::Redraw)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed),
            Some(InputAction::ToggleFullscreen)
        );
    }

    #[test]
    fn test_unbound_keys() {
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::Enter] {
            assert_eq!(InputMapper::map_keyboard(key, ElementState::Pressed), None);
        }
    }
}
