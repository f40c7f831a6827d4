// src/input.rs

use winit::keyboard::KeyCode;

use crate::error::Result;
use crate::koch::checked_iterations;

/// ASCII escape (octal 033).
pub const ESCAPE_ASCII: u8 = 0o33;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    MoreIterations,
    FewerIterations,
    None,
}

pub fn action_for_ascii(code: u8) -> KeyAction {
    match code {
        ESCAPE_ASCII => KeyAction::Quit,
        b'+' | b'=' => KeyAction::MoreIterations,
        b'-' => KeyAction::FewerIterations,
        _ => KeyAction::None,
    }
}

pub fn action_for_key(key: KeyCode) -> KeyAction {
    match key {
        KeyCode::Escape => KeyAction::Quit,
        KeyCode::Equal | KeyCode::NumpadAdd => KeyAction::MoreIterations,
        KeyCode::Minus | KeyCode::NumpadSubtract => KeyAction::FewerIterations,
        _ => KeyAction::None,
    }
}

/// Maps typed text when it is a single ASCII character.
pub fn action_for_text(text: &str) -> KeyAction {
    match text.as_bytes() {
        [code] => action_for_ascii(*code),
        _ => KeyAction::None,
    }
}

/// The physical key decides first; layouts that put `+` or `-` elsewhere fall back to the typed text.
pub fn action_for_press(key: Option<KeyCode>, text: Option<&str>) -> KeyAction {
    match key.map(action_for_key) {
        Some(KeyAction::None) | None => text.map_or(KeyAction::None, action_for_text),
        Some(action) => action,
    }
}

impl KeyAction {
    /// Iteration count after applying this action, validated against the allowed range.
    pub fn apply_to_iterations(self, iterations: u32) -> Result<u32> {
        let delta = match self {
            KeyAction::MoreIterations => 1,
            KeyAction::FewerIterations => -1,
            KeyAction::Quit | KeyAction::None => 0,
        };
        checked_iterations(iterations as i64 + delta)
    }
}
