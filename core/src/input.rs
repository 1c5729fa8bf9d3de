//! Keyboard state to per-player intents.
//!
//! Key events may arrive at any time between frames; they only mutate
//! `KeyState`. The frame driver takes a `snapshot` once per frame and hands it
//! to the simulation, so no key state is ever read mid-step.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{button, PlayerInput};

/// DOM `KeyboardEvent.keyCode` values.
pub mod keycode {
    pub const ENTER: u32 = 13;
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
    pub const W: u32 = 87;
}

/// Keys that would otherwise scroll or submit the page.
const SUPPRESSED: [u32; 5] = [
    keycode::LEFT,
    keycode::UP,
    keycode::RIGHT,
    keycode::DOWN,
    keycode::ENTER,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub jump: u32,
    pub left: u32,
    pub right: u32,
}

/// Player 1 on the arrow keys, player 2 on W/A/D.
pub fn default_bindings() -> [KeyBindings; 2] {
    [
        KeyBindings {
            jump: keycode::UP,
            left: keycode::LEFT,
            right: keycode::RIGHT,
        },
        KeyBindings {
            jump: keycode::W,
            left: keycode::A,
            right: keycode::D,
        },
    ]
}

pub fn prevents_default(code: u32) -> bool {
    SUPPRESSED.contains(&code)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    down: BTreeSet<u32>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press. Returns true when the browser default should be suppressed.
    pub fn key_down(&mut self, code: u32) -> bool {
        self.down.insert(code);
        prevents_default(code)
    }

    pub fn key_up(&mut self, code: u32) {
        self.down.remove(&code);
    }

    pub fn is_down(&self, code: u32) -> bool {
        self.down.contains(&code)
    }

    /// Drop every held key, e.g. when the page loses focus.
    pub fn clear(&mut self) {
        self.down.clear();
    }

    pub fn snapshot(&self, bindings: &[KeyBindings; 2]) -> [PlayerInput; 2] {
        bindings.map(|b| {
            let mut buttons = 0;
            if self.is_down(b.jump) {
                buttons |= button::JUMP;
            }
            if self.is_down(b.right) {
                buttons |= button::RIGHT;
            }
            if self.is_down(b.left) {
                buttons |= button::LEFT;
            }
            PlayerInput { buttons }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NULL_INPUT;

    #[test]
    fn empty_state_snapshots_null_input() {
        let keys = KeyState::new();
        assert_eq!(keys.snapshot(&default_bindings()), [NULL_INPUT; 2]);
    }

    #[test]
    fn arrows_drive_player_one() {
        let mut keys = KeyState::new();
        keys.key_down(keycode::UP);
        keys.key_down(keycode::RIGHT);
        let inputs = keys.snapshot(&default_bindings());
        assert_eq!(inputs[0].buttons, button::JUMP | button::RIGHT);
        assert_eq!(inputs[1], NULL_INPUT);
    }

    #[test]
    fn wad_drives_player_two() {
        let mut keys = KeyState::new();
        keys.key_down(keycode::W);
        keys.key_down(keycode::A);
        keys.key_down(keycode::D);
        let inputs = keys.snapshot(&default_bindings());
        assert_eq!(inputs[0], NULL_INPUT);
        assert_eq!(inputs[1].buttons, button::JUMP | button::LEFT | button::RIGHT);
    }

    #[test]
    fn release_clears_intent() {
        let mut keys = KeyState::new();
        keys.key_down(keycode::LEFT);
        keys.key_up(keycode::LEFT);
        assert!(!keys.is_down(keycode::LEFT));
        assert_eq!(keys.snapshot(&default_bindings())[0], NULL_INPUT);
    }

    #[test]
    fn only_navigation_keys_are_suppressed() {
        let mut keys = KeyState::new();
        assert!(keys.key_down(keycode::DOWN));
        assert!(keys.key_down(keycode::ENTER));
        assert!(!keys.key_down(keycode::W));
        assert!(!prevents_default(32));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut keys = KeyState::new();
        keys.key_down(keycode::DOWN);
        keys.key_down(81);
        assert_eq!(keys.snapshot(&default_bindings()), [NULL_INPUT; 2]);
        keys.clear();
        assert!(!keys.is_down(81));
    }
}
