//! Keyboard event mapping.
//!
//! Turns discrete key events into calculator [`Action`]s. The engine never
//! sees keys, only actions.

use crate::calculator::{Action, Operation};
use crate::error::{CalcpadError, Result};
use serde::Deserialize;

/// A discrete key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    Enter,
    Escape,
    Backspace,
}

/// Letter keys standing in for keys a line-based terminal cannot deliver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub clear: char,
    pub backspace: char,
    pub toggle_sign: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            clear: 'c',
            backspace: 'b',
            toggle_sign: 'n',
        }
    }
}

impl KeyBindings {
    /// Reject bindings that shadow keypad keys or each other.
    pub fn validate(&self) -> Result<()> {
        let bindings = [
            ("clear", self.clear),
            ("backspace", self.backspace),
            ("toggle_sign", self.toggle_sign),
        ];

        for (i, &(action, key)) in bindings.iter().enumerate() {
            let taken_by_keypad = keypad_action(key).is_some();
            let taken_by_other = bindings[..i].iter().any(|&(_, other)| other == key);
            if taken_by_keypad || taken_by_other || key.is_whitespace() {
                return Err(CalcpadError::KeyBinding { action, key });
            }
        }

        Ok(())
    }
}

/// Map a key event to an action, or `None` if the key means nothing.
pub fn map_key(key: Key, bindings: &KeyBindings) -> Option<Action> {
    match key {
        Key::Enter => Some(Action::Equals),
        Key::Escape => Some(Action::Clear),
        Key::Backspace => Some(Action::Backspace),
        Key::Char(c) if c == bindings.clear => Some(Action::Clear),
        Key::Char(c) if c == bindings.backspace => Some(Action::Backspace),
        Key::Char(c) if c == bindings.toggle_sign => Some(Action::ToggleSign),
        Key::Char(c) => keypad_action(c),
    }
}

/// Keys with a fixed meaning on every keypad.
fn keypad_action(c: char) -> Option<Action> {
    match c {
        '0'..='9' => Some(Action::Digit(c)),
        '.' => Some(Action::Point),
        '=' => Some(Action::Equals),
        '%' => Some(Action::Percent),
        '±' => Some(Action::ToggleSign),
        _ => Operation::from_char(c).map(Action::Operation),
    }
}

/// Turn a typed line into the actions it spells, in order.
///
/// Whitespace separates nothing and unknown characters are skipped.
pub fn parse_keys(line: &str, bindings: &KeyBindings) -> Vec<Action> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .filter_map(|c| {
            let action = map_key(Key::Char(c), bindings);
            if action.is_none() {
                tracing::trace!(key = %c, "unmapped key");
            }
            action
        })
        .collect()
}
