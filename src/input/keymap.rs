//! Input source: translation from key presses to calculator actions.
//!
//! Digit keys (`0`-`9` on the main keyboard and the numeric keypad) are
//! built in. Everything else goes through the configurable binding table, so
//! alias handling (numpad operators, `×`/`÷`, `x` for multiply) is data rather
//! than code.

use super::events::{Key, KeyPress};
use super::token::{Digit, Token};
use crate::config::{Action, KeyBinding, KeybindingError, KeybindingsConfig};
use std::collections::HashMap;

/// Result of looking up a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key produces a calculator token.
    Token(Token),
    /// The key triggers a session action handled by the front-end.
    Action(Action),
}

/// Key-to-action lookup table.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    action_map: HashMap<KeyBinding, Action>,
}

impl Keymap {
    /// Builds a keymap from the `[keybindings]` configuration table.
    ///
    /// # Errors
    /// Propagates invalid or duplicate bindings from
    /// [`KeybindingsConfig::build_action_map`].
    pub fn from_config(config: &KeybindingsConfig) -> Result<Self, KeybindingError> {
        Ok(Self::with_action_map(config.build_action_map()?))
    }

    pub fn with_action_map(action_map: HashMap<KeyBinding, Action>) -> Self {
        Self { action_map }
    }

    /// Number of configured (non-digit) bindings.
    pub fn len(&self) -> usize {
        self.action_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.action_map.is_empty()
    }

    /// Translates a key press, or returns `None` for unbound keys.
    pub fn resolve(&self, press: &KeyPress) -> Option<KeyOutcome> {
        if !press.modifiers.has_command_modifier() {
            if let Key::Char(c) | Key::Numpad(c) = press.key {
                if let Some(digit) = Digit::from_char(c) {
                    return Some(KeyOutcome::Token(Token::Digit(digit)));
                }
            }
        }

        let action = self.find_action(press)?;
        Some(match action.token() {
            Some(token) => KeyOutcome::Token(token),
            None => KeyOutcome::Action(action),
        })
    }

    fn find_action(&self, press: &KeyPress) -> Option<Action> {
        self.action_map
            .iter()
            .find(|(binding, _)| binding.matches_press(press))
            .map(|(_, action)| *action)
    }
}
