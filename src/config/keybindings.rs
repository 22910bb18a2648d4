//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable key-to-action table used by the input
//! source. Digit keys are always recognised and are not configurable; every
//! other keypad action can be bound to any number of keys.

use crate::engine::Operator;
use crate::input::events::{Key, KeyPress};
use crate::input::token::Token;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// All actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Operators
    Add,
    Subtract,
    Multiply,
    Divide,

    // Evaluation and editing
    Equals,
    DecimalPoint,
    Delete,
    ClearAll,

    // Session
    Quit,
}

impl Action {
    /// The calculator token this action produces, or `None` for session
    /// actions handled by the front-end.
    pub fn token(self) -> Option<Token> {
        match self {
            Self::Add => Some(Token::Operator(Operator::Add)),
            Self::Subtract => Some(Token::Operator(Operator::Subtract)),
            Self::Multiply => Some(Token::Operator(Operator::Multiply)),
            Self::Divide => Some(Token::Operator(Operator::Divide)),
            Self::Equals => Some(Token::Equals),
            Self::DecimalPoint => Some(Token::DecimalPoint),
            Self::Delete => Some(Token::Delete),
            Self::ClearAll => Some(Token::ClearAll),
            Self::Quit => None,
        }
    }
}

/// Errors raised while parsing keybinding strings or building the action map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeybindingError {
    #[error("Empty keybinding string")]
    Empty,

    #[error("No key specified in: {0}")]
    MissingKey(String),

    #[error("Duplicate keybinding '{binding}' assigned to both {existing:?} and {action:?}")]
    Duplicate {
        binding: String,
        existing: Action,
        action: Action,
    },

    #[error("Keybinding '{0}' shadows a digit key")]
    ShadowsDigit(String),
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Q", "NumpadMultiply" or "+".
    ///
    /// Modifiers can appear in any order and spaces around '+' are allowed.
    /// Known key names are stored in canonical form, so "Return" and "Enter"
    /// produce the same binding.
    pub fn parse(s: &str) -> Result<Self, KeybindingError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeybindingError::Empty);
        }

        let s_normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in s_normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(KeybindingError::MissingKey(s.to_string()));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]; rejoining the empty parts gives '+'
        let raw_key = key_parts.join("+");
        let raw_key = if raw_key.is_empty() {
            "+".to_string()
        } else {
            raw_key
        };

        let key = match Key::from_name(&raw_key) {
            Key::Unknown => raw_key,
            // Letters under Ctrl/Alt match either case, so store one form
            Key::Char(c) if (ctrl || alt) && c.is_ascii_alphabetic() => {
                c.to_ascii_uppercase().to_string()
            }
            known => known.name(),
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Whether this binding would capture a plain digit key press.
    pub fn is_digit_key(&self) -> bool {
        if self.ctrl || self.alt {
            return false;
        }
        matches!(
            Key::from_name(&self.key),
            Key::Char(c) | Key::Numpad(c) if c.is_ascii_digit()
        )
    }

    /// Check if this keybinding matches a key name and modifier state.
    ///
    /// Shift is ignored for single-character keys because the character
    /// already reflects it. Letters under Ctrl/Alt compare case-insensitively.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        let single_char = key.chars().count() == 1;
        let same_key = if ctrl || alt {
            self.key.eq_ignore_ascii_case(key)
        } else {
            self.key == key
        };
        same_key
            && self.ctrl == ctrl
            && self.alt == alt
            && (single_char || self.shift == shift)
    }

    /// Convenience wrapper around [`KeyBinding::matches`] for a key press.
    pub fn matches_press(&self, press: &KeyPress) -> bool {
        self.matches(
            &press.key.name(),
            press.modifiers.ctrl,
            press.modifiers.shift,
            press.modifiers.alt,
        )
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// multiply = ["*", "x", "NumpadMultiply"]
/// equals = ["=", "Enter"]
/// quit = ["Ctrl+Q"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_add")]
    pub add: Vec<String>,

    #[serde(default = "default_subtract")]
    pub subtract: Vec<String>,

    #[serde(default = "default_multiply")]
    pub multiply: Vec<String>,

    #[serde(default = "default_divide")]
    pub divide: Vec<String>,

    #[serde(default = "default_equals")]
    pub equals: Vec<String>,

    #[serde(default = "default_decimal_point")]
    pub decimal_point: Vec<String>,

    #[serde(default = "default_delete")]
    pub delete: Vec<String>,

    #[serde(default = "default_clear_all")]
    pub clear_all: Vec<String>,

    #[serde(default = "default_quit")]
    pub quit: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            add: default_add(),
            subtract: default_subtract(),
            multiply: default_multiply(),
            divide: default_divide(),
            equals: default_equals(),
            decimal_point: default_decimal_point(),
            delete: default_delete(),
            clear_all: default_clear_all(),
            quit: default_quit(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions.
    ///
    /// Returns an error if any keybinding string is invalid, if duplicates are
    /// detected, or if a binding shadows a digit key.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, KeybindingError> {
        let mut map = HashMap::new();

        let groups: [(&[String], Action); 9] = [
            (self.add.as_slice(), Action::Add),
            (self.subtract.as_slice(), Action::Subtract),
            (self.multiply.as_slice(), Action::Multiply),
            (self.divide.as_slice(), Action::Divide),
            (self.equals.as_slice(), Action::Equals),
            (self.decimal_point.as_slice(), Action::DecimalPoint),
            (self.delete.as_slice(), Action::Delete),
            (self.clear_all.as_slice(), Action::ClearAll),
            (self.quit.as_slice(), Action::Quit),
        ];

        for (bindings, action) in groups {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if binding.is_digit_key() {
                    return Err(KeybindingError::ShadowsDigit(binding_str.clone()));
                }
                if let Some(existing) = map.insert(binding, action) {
                    return Err(KeybindingError::Duplicate {
                        binding: binding_str.clone(),
                        existing,
                        action,
                    });
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_add() -> Vec<String> {
    vec!["+".to_string(), "NumpadAdd".to_string()]
}

fn default_subtract() -> Vec<String> {
    vec!["-".to_string(), "NumpadSubtract".to_string()]
}

fn default_multiply() -> Vec<String> {
    vec![
        "*".to_string(),
        "x".to_string(),
        "X".to_string(),
        "×".to_string(),
        "NumpadMultiply".to_string(),
    ]
}

fn default_divide() -> Vec<String> {
    vec![
        "/".to_string(),
        "÷".to_string(),
        "NumpadDivide".to_string(),
    ]
}

fn default_equals() -> Vec<String> {
    vec!["=".to_string(), "Enter".to_string()]
}

fn default_decimal_point() -> Vec<String> {
    vec![".".to_string(), "NumpadDecimal".to_string()]
}

fn default_delete() -> Vec<String> {
    vec!["Backspace".to_string()]
}

fn default_clear_all() -> Vec<String> {
    vec!["Escape".to_string(), "c".to_string(), "C".to_string()]
}

fn default_quit() -> Vec<String> {
    vec!["Ctrl+Q".to_string()]
}
