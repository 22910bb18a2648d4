//! Generic key events and the textual key-sequence format.
//!
//! Front-ends translate their native events into [`KeyPress`] values. The
//! terminal front-end reads them from text: every character is a key press,
//! whitespace separates nothing and is skipped, and named keys are written in
//! angle brackets with optional modifiers, e.g. `12+3<Enter>` or `<Ctrl+Q>`.

use super::modifiers::Modifiers;
use crate::config::KeyBinding;
use std::fmt;
use thiserror::Error;

/// Generic key representation for cross-front-end compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Regular character key (digits, operator symbols, letters)
    Char(char),
    /// Return/Enter key (main keyboard or keypad)
    Return,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Escape key
    Escape,
    /// Space bar
    Space,
    /// Tab key
    Tab,
    /// Numeric keypad key, identified by the character it produces
    Numpad(char),
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Resolves a key name such as `Enter`, `Digit5`, `NumpadMultiply` or `x`.
    ///
    /// Names are matched case-insensitively; single characters map to
    /// [`Key::Char`] as-is.
    pub fn from_name(name: &str) -> Self {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::Char(c);
        }

        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "enter" | "return" => Self::Return,
            "numpadenter" => Self::Return,
            "backspace" => Self::Backspace,
            "delete" | "del" => Self::Delete,
            "escape" | "esc" => Self::Escape,
            "space" => Self::Space,
            "tab" => Self::Tab,
            "numpadadd" => Self::Numpad('+'),
            "numpadsubtract" => Self::Numpad('-'),
            "numpadmultiply" => Self::Numpad('*'),
            "numpaddivide" => Self::Numpad('/'),
            "numpaddecimal" => Self::Numpad('.'),
            _ => {
                if let Some(d) = single_digit_suffix(&lower, "digit") {
                    Self::Char(d)
                } else if let Some(d) = single_digit_suffix(&lower, "numpad") {
                    Self::Numpad(d)
                } else {
                    Self::Unknown
                }
            }
        }
    }

    /// Canonical name used for binding lookup.
    pub fn name(&self) -> String {
        match self {
            Self::Char(c) => c.to_string(),
            Self::Return => "Enter".to_string(),
            Self::Backspace => "Backspace".to_string(),
            Self::Delete => "Delete".to_string(),
            Self::Escape => "Escape".to_string(),
            Self::Space => "Space".to_string(),
            Self::Tab => "Tab".to_string(),
            Self::Numpad(c) => match c {
                '+' => "NumpadAdd".to_string(),
                '-' => "NumpadSubtract".to_string(),
                '*' => "NumpadMultiply".to_string(),
                '/' => "NumpadDivide".to_string(),
                '.' => "NumpadDecimal".to_string(),
                other => format!("Numpad{other}"),
            },
            Self::Unknown => String::new(),
        }
    }
}

fn single_digit_suffix(name: &str, prefix: &str) -> Option<char> {
    let rest = name.strip_prefix(prefix)?;
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => Some(c),
        _ => None,
    }
}

/// A key together with the modifiers held while pressing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::new(),
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.shift {
            f.write_str("Shift+")?;
        }
        if self.modifiers.alt {
            f.write_str("Alt+")?;
        }
        f.write_str(&self.key.name())
    }
}

/// Errors produced while parsing a textual key sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeySequenceError {
    #[error("unterminated key name starting at column {column}")]
    Unterminated { column: usize },

    #[error("empty key name at column {column}")]
    EmptyName { column: usize },

    #[error("unknown key '{name}' at column {column}")]
    UnknownKey { name: String, column: usize },
}

/// Parses a key sequence such as `5+3==` or `12<NumpadMultiply>2<Enter>`.
///
/// Columns in errors are 1-based character positions.
pub fn parse_key_sequence(input: &str) -> Result<Vec<KeyPress>, KeySequenceError> {
    let mut presses = Vec::new();
    let mut chars = input.chars().enumerate();

    while let Some((index, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c != '<' {
            presses.push(KeyPress::new(Key::Char(c)));
            continue;
        }

        let column = index + 1;
        let mut name = String::new();
        let mut terminated = false;
        for (_, next) in chars.by_ref() {
            if next == '>' {
                terminated = true;
                break;
            }
            name.push(next);
        }

        if !terminated {
            return Err(KeySequenceError::Unterminated { column });
        }
        if name.trim().is_empty() {
            return Err(KeySequenceError::EmptyName { column });
        }

        presses.push(parse_named_key(&name, column)?);
    }

    Ok(presses)
}

fn parse_named_key(name: &str, column: usize) -> Result<KeyPress, KeySequenceError> {
    let binding = KeyBinding::parse(name).map_err(|_| KeySequenceError::EmptyName { column })?;
    let key = Key::from_name(&binding.key);
    if key == Key::Unknown {
        return Err(KeySequenceError::UnknownKey {
            name: name.trim().to_string(),
            column,
        });
    }

    Ok(KeyPress::with_modifiers(
        key,
        Modifiers {
            ctrl: binding.ctrl,
            shift: binding.shift,
            alt: binding.alt,
        },
    ))
}
