//! The operand being typed on the main display.
//!
//! Operands stay as text while they are being entered so that partial input
//! such as `"3."` survives until the next digit arrives. Text is only parsed
//! when an operation needs the number.

use crate::engine::{display_value, format_number};
use crate::input::token::Digit;
use std::fmt;

/// Text shown when nothing has been typed.
pub const DEFAULT_OPERAND: &str = "0";

/// Numeric text in progress. Never empty; starts out as [`DEFAULT_OPERAND`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    text: String,
}

impl Default for Operand {
    fn default() -> Self {
        Self::new()
    }
}

impl Operand {
    /// Creates the default operand `"0"`.
    pub fn new() -> Self {
        Self {
            text: DEFAULT_OPERAND.to_string(),
        }
    }

    /// Creates an operand showing an evaluated result.
    ///
    /// The value is rounded with [`display_value`], so infinities and NaN show
    /// as the default.
    pub fn from_result(value: f64) -> Self {
        Self {
            text: format_number(display_value(value)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the operand still shows the untouched default.
    pub fn is_default(&self) -> bool {
        self.text == DEFAULT_OPERAND
    }

    pub fn has_point(&self) -> bool {
        self.text.contains('.')
    }

    /// Replaces the default with `digit`, otherwise appends it.
    pub fn push_digit(&mut self, digit: Digit) {
        if self.is_default() {
            self.text.clear();
        }
        self.text.push(digit.as_char());
    }

    /// Replaces the whole operand with a single digit.
    pub fn replace_with(&mut self, digit: Digit) {
        self.text.clear();
        self.text.push(digit.as_char());
    }

    /// Appends a decimal point unless one is already present.
    ///
    /// Returns `true` if the text changed.
    pub fn push_point(&mut self) -> bool {
        if self.has_point() {
            return false;
        }
        self.text.push('.');
        true
    }

    /// Removes the last character, falling back to the default when nothing
    /// numeric would remain.
    pub fn pop(&mut self) {
        self.text.pop();
        if self.text.is_empty() || self.text == "-" {
            self.reset();
        }
    }

    /// Resets to the default `"0"`.
    pub fn reset(&mut self) {
        self.text.clear();
        self.text.push_str(DEFAULT_OPERAND);
    }

    /// Parses the text as a number; unparsable text yields NaN.
    pub fn value(&self) -> f64 {
        self.text.parse().unwrap_or(f64::NAN)
    }

    /// Parsed value with NaN and infinities coerced to `0`.
    pub fn finite_value(&self) -> f64 {
        let value = self.value();
        if value.is_finite() { value } else { 0.0 }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
