//! Semantic input tokens consumed by the calculator state machine.

use crate::engine::Operator;
use std::fmt;

/// A single decimal digit, `0` through `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit from its numeric value, or `None` if `value > 9`.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Creates a digit from an ASCII character `'0'..='9'`.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Input tokens produced by the input source (keymap, keypad clicks).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Digit key 0-9
    Digit(Digit),
    /// One of the four operator keys
    Operator(Operator),
    /// Decimal point key
    DecimalPoint,
    /// Equals / evaluate
    Equals,
    /// Delete the last typed character
    Delete,
    /// Clear everything
    ClearAll,
}

impl From<Digit> for Token {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Token {
    fn from(operator: Operator) -> Self {
        Self::Operator(operator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_bounds() {
        assert_eq!(Digit::new(0).map(Digit::value), Some(0));
        assert_eq!(Digit::new(9).map(Digit::as_char), Some('9'));
        assert!(Digit::new(10).is_none());
    }

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Digit::from_char('7'), Digit::new(7));
        assert!(Digit::from_char('a').is_none());
        assert!(Digit::from_char('.').is_none());
    }
}
