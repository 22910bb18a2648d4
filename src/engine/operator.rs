//! Binary operators and identifier lookup.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Signature shared by the four arithmetic functions.
pub type OperatorFn = fn(f64, f64) -> f64;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// IEEE-754 division: `x / 0.0` is a signed infinity, `0.0 / 0.0` is NaN.
pub fn divide(a: f64, b: f64) -> f64 {
    a / b
}

/// Raised when an operator identifier is not one of `add`, `subtract`,
/// `multiply` or `divide`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator id '{id}' (expected add, subtract, multiply or divide)")]
pub struct InvalidOperatorError {
    pub id: String,
}

/// The four keypad operators.
///
/// Identifiers are stable (`add`, `subtract`, `multiply`, `divide`) and are what
/// key bindings and external callers refer to. Display symbols are not part of
/// the operator; they come from the `[symbols]` configuration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Stable identifier for this operator.
    pub fn id(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// The arithmetic function backing this operator.
    pub fn function(self) -> OperatorFn {
        match self {
            Self::Add => add,
            Self::Subtract => subtract,
            Self::Multiply => multiply,
            Self::Divide => divide,
        }
    }

    /// Applies the operator to `lhs` and `rhs`.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        (self.function())(lhs, rhs)
    }

    /// Looks up an operator by identifier.
    ///
    /// # Errors
    /// Returns [`InvalidOperatorError`] for anything other than the four known ids.
    pub fn from_id(id: &str) -> Result<Self, InvalidOperatorError> {
        Self::ALL
            .into_iter()
            .find(|op| op.id() == id)
            .ok_or_else(|| InvalidOperatorError { id: id.to_string() })
    }
}

impl FromStr for Operator {
    type Err = InvalidOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Maps an operator identifier to its function, or `None` for unknown ids.
///
/// Callers that need to fail fast should use [`Operator::from_id`] instead.
pub fn operator_function(id: &str) -> Option<OperatorFn> {
    Operator::from_id(id).ok().map(Operator::function)
}
