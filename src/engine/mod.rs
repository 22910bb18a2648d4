//! Arithmetic engine.
//!
//! Pure, stateless functions for the four binary operators plus the rounding
//! and text formatting applied to every evaluated result. Division by zero is
//! not an error here: IEEE-754 infinities and NaN flow through to
//! [`format_result`], which turns NaN into `0`.

mod format;
mod operator;

pub use format::{RESULT_DECIMALS, display_value, format_number, format_result};
pub use operator::{
    InvalidOperatorError, Operator, OperatorFn, add, divide, multiply, operator_function, subtract,
};
