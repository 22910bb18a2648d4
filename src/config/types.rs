//! Configuration type definitions.

use crate::engine::Operator;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest allowed display width in columns.
pub const MIN_DISPLAY_WIDTH: u16 = 4;
/// Largest allowed display width in columns.
pub const MAX_DISPLAY_WIDTH: u16 = 80;

/// Display settings for the terminal front-end.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DisplayConfig {
    /// Width of both display lines in columns (valid range: 4 - 80).
    /// Longer text is elided from the left.
    #[serde(default = "default_width")]
    pub width: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
        }
    }
}

impl DisplayConfig {
    /// Sets the width, clamping it to the supported range.
    pub fn set_width(&mut self, width: u16) {
        if !(MIN_DISPLAY_WIDTH..=MAX_DISPLAY_WIDTH).contains(&width) {
            log::warn!(
                "Invalid display width {}, clamping to {}-{} range",
                width,
                MIN_DISPLAY_WIDTH,
                MAX_DISPLAY_WIDTH
            );
        }
        self.width = width.clamp(MIN_DISPLAY_WIDTH, MAX_DISPLAY_WIDTH);
    }
}

/// Problems with a `[symbols]` table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolsError {
    #[error("symbol for '{operator}' is empty")]
    Empty { operator: Operator },

    #[error("symbol '{symbol}' for '{operator}' contains digits or '.'")]
    Numeric { operator: Operator, symbol: String },

    #[error("'{first}' and '{second}' share the symbol '{symbol}'")]
    Shared {
        first: Operator,
        second: Operator,
        symbol: String,
    },
}

/// Operator symbols shown in the pending expression.
///
/// The symbol is purely presentational: the state machine keys everything on
/// [`Operator`], so a skin can use `×`/`÷` without touching key bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SymbolsConfig {
    #[serde(default = "default_add_symbol")]
    pub add: String,

    #[serde(default = "default_subtract_symbol")]
    pub subtract: String,

    #[serde(default = "default_multiply_symbol")]
    pub multiply: String,

    #[serde(default = "default_divide_symbol")]
    pub divide: String,
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            add: default_add_symbol(),
            subtract: default_subtract_symbol(),
            multiply: default_multiply_symbol(),
            divide: default_divide_symbol(),
        }
    }
}

impl SymbolsConfig {
    /// Symbol for the given operator.
    pub fn symbol(&self, operator: Operator) -> &str {
        match operator {
            Operator::Add => &self.add,
            Operator::Subtract => &self.subtract,
            Operator::Multiply => &self.multiply,
            Operator::Divide => &self.divide,
        }
    }

    /// Checks that every symbol is non-empty, free of digits and decimal
    /// points, and distinct from the others.
    ///
    /// # Errors
    /// Returns the first [`SymbolsError`] found.
    pub fn validate(&self) -> Result<(), SymbolsError> {
        for operator in Operator::ALL {
            let symbol = self.symbol(operator);
            if symbol.trim().is_empty() {
                return Err(SymbolsError::Empty { operator });
            }
            if symbol.chars().any(|c| c.is_ascii_digit() || c == '.') {
                return Err(SymbolsError::Numeric {
                    operator,
                    symbol: symbol.to_string(),
                });
            }
        }

        for (i, first) in Operator::ALL.iter().enumerate() {
            for second in &Operator::ALL[i + 1..] {
                if self.symbol(*first) == self.symbol(*second) {
                    return Err(SymbolsError::Shared {
                        first: *first,
                        second: *second,
                        symbol: self.symbol(*first).to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u16 {
    16
}

fn default_add_symbol() -> String {
    "+".to_string()
}

fn default_subtract_symbol() -> String {
    "-".to_string()
}

fn default_multiply_symbol() -> String {
    "*".to_string()
}

fn default_divide_symbol() -> String {
    "/".to_string()
}
