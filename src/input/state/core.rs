//! Calculator state machine and controller state.

use crate::config::SymbolsConfig;
use crate::engine::{Operator, display_value, format_number};
use crate::input::keymap::Keymap;
use crate::input::operand::Operand;

/// A binary operation waiting for its right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    /// Left-hand operand, as shown on the expression line
    pub lhs: f64,
    /// Operator to apply once the right-hand operand is known
    pub operator: Operator,
}

/// Snapshot of the most recently executed binary operation.
///
/// Pressing equals again re-applies `operator` and `num2` to the value on
/// the main display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LastOperation {
    pub num1: f64,
    pub num2: f64,
    pub operator: Operator,
}

/// Main calculator state for one session.
///
/// Holds the two display registers (the operand being typed and the pending
/// expression), the operator bookkeeping needed for chaining and
/// equals-repeat, and the keymap used to translate key presses. All mutation
/// goes through the handlers in `actions.rs`; every handler that changes
/// state sets `needs_redraw`.
#[derive(Debug)]
pub struct CalculatorState {
    /// Operand on the main display
    pub(super) operand: Operand,
    /// Text of the pending-expression line
    pub(super) expression: String,
    /// Operation waiting for a right-hand operand
    pub(super) pending: Option<PendingOperation>,
    /// Operator most recently selected (cleared only by clear-all)
    pub(super) current_operator: Option<Operator>,
    /// Last evaluated operation, for equals-repeat
    pub(super) last_operation: Option<LastOperation>,
    /// Last displayed result, while the main display still shows it untouched
    pub(super) last_result: Option<f64>,
    /// Operator symbols for the expression line
    symbols: SymbolsConfig,
    /// Key-to-action table
    pub(super) keymap: Keymap,
    /// Whether the user asked to end the session
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(SymbolsConfig::default(), Keymap::default())
    }
}

impl CalculatorState {
    /// Creates a cleared calculator using the given symbols and keymap.
    pub fn new(symbols: SymbolsConfig, keymap: Keymap) -> Self {
        Self {
            operand: Operand::new(),
            expression: String::new(),
            pending: None,
            current_operator: None,
            last_operation: None,
            last_result: None,
            symbols,
            keymap,
            should_exit: false,
            needs_redraw: true,
        }
    }

    /// The operand on the main display.
    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    /// The pending-expression line; empty when nothing is pending.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Operator most recently selected, if any.
    pub fn current_operator(&self) -> Option<Operator> {
        self.current_operator
    }

    /// Operation waiting for its right-hand operand, if any.
    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    pub fn last_operation(&self) -> Option<LastOperation> {
        self.last_operation
    }

    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    pub fn symbols(&self) -> &SymbolsConfig {
        &self.symbols
    }

    /// Display symbol for `operator`.
    pub fn symbol(&self, operator: Operator) -> &str {
        self.symbols.symbol(operator)
    }

    /// Whether the main display still shows the last result, unedited.
    pub(super) fn operand_is_last_result(&self) -> bool {
        self.last_result
            .is_some_and(|result| self.operand.value() == result)
    }

    /// Builds `<lhs><symbol>` for the expression line.
    pub(super) fn pending_text(&self, lhs: f64, operator: Operator) -> String {
        format!("{}{}", format_number(lhs), self.symbol(operator))
    }

    /// Evaluates `operator` over the operands and records the bookkeeping
    /// shared by chaining and equals: the last operation snapshot, the last
    /// result, and the main display.
    ///
    /// Returns the displayed result.
    pub(super) fn evaluate(&mut self, operator: Operator, num1: f64, num2: f64) -> f64 {
        let raw = operator.apply(num1, num2);
        let shown = display_value(raw);

        log::debug!(
            "Evaluated {} {} {} = {} (shown as {})",
            format_number(num1),
            operator.id(),
            format_number(num2),
            format_number(raw),
            format_number(shown)
        );

        self.last_operation = Some(LastOperation {
            num1,
            num2,
            operator,
        });
        self.last_result = Some(shown);
        self.operand = Operand::from_result(shown);
        shown
    }
}
