use crate::config::Action;
use crate::engine::{InvalidOperatorError, Operator, format_number};
use crate::input::events::KeyPress;
use crate::input::keymap::KeyOutcome;
use crate::input::token::{Digit, Token};

use super::{CalculatorState, PendingOperation};

impl CalculatorState {
    /// Processes a key press event.
    ///
    /// The keymap turns the press into a token (digits, operators, equals,
    /// decimal point, delete, clear) or a session action (quit). Unbound keys
    /// are ignored.
    pub fn on_key_press(&mut self, press: KeyPress) {
        match self.keymap.resolve(&press) {
            Some(KeyOutcome::Token(token)) => self.handle_token(token),
            Some(KeyOutcome::Action(Action::Quit)) => {
                log::debug!("Quit requested via {press}");
                self.should_exit = true;
            }
            Some(KeyOutcome::Action(action)) => {
                log::debug!("Action {:?} has no calculator token", action);
            }
            None => log::debug!("Ignoring unbound key {press}"),
        }
    }

    /// Dispatches a single input token to its handler.
    pub fn handle_token(&mut self, token: Token) {
        log::debug!("Handling token {:?}", token);
        match token {
            Token::Digit(digit) => self.on_digit(digit),
            Token::Operator(operator) => self.on_operator(operator),
            Token::DecimalPoint => self.on_decimal_point(),
            Token::Equals => self.on_equals(),
            Token::Delete => self.on_delete(),
            Token::ClearAll => self.on_clear(),
        }
    }

    /// Types a digit.
    ///
    /// A digit typed over an untouched result starts a new number; otherwise
    /// it replaces the default `0` or is appended.
    pub fn on_digit(&mut self, digit: Digit) {
        if self.operand_is_last_result() {
            self.operand.replace_with(digit);
            self.last_result = None;
        } else {
            self.operand.push_digit(digit);
        }
        self.needs_redraw = true;
    }

    /// Types a decimal point. A second point in the same operand is a no-op.
    pub fn on_decimal_point(&mut self) {
        if self.operand_is_last_result() {
            self.operand.reset();
            self.last_result = None;
        }
        if self.operand.push_point() {
            self.needs_redraw = true;
        }
    }

    /// Selects an operator by identifier.
    ///
    /// # Errors
    /// Returns [`InvalidOperatorError`] for unknown identifiers; the state is
    /// left untouched in that case.
    pub fn on_operator_id(&mut self, id: &str) -> Result<(), InvalidOperatorError> {
        let operator = Operator::from_id(id)?;
        self.on_operator(operator);
        Ok(())
    }

    /// Selects an operator.
    ///
    /// - With an operation pending and the operand still at its default, the
    ///   pending operator is swapped for `operator`.
    /// - With an operation pending and a new operand typed, the pending
    ///   operation is evaluated first and its result becomes the left-hand
    ///   operand of `operator` (chaining).
    /// - Otherwise, including over an untouched chained result, the current
    ///   operand becomes the left-hand operand of a fresh operation.
    pub fn on_operator(&mut self, operator: Operator) {
        let pending = self.pending.filter(|_| !self.operand_is_last_result());
        match pending {
            Some(pending) if self.operand.is_default() => {
                self.pending = Some(PendingOperation {
                    lhs: pending.lhs,
                    operator,
                });
                self.expression = self.pending_text(pending.lhs, operator);
                log::debug!("Replaced {} with {}", pending.operator, operator);
            }
            Some(pending) => {
                let finished = format!(
                    "{}{}",
                    self.pending_text(pending.lhs, pending.operator),
                    self.operand
                );
                let rhs = self.operand.value();
                let result = self.evaluate(pending.operator, pending.lhs, rhs);

                self.expression = finished;
                self.pending = Some(PendingOperation {
                    lhs: result,
                    operator,
                });
            }
            None => {
                let lhs = self.operand.finite_value();
                self.pending = Some(PendingOperation { lhs, operator });
                self.expression = self.pending_text(lhs, operator);
                self.operand.reset();
                self.last_operation = None;
                self.last_result = None;
            }
        }

        self.current_operator = Some(operator);
        self.needs_redraw = true;
    }

    /// Evaluates the pending operation, or repeats the last one.
    ///
    /// Does nothing unless an expression is showing and an operator has been
    /// chosen. While the main display shows an untouched result (after `=`
    /// or a chain), each press applies the last operator and right-hand
    /// operand to that value. Once a new operand is typed, the pending
    /// operation is evaluated instead.
    pub fn on_equals(&mut self) {
        if self.expression.is_empty() || self.current_operator.is_none() {
            return;
        }

        let repeat = self
            .last_operation
            .filter(|_| self.pending.is_none() || self.operand_is_last_result());

        if let Some(last) = repeat {
            self.pending = None;
            let num1 = self.operand.finite_value();
            let repeated = format!(
                "{}{}",
                self.pending_text(num1, last.operator),
                format_number(last.num2)
            );
            self.evaluate(last.operator, num1, last.num2);
            self.expression = repeated;
        } else if let Some(pending) = self.pending.take() {
            let finished = format!(
                "{}{}",
                self.pending_text(pending.lhs, pending.operator),
                self.operand
            );
            let rhs = self.operand.value();
            self.evaluate(pending.operator, pending.lhs, rhs);
            self.expression = finished;
        } else {
            return;
        }

        self.needs_redraw = true;
    }

    /// Deletes the last typed character.
    ///
    /// An untouched result is cleared as a whole; an operand reduced to
    /// nothing falls back to `0`.
    pub fn on_delete(&mut self) {
        if self.operand_is_last_result() {
            self.operand.reset();
            self.last_result = None;
        } else {
            self.operand.pop();
        }
        self.needs_redraw = true;
    }

    /// Resets both registers and forgets all operator state.
    pub fn on_clear(&mut self) {
        self.operand.reset();
        self.expression.clear();
        self.pending = None;
        self.current_operator = None;
        self.last_operation = None;
        self.last_result = None;
        self.needs_redraw = true;
    }
}
