use super::CalculatorState;

/// The two display registers, as text, for a display adapter to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    /// Pending-expression line (secondary display)
    pub expression: String,
    /// Operand line (main display)
    pub operand: String,
}

impl CalculatorState {
    /// Returns the current display registers.
    pub fn registers(&self) -> Registers {
        Registers {
            expression: self.expression.clone(),
            operand: self.operand.to_string(),
        }
    }

    /// Takes and clears the redraw flag.
    ///
    /// Front-ends call this after feeding input to decide whether to
    /// re-render.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
