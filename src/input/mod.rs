//! Input handling and the calculator state machine.
//!
//! This module translates front-end key presses into semantic tokens (digit,
//! operator, decimal point, equals, delete, clear) through a configurable
//! keymap, and feeds those tokens to the calculator state machine that owns
//! the operand being typed, the pending expression, and the operator state
//! behind chaining and equals-repeat.

pub mod events;
pub mod keymap;
pub mod modifiers;
pub mod operand;
pub mod state;
pub mod token;

// Re-export commonly used types at module level
pub use events::{Key, KeyPress, KeySequenceError, parse_key_sequence};
pub use keymap::{KeyOutcome, Keymap};
pub use modifiers::Modifiers;
pub use operand::{DEFAULT_OPERAND, Operand};
pub use state::{CalculatorState, LastOperation, PendingOperation, Registers};
pub use token::{Digit, Token};
