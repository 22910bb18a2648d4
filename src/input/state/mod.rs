mod actions;
mod core;
mod render;
#[cfg(test)]
mod tests;

pub use self::core::{CalculatorState, LastOperation, PendingOperation};
pub use render::Registers;
