//! Library exports for the keycalc calculator core.
//!
//! The arithmetic engine and the input state machine are front-end agnostic;
//! the terminal binary wires them to stdin and a fixed-width text display, and
//! other front-ends can drive `CalculatorState` directly.

pub mod config;
pub mod display;
pub mod engine;
pub mod input;

pub use config::Config;
pub use display::Display;
pub use input::CalculatorState;
