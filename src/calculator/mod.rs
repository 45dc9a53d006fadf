//! Calculator engine for keypad-style input.
//!
//! This module provides:
//! - A state machine that accumulates operands and applies binary operators
//! - Fixed-point arithmetic so decimal results like `0.1 + 0.2` stay exact
//! - Number formatting for the display
//! - Copying the display text to the clipboard

mod action;
mod clipboard;
mod engine;
mod format;
mod operator;

pub use action::Action;
pub use clipboard::copy_to_clipboard;
pub use engine::{CalculatorEngine, EngineSnapshot};
pub use format::{
    ERROR_TOKEN, MAX_DECIMAL_PLACES, MAX_OPERAND_LEN, format_number, parse_operand,
};
pub use operator::Operator;
