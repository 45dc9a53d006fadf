//! Keypad calculator engine.
//!
//! [`calculator::CalculatorEngine`] is the state machine behind an on-screen
//! calculator. The remaining modules form a small keyboard adapter around it.

pub mod calculator;
pub mod config;
pub mod error;
pub mod keys;
pub mod logging;

pub use calculator::{Action, CalculatorEngine, Operator};
pub use error::CalcpadError;
