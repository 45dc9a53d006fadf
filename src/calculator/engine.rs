//! The calculator state machine.
//!
//! [`CalculatorEngine`] holds the operand being typed, a stored left-hand
//! operand and a pending operator. Every operation is a synchronous state
//! transition; rejected input is silently ignored and never reported to the
//! caller. The adapter reads [`CalculatorEngine::display_text`] after each call.

use super::action::Action;
use super::format::{ERROR_TOKEN, MAX_DECIMAL_PLACES, MAX_OPERAND_LEN, format_number, parse_operand};
use super::operator::Operator;
use serde::Serialize;

/// Serializable copy of the engine state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EngineSnapshot {
    pub current_operand: String,
    pub previous_operand: String,
    pub pending_operator: Option<Operator>,
    pub reset_on_next_digit: bool,
}

/// Operand-accumulating calculator with fixed-point arithmetic.
#[derive(Clone, Debug)]
pub struct CalculatorEngine {
    current_operand: String,
    /// Empty when no left-hand operand is stored.
    previous_operand: String,
    pending_operator: Option<Operator>,
    reset_on_next_digit: bool,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self {
            current_operand: "0".to_string(),
            previous_operand: String::new(),
            pending_operator: None,
            reset_on_next_digit: false,
        }
    }

    /// Text to show on the display.
    pub fn display_text(&self) -> &str {
        &self.current_operand
    }

    /// Whether the display shows the division-by-zero error.
    pub fn is_error(&self) -> bool {
        self.current_operand == ERROR_TOKEN
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            current_operand: self.current_operand.clone(),
            previous_operand: self.previous_operand.clone(),
            pending_operator: self.pending_operator,
            reset_on_next_digit: self.reset_on_next_digit,
        }
    }

    /// Dispatch a resolved input action.
    pub fn apply(&mut self, action: Action) {
        tracing::trace!("apply {}", action);
        match action {
            Action::Digit(d) => self.append_digit(d),
            Action::DecimalPoint => self.append_decimal_point(),
            Action::Backspace => self.backspace(),
            Action::Clear => self.clear(),
            Action::Negate => self.negate(),
            Action::Percent => self.percent(),
            Action::Operator(op) => self.choose_operator(op),
            Action::Evaluate => self.evaluate(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Drop the last character of the current operand.
    ///
    /// On the error display this behaves like [`clear`](Self::clear).
    pub fn backspace(&mut self) {
        if self.is_error() {
            self.clear();
            return;
        }
        if self.current_operand == "0" {
            return;
        }
        if self.current_operand.chars().count() == 1 {
            self.current_operand = "0".to_string();
        } else {
            self.current_operand.pop();
        }
    }

    /// Append a digit character. Non-digits are ignored.
    pub fn append_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            tracing::debug!("ignoring non-digit input {:?}", digit);
            return;
        }

        if self.reset_on_next_digit {
            self.current_operand.clear();
            self.reset_on_next_digit = false;
        }
        // A lone zero, signed or not, is replaced rather than extended.
        if self.current_operand == "0" || self.current_operand == "-0" {
            if digit == '0' {
                return;
            }
            self.current_operand.pop();
        }
        if self.current_operand.len() >= MAX_OPERAND_LEN {
            tracing::trace!("operand full, dropping digit {}", digit);
            return;
        }
        self.current_operand.push(digit);
    }

    /// Append a decimal point. Not subject to the operand length cap.
    pub fn append_decimal_point(&mut self) {
        // A fresh operand keeps a visible leading zero: "0."
        if self.reset_on_next_digit {
            self.current_operand = "0".to_string();
            self.reset_on_next_digit = false;
        }
        if self.current_operand.contains('.') {
            return;
        }
        self.current_operand.push('.');
    }

    /// Flip the sign of the current operand.
    pub fn negate(&mut self) {
        if self.current_operand == "0" {
            return;
        }
        if let Some(value) = parse_operand(&self.current_operand) {
            self.current_operand = format_number(-value);
        }
    }

    /// Convert the current operand to a percentage.
    ///
    /// With a stored left-hand operand the result is that percentage of it
    /// (`200 + 10 %` gives `20`), otherwise the operand is divided by 100.
    pub fn percent(&mut self) {
        let Some(current) = parse_operand(&self.current_operand) else {
            return;
        };

        let value = if self.previous_operand.is_empty() {
            current / 100.0
        } else {
            match parse_operand(&self.previous_operand) {
                Some(previous) => current * previous / 100.0,
                None => return,
            }
        };
        self.current_operand = format_number(value);
    }

    /// Store the current operand and arm `op`, folding any pending operation
    /// first so chained operators evaluate left to right.
    ///
    /// On the error display this behaves like [`clear`](Self::clear) and the
    /// operator is not armed.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.is_error() {
            self.clear();
            return;
        }
        if self.current_operand.is_empty() {
            return;
        }
        if !self.previous_operand.is_empty() {
            self.evaluate();
            if self.is_error() {
                return;
            }
        }

        self.pending_operator = Some(op);
        self.previous_operand = std::mem::replace(&mut self.current_operand, "0".to_string());
        self.reset_on_next_digit = true;
    }

    /// Apply the pending operator to the stored and current operands.
    ///
    /// Does nothing when either operand fails to parse or no operator is
    /// pending. Division by zero puts the engine on the error display, as does
    /// a divisor that rounds to zero at the fixed-point scale.
    pub fn evaluate(&mut self) {
        let (Some(previous), Some(current)) = (
            parse_operand(&self.previous_operand),
            parse_operand(&self.current_operand),
        ) else {
            tracing::debug!(
                "evaluate skipped: previous={:?} current={:?}",
                self.previous_operand,
                self.current_operand
            );
            return;
        };
        let Some(op) = self.pending_operator else {
            return;
        };

        if op == Operator::Divide && current == 0.0 {
            tracing::debug!("division by zero: {} ÷ 0", previous);
            self.current_operand = ERROR_TOKEN.to_string();
            self.finish_computation();
            return;
        }

        let result = fixed_point(previous, current, op);
        tracing::debug!("{} {} {} = {}", previous, op, current, result);
        self.current_operand = format_number(result);
        self.finish_computation();
    }

    fn finish_computation(&mut self) {
        self.pending_operator = None;
        self.previous_operand.clear();
        self.reset_on_next_digit = true;
    }
}

/// Compute `a op b` on values scaled to integers by `10^MAX_DECIMAL_PLACES`.
///
/// The divisor must be non-zero for [`Operator::Divide`].
fn fixed_point(a: f64, b: f64, op: Operator) -> f64 {
    let factor = 10f64.powi(MAX_DECIMAL_PLACES as i32);
    let a = (a * factor).round();
    let b = (b * factor).round();

    match op {
        Operator::Add => (a + b) / factor,
        Operator::Subtract => (a - b) / factor,
        Operator::Multiply => (a * b) / (factor * factor),
        // Scale cancels out.
        Operator::Divide => a / b,
    }
}
