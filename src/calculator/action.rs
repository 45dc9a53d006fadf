//! Engine input actions.
//!
//! An [`Action`] is one button press or key press, already resolved from
//! whatever the adapter received. Actions have stable kebab-case names so
//! they can be bound to keys in the config file.

use super::operator::Operator;
use crate::error::CalcpadError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A single input to the calculator engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Action {
    /// Append a digit `0`..=`9`.
    Digit(char),
    DecimalPoint,
    Backspace,
    Clear,
    Negate,
    Percent,
    Operator(Operator),
    Evaluate,
}

impl Action {
    /// Digit action for an ASCII digit, `None` for anything else.
    pub fn digit(c: char) -> Option<Self> {
        c.is_ascii_digit().then_some(Self::Digit(c))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "digit-{}", d),
            Self::DecimalPoint => f.write_str("decimal-point"),
            Self::Backspace => f.write_str("backspace"),
            Self::Clear => f.write_str("clear"),
            Self::Negate => f.write_str("negate"),
            Self::Percent => f.write_str("percent"),
            Self::Operator(Operator::Add) => f.write_str("add"),
            Self::Operator(Operator::Subtract) => f.write_str("subtract"),
            Self::Operator(Operator::Multiply) => f.write_str("multiply"),
            Self::Operator(Operator::Divide) => f.write_str("divide"),
            Self::Evaluate => f.write_str("evaluate"),
        }
    }
}

impl FromStr for Action {
    type Err = CalcpadError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let action = match name {
            "decimal-point" => Self::DecimalPoint,
            "backspace" => Self::Backspace,
            "clear" => Self::Clear,
            "negate" => Self::Negate,
            "percent" => Self::Percent,
            "add" => Self::Operator(Operator::Add),
            "subtract" => Self::Operator(Operator::Subtract),
            "multiply" => Self::Operator(Operator::Multiply),
            "divide" => Self::Operator(Operator::Divide),
            "evaluate" => Self::Evaluate,
            other => {
                let mut chars = other.strip_prefix("digit-").unwrap_or("").chars();
                match (chars.next().and_then(Self::digit), chars.next()) {
                    (Some(action), None) => action,
                    _ => {
                        return Err(CalcpadError::UnknownAction {
                            name: name.to_string(),
                        });
                    }
                }
            }
        };
        Ok(action)
    }
}

impl TryFrom<String> for Action {
    type Error = CalcpadError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}
