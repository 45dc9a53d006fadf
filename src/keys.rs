//! Keyboard mapping for driving the engine.
//!
//! Key scripts are plain text: every non-space character is a key, and
//! named keys are written in angle brackets, e.g. `12.5*4<Enter>`.

use crate::calculator::{Action, Operator};
use crate::error::CalcpadError;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

lazy_static! {
    /// A named key like `<Enter>`, or any single non-space character.
    static ref KEY_TOKEN: Regex = Regex::new(r"<([A-Za-z]+)>|(\S)").unwrap();
}

/// Split a key script into key names.
pub fn tokenize(script: &str) -> Vec<String> {
    KEY_TOKEN
        .captures_iter(script)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Key name to action bindings.
#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        for digit in '0'..='9' {
            if let Some(action) = Action::digit(digit) {
                bindings.insert(digit.to_string(), action);
            }
        }
        for op in Operator::ALL {
            let key = match op {
                Operator::Add => "+",
                Operator::Subtract => "-",
                Operator::Multiply => "*",
                Operator::Divide => "/",
            };
            bindings.insert(key.to_string(), Action::Operator(op));
        }

        let named = [
            (".", Action::DecimalPoint),
            ("Backspace", Action::Backspace),
            ("Delete", Action::Backspace),
            ("Escape", Action::Clear),
            ("Enter", Action::Evaluate),
            ("=", Action::Evaluate),
            ("%", Action::Percent),
            ("n", Action::Negate),
        ];
        for (key, action) in named {
            bindings.insert(key.to_string(), action);
        }

        Self { bindings }
    }
}

impl Keymap {
    /// Default bindings with user bindings layered on top.
    pub fn with_overrides(overrides: &BTreeMap<String, Action>) -> Self {
        let mut keymap = Self::default();
        for (key, action) in overrides {
            tracing::debug!("binding key {:?} to {}", key, action);
            keymap.bindings.insert(key.clone(), *action);
        }
        keymap
    }

    /// Look up the action bound to a key.
    pub fn resolve(&self, key: &str) -> Result<Action, CalcpadError> {
        self.bindings
            .get(key)
            .copied()
            .ok_or_else(|| CalcpadError::UnknownKey {
                key: key.to_string(),
            })
    }
}
