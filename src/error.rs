//! Error types for the calcpad crate.
//!
//! The engine itself never fails; these cover the adapter side: key
//! resolution, configuration loading and clipboard access.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcpadError {
    #[error("No action is bound to key '{key}'")]
    UnknownKey { key: String },

    #[error("Unknown action name '{name}'")]
    UnknownAction { name: String },

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Clipboard error: {reason}")]
    Clipboard { reason: String },
}

impl From<arboard::Error> for CalcpadError {
    fn from(e: arboard::Error) -> Self {
        CalcpadError::Clipboard {
            reason: e.to_string(),
        }
    }
}
