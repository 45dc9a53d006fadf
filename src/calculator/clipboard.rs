//! Clipboard functionality for copying the calculator display.

use crate::error::CalcpadError;
use arboard::Clipboard;

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), CalcpadError> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    tracing::debug!("copied {:?} to clipboard", text);
    Ok(())
}
