//! Clipboard support for the `copy` command.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Place text on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("failed to access clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("failed to copy to clipboard")
}
