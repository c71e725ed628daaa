// Clipboard support for the confirmation view
//
// Guests can copy the confirmation card as plain text (y) or the
// booking itself as JSON (Y). Clipboard access fails on headless
// systems; callers surface the error as a toast instead of crashing.

use arboard::Clipboard;

/// Copy text to the system clipboard
pub fn copy_text(text: &str) -> Result<(), String> {
    let mut clipboard =
        Clipboard::new().map_err(|e| format!("Clipboard unavailable: {}", e))?;
    clipboard
        .set_text(text)
        .map_err(|e| format!("Copy failed: {}", e))
}
