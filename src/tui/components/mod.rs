// Reusable TUI components

pub mod field_row;
pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;

const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Spinner glyph for the given animation frame
pub fn spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}
