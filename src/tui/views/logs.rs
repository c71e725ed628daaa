// Logs view - full-screen wrapper around the logs panel

use crate::tui::app::App;
use crate::tui::components::logs_panel;
use ratatui::{layout::Rect, Frame};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    logs_panel::render(f, area, app);
}
