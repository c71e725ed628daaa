// Views - screen-level rendering
//
// Each view is a full-screen experience within the TUI: the form
// itself, the confirmation card, the captured logs, and the key
// reference. This module owns the shell layout (title / content /
// status) and dispatches the content slot on app.view.

mod confirmation;
mod form;
mod help;
mod logs;

use super::app::{App, View};
use super::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Theme background for the whole frame
    let bg = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title bar
            Constraint::Min(8),    // content
            Constraint::Length(2), // status bar
        ])
        .split(f.area());

    components::title_bar::render(f, chunks[0], app);

    match app.view {
        View::Form => form::render(f, chunks[1], app),
        View::Confirmation => confirmation::render(f, chunks[1], app),
        View::Logs => logs::render(f, chunks[1], app),
        View::Help => help::render(f, chunks[1], app),
    }

    components::status_bar::render(f, chunks[2], app);

    // Toast on top of everything
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}
