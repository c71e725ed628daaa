// Status bar component
//
// Renders key hints for whatever currently has focus.

use crate::tui::app::{App, Control, Focus, View};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the hint line at the bottom of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.view {
        View::Form => form_hints(app),
        View::Confirmation => " y copy │ Y copy JSON │ n new reservation │ F2 logs │ q quit",
        View::Logs => " ↑/↓ scroll │ PgUp/PgDn page │ Home oldest │ End newest │ c clear │ Esc back",
        View::Help => " Esc back │ q quit",
    };

    let status = Paragraph::new(hints)
        .style(Style::default().fg(app.theme.muted))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

fn form_hints(app: &App) -> &'static str {
    match app.focus {
        Focus::Submit => " Enter book │ Tab next │ Shift+Tab prev │ F2 logs │ Ctrl+C quit",
        Focus::Field(id) => match app.controls[id as usize] {
            Control::Choice { .. } => {
                " ←/→ pick │ Enter/Tab next │ Shift+Tab prev │ F2 logs │ Ctrl+C quit"
            }
            Control::Text(_) => {
                " type to edit │ Enter/Tab next │ Shift+Tab prev │ F2 logs │ Ctrl+C quit"
            }
        },
    }
}
