// Title bar component
//
// Renders the restaurant name with a workflow state indicator.

use crate::booking::WorkflowState;
use crate::tui::app::App;
use crate::util::fit_width;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::spinner_char;

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let indicator = match app.workflow.state() {
        WorkflowState::Idle => String::new(),
        WorkflowState::Submitting { .. } => {
            format!(" {} processing", spinner_char(app.animation_frame))
        }
        WorkflowState::Confirmed { .. } => " ✓ booked".to_string(),
    };

    let text = fit_width(
        &format!(
            " 🍽 {} │ Reservations{}",
            app.config.restaurant.name, indicator
        ),
        area.width.saturating_sub(2) as usize,
    );

    let title = Paragraph::new(text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(ratatui::text::Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
