// Confirmation view - the booked reservation card

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CARD_WIDTH: u16 = 68;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    // Only empty between a reset and the next key event
    let Some(card) = app.confirmation() else {
        return;
    };

    let width = area.width.min(CARD_WIDTH);
    let inner_width = width.saturating_sub(4).max(1) as usize;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::default());
    for detail in &card.lines {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>21}  ", detail.label),
                Style::default().fg(app.theme.muted),
            ),
            Span::styled(
                detail.value.clone(),
                Style::default().fg(app.theme.foreground),
            ),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        card.footer.clone(),
        Style::default()
            .fg(app.theme.muted)
            .add_modifier(Modifier::ITALIC),
    )));

    // Card height: content plus borders, with the footer wrapped
    let footer_rows = (card.footer.len() / inner_width + 1) as u16;
    let height = (lines.len() as u16 + footer_rows + 1).min(area.height);

    let card_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.success))
        .title(Line::from(Span::styled(
            format!(" ✓ {} ", card.heading),
            Style::default()
                .fg(app.theme.success)
                .add_modifier(Modifier::BOLD),
        )));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);

    f.render_widget(paragraph, card_area);
}
