// Form field row component
//
// One bordered control plus the hint/error line under it. Rows are a
// fixed height so the form view can window them by index when the
// terminal is short.

use crate::booking::rules::DATE_FORMAT;
use crate::booking::FieldId;
use crate::tui::app::{App, Control, Focus};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows each field occupies: bordered input (3) plus the hint line (1)
pub const ROW_HEIGHT: u16 = 4;

/// Render one field row: the control itself and the line under it
pub fn render(f: &mut Frame, area: Rect, app: &App, id: FieldId) {
    if area.height < 3 {
        return;
    }

    let focused = app.focus == Focus::Field(id);
    let error = app.workflow.form().error(id);

    let box_area = Rect { height: 3, ..area };

    let border_color = if error.is_some() {
        app.theme.error
    } else if focused {
        app.theme.border_focused
    } else {
        app.theme.border
    };

    let mut title_spans = vec![Span::styled(
        format!(" {} ", id.label()),
        Style::default().fg(app.theme.label),
    )];
    if id.is_required() {
        title_spans.push(Span::styled("* ", Style::default().fg(app.theme.error)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(Line::from(title_spans));

    match &app.controls[id as usize] {
        Control::Text(input) => {
            // Room inside the borders, one cell reserved for the cursor
            let inner_width = (box_area.width.max(3) - 3) as usize;
            let scroll = input.visual_scroll(inner_width);

            let paragraph = if input.value().is_empty() {
                Paragraph::new(placeholder(id)).style(
                    Style::default()
                        .fg(app.theme.muted)
                        .add_modifier(Modifier::ITALIC),
                )
            } else {
                Paragraph::new(input.value())
                    .style(Style::default().fg(app.theme.foreground))
                    .scroll((0, scroll as u16))
            };
            f.render_widget(paragraph.block(block), box_area);

            if focused {
                f.set_cursor_position((
                    box_area.x + ((input.visual_cursor().max(scroll) - scroll) as u16) + 1,
                    box_area.y + 1,
                ));
            }
        }
        Control::Choice { options, selected } => {
            let value = options[*selected].as_str();
            let value_span = if value.is_empty() {
                Span::styled(
                    placeholder(id),
                    Style::default()
                        .fg(app.theme.muted)
                        .add_modifier(Modifier::ITALIC),
                )
            } else {
                Span::styled(value, Style::default().fg(app.theme.foreground))
            };

            let arrow = |active: bool| {
                if active && focused {
                    Style::default().fg(app.theme.border_focused)
                } else {
                    Style::default().fg(app.theme.muted)
                }
            };
            let line = Line::from(vec![
                Span::styled("◂ ", arrow(*selected > 0)),
                value_span,
                Span::styled(" ▸", arrow(*selected + 1 < options.len())),
            ]);

            f.render_widget(Paragraph::new(line).block(block), box_area);
        }
    }

    // Hint line: error wins, otherwise a per-field hint while focused
    if area.height < ROW_HEIGHT {
        return;
    }
    let hint_area = Rect {
        y: area.y + 3,
        height: 1,
        ..area
    };
    let line = if let Some(error) = error {
        Line::from(Span::styled(
            format!(" ⚠ {}", error),
            Style::default().fg(app.theme.error),
        ))
    } else if focused {
        match hint(app, id) {
            Some(text) => Line::from(Span::styled(
                format!(" {}", text),
                Style::default().fg(app.theme.muted),
            )),
            None => Line::default(),
        }
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(line), hint_area);
}

fn placeholder(id: FieldId) -> &'static str {
    match id {
        FieldId::Date => "YYYY-MM-DD",
        FieldId::Time => "Select a time",
        FieldId::Guests => "Select party size",
        FieldId::Occasion => "Select an occasion (optional)",
        FieldId::Name => "Your full name",
        FieldId::Email => "you@example.com",
        FieldId::Phone => "(555) 123-4567",
        FieldId::Dietary => "Allergies, vegetarian, vegan... (optional)",
        FieldId::SpecialRequests => "Anything we should prepare for? (optional)",
    }
}

fn hint(app: &App, id: FieldId) -> Option<String> {
    match id {
        FieldId::Date => {
            let bounds = app.workflow.form().bounds();
            Some(format!(
                "Bookings open {} to {}",
                bounds.min.format(DATE_FORMAT),
                bounds.max.format(DATE_FORMAT)
            ))
        }
        FieldId::Phone => Some("10 digits, masked as you type".to_string()),
        _ => None,
    }
}
