// Form view - the reservation form itself
//
// Field rows are fixed-height and windowed by index, so short terminals
// scroll instead of truncating. The focused row is always kept inside
// the window, which is what moves the viewport after a rejected submit
// jumps focus to the first errored field.

use crate::booking::FieldId;
use crate::tui::app::{App, Focus};
use crate::tui::components::field_row::{self, ROW_HEIGHT};
use crate::tui::components::spinner_char;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SUBMIT_HEIGHT: u16 = 3;
const FORM_WIDTH: u16 = 64;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    // Center the form in wide terminals
    let width = area.width.min(FORM_WIDTH);
    let area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let visible_rows = ((area.height / ROW_HEIGHT) as usize).max(1);
    app.ensure_focus_visible(visible_rows);

    let total_rows = FieldId::ALL.len() + 1; // submit row included
    let start = app.form_scroll.min(total_rows.saturating_sub(visible_rows));
    app.form_scroll = start;

    let mut y = area.y;
    for row in start..(start + visible_rows).min(total_rows) {
        let remaining = area.bottom().saturating_sub(y);
        if remaining == 0 {
            break;
        }
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height: ROW_HEIGHT.min(remaining),
        };
        if row < FieldId::ALL.len() {
            field_row::render(f, rect, app, FieldId::ALL[row]);
        } else {
            render_submit(
                f,
                Rect {
                    height: SUBMIT_HEIGHT.min(remaining),
                    ..rect
                },
                app,
            );
        }
        y += rect.height;
    }
}

fn render_submit(f: &mut Frame, area: Rect, app: &App) {
    if area.height < 3 {
        return;
    }

    let focused = app.focus == Focus::Submit;
    let submitting = app.workflow.is_submitting();

    let label = if submitting {
        format!(
            "{} Processing your reservation...",
            spinner_char(app.animation_frame)
        )
    } else {
        "Book a Table".to_string()
    };

    let (border_color, text_style) = if submitting {
        (app.theme.muted, Style::default().fg(app.theme.muted))
    } else if focused {
        (
            app.theme.border_focused,
            Style::default()
                .fg(app.theme.success)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (app.theme.border, Style::default().fg(app.theme.label))
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(border_color)),
        );

    f.render_widget(button, area);
}
