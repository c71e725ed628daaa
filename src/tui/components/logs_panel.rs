//! Logs panel component
//!
//! Displays the tracing entries captured by the TUI log buffer, newest
//! at the bottom. Follows the tail until the user scrolls up.

use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::app::App;
use crate::util::fit_width;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the logs panel. `app.logs_scroll` counts entries back from
/// the newest; 0 sticks to the tail as new entries arrive.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let entries = app.log_buffer.get_all();
    let height = area.height.saturating_sub(2) as usize;
    let width = area.width.saturating_sub(2) as usize;

    // Window ending `logs_scroll` entries before the tail
    let end = entries.len().saturating_sub(app.logs_scroll);
    let start = end.saturating_sub(height);

    let items: Vec<ListItem> = entries[start..end]
        .iter()
        .map(|entry| {
            ListItem::new(fit_width(&format_entry(entry), width))
                .style(level_style(entry.level, &app.theme))
        })
        .collect();

    let title = if app.logs_scroll > 0 {
        format!(" Logs [{}↑] ", app.logs_scroll)
    } else {
        " Logs ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border_focused))
            .title(title),
    );

    f.render_widget(list, area);
}

fn format_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.target,
        entry.message
    )
}

fn level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.accent),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}
