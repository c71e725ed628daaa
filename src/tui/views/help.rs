// Help view - key reference and theme list

use crate::config::VERSION;
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let row = |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(
                format!("  {:<16}", key),
                Style::default().fg(app.theme.accent),
            ),
            Span::styled(action, Style::default().fg(app.theme.foreground)),
        ])
    };

    let mut lines = vec![
        heading("Keys"),
        Line::default(),
        row("Tab / ↓", "Next field"),
        row("Shift+Tab / ↑", "Previous field"),
        row("Enter", "Advance; on the button, book the table"),
        row("← / →", "Pick a time, party size, or occasion"),
        row("F2", "Logs"),
        row("F3 / ?", "This help"),
        row("Esc", "Back"),
        row("y / Y", "Copy confirmation text / booking JSON"),
        row("n", "Start a new reservation (after booking)"),
        row("Ctrl+C", "Quit anywhere; q quits outside text fields"),
        Line::default(),
        heading("Themes"),
        Line::default(),
    ];

    for name in Theme::available() {
        let marker = if name == app.theme.name { "●" } else { "○" };
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", marker),
                Style::default().fg(app.theme.success),
            ),
            Span::styled(name, Style::default().fg(app.theme.foreground)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  Set with `theme` in the config file or RESERVA_THEME",
        Style::default().fg(app.theme.muted),
    )));

    let title = format!(" Help │ reserva v{} ", VERSION);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border_focused))
            .title(title),
    );

    f.render_widget(paragraph, area);
}
