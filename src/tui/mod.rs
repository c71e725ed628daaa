// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, submission timers)
// - Rendering the UI

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod views;

use crate::booking::SubmissionTicket;
use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, Focus, View};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and cleans up when done.
pub async fn run_tui(log_buffer: LogBuffer, config: Config) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Submission timers deliver finished tickets back through this channel
    let (submit_tx, mut submit_rx) = mpsc::channel(8);
    let mut app = App::new(config, log_buffer, submit_tx);

    let result = run_event_loop(&mut terminal, &mut app, &mut submit_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources at once: terminal input, the redraw tick,
/// and finished submission timers.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    submit_rx: &mut mpsc::Receiver<SubmissionTicket>,
) -> Result<()> {
    // Ticker for periodic redraws (spinner, toast expiry)
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick
            _ = tick_interval.tick() => {
                app.tick();
            }

            // A submission finished its processing delay
            Some(ticket) = submit_rx.recv() => {
                app.complete_submission(ticket);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Global → View-specific → Text editing
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    match key_event.kind {
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
            return;
        }
        KeyEventKind::Press => {}
        _ => return,
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    match app.view {
        View::Form => handle_form_keys(app, key_event),
        View::Confirmation => handle_confirmation_keys(app, &key_event),
        View::Logs => handle_logs_keys(app, &key_event),
        View::Help => handle_help_keys(app, &key_event),
    }
}

/// Global keys work the same regardless of view. Returns true if handled.
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;

    // Ctrl+C always quits, even mid-edit
    if key == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return true;
    }

    match key {
        KeyCode::F(2) => {
            if app.handle_key_press(key) {
                app.toggle_view(View::Logs);
            }
            true
        }
        KeyCode::F(3) => {
            if app.handle_key_press(key) {
                app.toggle_view(View::Help);
            }
            true
        }
        // Letter shortcuts only apply when a text field isn't eating them
        KeyCode::Char('q') | KeyCode::Char('Q') if !app.is_editing_text() => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Char('?') if !app.is_editing_text() => {
            if app.handle_key_press(key) {
                app.toggle_view(View::Help);
            }
            true
        }
        _ => false,
    }
}

fn handle_form_keys(app: &mut App, key_event: KeyEvent) {
    let key = key_event.code;
    match key {
        KeyCode::Tab | KeyCode::Down => {
            if app.handle_key_press(key) {
                app.focus_next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if app.handle_key_press(key) {
                app.focus_prev();
            }
        }
        KeyCode::Enter => {
            if app.handle_key_press(key) {
                match app.focus {
                    Focus::Submit => app.submit(),
                    // Enter walks the form like Tab, ending on the button
                    Focus::Field(_) => app.focus_next(),
                }
            }
        }
        // Text fields use Left/Right for the cursor; choices cycle
        KeyCode::Left => {
            if app.is_editing_text() {
                app.handle_edit_key(key_event);
            } else if app.handle_key_press(key) {
                app.cycle_choice(-1);
            }
        }
        KeyCode::Right => {
            if app.is_editing_text() {
                app.handle_edit_key(key_event);
            } else if app.handle_key_press(key) {
                app.cycle_choice(1);
            }
        }
        // Everything else is typing
        _ => {
            if app.is_editing_text() {
                app.handle_edit_key(key_event);
            }
        }
    }
}

fn handle_confirmation_keys(app: &mut App, key_event: &KeyEvent) {
    let key = key_event.code;
    if !app.handle_key_press(key) {
        return;
    }
    match key {
        KeyCode::Char('y') => app.copy_confirmation(),
        KeyCode::Char('Y') => app.copy_booking_json(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.reset_form(),
        _ => {}
    }
}

fn handle_logs_keys(app: &mut App, key_event: &KeyEvent) {
    let key = key_event.code;
    if !app.handle_key_press(key) {
        return;
    }
    match key {
        KeyCode::Up => app.scroll_logs(1),
        KeyCode::Down => app.scroll_logs(-1),
        KeyCode::PageUp => app.scroll_logs(10),
        KeyCode::PageDown => app.scroll_logs(-10),
        KeyCode::Home => app.scroll_logs(i64::MAX),
        KeyCode::End => app.scroll_logs(i64::MIN),
        KeyCode::Char('c') => {
            app.log_buffer.clear();
            app.logs_scroll = 0;
        }
        KeyCode::Esc => app.view = app.home_view(),
        _ => {}
    }
}

fn handle_help_keys(app: &mut App, key_event: &KeyEvent) {
    if !app.handle_key_press(key_event.code) {
        return;
    }
    if matches!(key_event.code, KeyCode::Esc | KeyCode::Enter) {
        app.view = app.home_view();
    }
}

/// Handle mouse input: the wheel scrolls whichever view is up
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let delta = match mouse_event.kind {
        MouseEventKind::ScrollUp => -1,
        MouseEventKind::ScrollDown => 1,
        _ => return,
    };
    match app.view {
        View::Form => app.scroll_form(delta),
        // Wheel up walks back toward older entries
        View::Logs => app.scroll_logs(-delta as i64),
        _ => {}
    }
}
