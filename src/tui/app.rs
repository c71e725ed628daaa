// Application state for the reservation desk TUI
//
// App owns the booking workflow plus everything screen-related: which
// view is on top, which control has focus, the editing state of each
// control, toasts, and the log buffer backing the logs view. Booking
// rules live in crate::booking; this layer only routes input and keeps
// the on-screen controls in step with the form.

use std::time::Duration;

use chrono::{Days, Local, NaiveDate};
use crossterm::event::{Event, KeyCode, KeyEvent};
use tokio::sync::mpsc;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use crate::booking::confirmation::{self, Confirmation};
use crate::booking::phone;
use crate::booking::rules::DATE_FORMAT;
use crate::booking::{BookingWorkflow, FieldId, SubmissionTicket, SubmitOutcome};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::theme::Theme;

use super::clipboard;
use super::components::Toast;
use super::input::InputHandler;

/// Which screen is on top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    Confirmation,
    Logs,
    Help,
}

/// What has keyboard focus in the form view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    Submit,
}

/// One on-screen control, parallel to `FieldId::ALL`
pub enum Control {
    /// Free text, edited through tui-input
    Text(Input),
    /// Closed option list cycled with Left/Right. Index 0 is the empty
    /// "nothing picked yet" entry so required checks can fire.
    Choice {
        options: Vec<String>,
        selected: usize,
    },
}

impl Control {
    pub fn value(&self) -> &str {
        match self {
            Control::Text(input) => input.value(),
            Control::Choice { options, selected } => options[*selected].as_str(),
        }
    }
}

/// Dinner service slots, half-hour steps
fn time_slots() -> Vec<String> {
    let mut slots = vec![String::new()];
    for hour in 17..=21 {
        slots.push(format!("{:02}:00", hour));
        slots.push(format!("{:02}:30", hour));
    }
    slots
}

fn guest_options(max_party: u8) -> Vec<String> {
    let mut options = vec![String::new()];
    options.extend((1..=max_party).map(|n| n.to_string()));
    options
}

fn occasion_options() -> Vec<String> {
    [
        "",
        "Birthday",
        "Anniversary",
        "Date Night",
        "Business Dinner",
        "Celebration",
        "Other",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn build_controls(config: &Config) -> [Control; FieldId::ALL.len()] {
    [
        Control::Text(Input::default()), // Date
        Control::Choice {
            options: time_slots(),
            selected: 0,
        },
        Control::Choice {
            options: guest_options(config.booking.max_party),
            selected: 0,
        },
        Control::Choice {
            options: occasion_options(),
            selected: 0,
        },
        Control::Text(Input::default()), // Name
        Control::Text(Input::default()), // Email
        Control::Text(Input::default()), // Phone
        Control::Text(Input::default()), // Dietary
        Control::Text(Input::default()), // Special requests
    ]
}

/// Application state
pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub workflow: BookingWorkflow,
    pub controls: [Control; FieldId::ALL.len()],
    pub view: View,
    pub focus: Focus,
    pub form_scroll: usize,
    pub logs_scroll: usize,
    pub should_quit: bool,
    pub toast: Option<Toast>,
    pub log_buffer: LogBuffer,
    pub input_handler: InputHandler,
    pub animation_frame: usize,
    submit_tx: mpsc::Sender<SubmissionTicket>,
}

impl App {
    pub fn new(
        config: Config,
        log_buffer: LogBuffer,
        submit_tx: mpsc::Sender<SubmissionTicket>,
    ) -> Self {
        let theme = Theme::by_name(&config.theme);
        let latency = Duration::from_millis(config.booking.submit_latency_ms);
        let workflow = BookingWorkflow::new(Self::today(), config.booking.advance_months, latency);
        let controls = build_controls(&config);

        let mut app = Self {
            config,
            theme,
            workflow,
            controls,
            view: View::default(),
            focus: Focus::Field(FieldId::Date),
            form_scroll: 0,
            logs_scroll: 0,
            should_quit: false,
            toast: None,
            log_buffer,
            input_handler: InputHandler::with_default_config(),
            animation_frame: 0,
            submit_tx,
        };

        if app.config.demo_mode {
            app.apply_demo_prefill();
        }

        app
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    // ── Focus and editing ───────────────────────────────────────────────

    /// Copy a control's current value into the form
    fn sync_field(&mut self, id: FieldId) {
        let value = self.controls[id as usize].value().to_string();
        self.workflow.form_mut().set_value(id, value);
    }

    /// Leaving a field validates it, mirroring a blur check
    fn blur_current(&mut self) {
        if let Focus::Field(id) = self.focus {
            if !self.workflow.form_mut().validate_field(id, Self::today()) {
                tracing::debug!(field = %id, "field failed validation on blur");
            }
            // Out-of-window dates still pass validation; flag them for
            // the operator in the logs view.
            if id == FieldId::Date {
                let form = self.workflow.form();
                if let Ok(date) = NaiveDate::parse_from_str(form.value(id).trim(), DATE_FORMAT) {
                    if !form.bounds().contains(date) {
                        tracing::warn!(%date, "date outside the booking window");
                    }
                }
            }
        }
    }

    pub fn focus_next(&mut self) {
        self.blur_current();
        self.focus = match self.focus {
            Focus::Field(id) => {
                let idx = id as usize + 1;
                if idx >= FieldId::ALL.len() {
                    Focus::Submit
                } else {
                    Focus::Field(FieldId::ALL[idx])
                }
            }
            Focus::Submit => Focus::Field(FieldId::Date),
        };
    }

    pub fn focus_prev(&mut self) {
        self.blur_current();
        self.focus = match self.focus {
            Focus::Field(FieldId::Date) => Focus::Submit,
            Focus::Field(id) => Focus::Field(FieldId::ALL[id as usize - 1]),
            Focus::Submit => Focus::Field(FieldId::SpecialRequests),
        };
    }

    /// True when keystrokes belong to a text control rather than chrome
    pub fn is_editing_text(&self) -> bool {
        self.view == View::Form
            && matches!(
                self.focus,
                Focus::Field(id) if matches!(self.controls[id as usize], Control::Text(_))
            )
    }

    /// Feed a key into the focused text control. The phone field re-masks
    /// after every keystroke; rebuilding the input drops the cursor at the
    /// end, which is also what the mask rewrite feels like in a browser.
    pub fn handle_edit_key(&mut self, key: KeyEvent) {
        let Focus::Field(id) = self.focus else { return };
        let Control::Text(input) = &mut self.controls[id as usize] else {
            return;
        };

        let before = input.value().to_string();
        input.handle_event(&Event::Key(key));

        if id == FieldId::Phone {
            let masked = phone::format_progressive(input.value());
            if masked != input.value() {
                *input = Input::new(masked);
            }
        }

        if input.value() != before {
            self.sync_field(id);
        }
    }

    /// Move a choice control's selection. Clamped, not wrapping.
    pub fn cycle_choice(&mut self, delta: i32) {
        let Focus::Field(id) = self.focus else { return };
        let changed = match &mut self.controls[id as usize] {
            Control::Choice { options, selected } => {
                let last = options.len().saturating_sub(1) as i32;
                let next = (*selected as i32 + delta).clamp(0, last) as usize;
                let moved = next != *selected;
                *selected = next;
                moved
            }
            Control::Text(_) => false,
        };
        if changed {
            self.sync_field(id);
        }
    }

    // ── Submission lifecycle ────────────────────────────────────────────

    pub fn submit(&mut self) {
        self.blur_current();
        match self.workflow.submit(Self::today()) {
            SubmitOutcome::Accepted { ticket } => {
                let form = self.workflow.form();
                tracing::info!(
                    date = %form.value(FieldId::Date),
                    time = %form.value(FieldId::Time),
                    guests = %form.value(FieldId::Guests),
                    "reservation accepted, processing"
                );
                let tx = self.submit_tx.clone();
                let latency = self.workflow.latency();
                tokio::spawn(async move {
                    tokio::time::sleep(latency).await;
                    // Receiver gone means the app is shutting down
                    let _ = tx.send(ticket).await;
                });
            }
            SubmitOutcome::Rejected { first_invalid } => {
                tracing::warn!(field = %first_invalid, "submission rejected by validation");
                self.focus = Focus::Field(first_invalid);
                self.show_toast("Please fix the highlighted fields");
            }
            SubmitOutcome::AlreadyPending => {
                self.show_toast("Your reservation is already processing");
            }
        }
    }

    /// Deliver a finished processing timer back to the workflow. Stale
    /// tickets (form was reset meanwhile) are ignored.
    pub fn complete_submission(&mut self, ticket: SubmissionTicket) {
        if self.workflow.complete(ticket) {
            tracing::info!("reservation confirmed");
            self.view = View::Confirmation;
        } else {
            tracing::debug!("ignoring stale submission ticket");
        }
    }

    /// Start over: clear the workflow, rebuild controls, focus the top
    pub fn reset_form(&mut self) {
        self.workflow.reset(Self::today());
        self.controls = build_controls(&self.config);
        self.view = View::Form;
        self.focus = Focus::Field(FieldId::Date);
        self.form_scroll = 0;
        tracing::info!("form reset");
        self.show_toast("Ready for a new reservation");
    }

    // ── Confirmation view helpers ───────────────────────────────────────

    pub fn confirmation(&self) -> Option<Confirmation> {
        self.workflow
            .booking()
            .map(|booking| confirmation::build(booking, &self.config.restaurant.phone))
    }

    pub fn copy_confirmation(&mut self) {
        let Some(card) = self.confirmation() else {
            return;
        };
        match clipboard::copy_text(&card.as_text()) {
            Ok(()) => self.show_toast("Confirmation copied to clipboard"),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                self.show_toast("Copy failed - see logs (F2)");
            }
        }
    }

    pub fn copy_booking_json(&mut self) {
        let Some(booking) = self.workflow.booking() else {
            return;
        };
        let json = match serde_json::to_string_pretty(booking) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "booking serialization failed");
                return;
            }
        };
        match clipboard::copy_text(&json) {
            Ok(()) => self.show_toast("Booking JSON copied to clipboard"),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                self.show_toast("Copy failed - see logs (F2)");
            }
        }
    }

    // ── Views, scrolling, chrome ────────────────────────────────────────

    /// The screen to return to when a sub-view closes
    pub fn home_view(&self) -> View {
        if self.workflow.booking().is_some() {
            View::Confirmation
        } else {
            View::Form
        }
    }

    pub fn toggle_view(&mut self, target: View) {
        self.view = if self.view == target {
            self.home_view()
        } else {
            target
        };
    }

    /// Keep the focused row inside the form viewport. Called during draw,
    /// once the viewport height is known.
    pub fn ensure_focus_visible(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        let row = match self.focus {
            Focus::Field(id) => id as usize,
            Focus::Submit => FieldId::ALL.len(),
        };
        if row < self.form_scroll {
            self.form_scroll = row;
        } else if row >= self.form_scroll + visible_rows {
            self.form_scroll = row + 1 - visible_rows;
        }
    }

    pub fn scroll_form(&mut self, delta: i32) {
        let last = FieldId::ALL.len() as i64; // submit row included
        self.form_scroll = (self.form_scroll as i64)
            .saturating_add(delta as i64)
            .clamp(0, last) as usize;
    }

    /// Logs scroll offset counts back from the newest entry; 0 sticks to
    /// the bottom. Saturating so Home/End can pass i64 extremes.
    pub fn scroll_logs(&mut self, delta: i64) {
        let max = self.log_buffer.len().saturating_sub(1) as i64;
        self.logs_scroll = (self.logs_scroll as i64)
            .saturating_add(delta)
            .clamp(0, max) as usize;
    }

    /// Chrome keys run through the debouncer; see input.rs
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// 200ms heartbeat: drive the spinner and expire toasts
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if let Some(toast) = &self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    // ── Demo mode ───────────────────────────────────────────────────────

    /// Pre-fill the form with a plausible party so the whole flow can be
    /// walked through without typing
    fn apply_demo_prefill(&mut self) {
        let today = Self::today();
        let date = today.checked_add_days(Days::new(7)).unwrap_or(today);
        self.set_control(FieldId::Date, &date.format(DATE_FORMAT).to_string());
        self.set_control(FieldId::Time, "19:00");
        self.set_control(FieldId::Guests, "4");
        self.set_control(FieldId::Occasion, "Birthday");
        self.set_control(FieldId::Name, "Alex Rivera");
        self.set_control(FieldId::Email, "alex@example.com");
        self.set_control(FieldId::Phone, &phone::format_progressive("5550147890"));
        self.set_control(FieldId::Dietary, "One vegetarian");
        tracing::info!("demo mode: form pre-filled with a sample party");
    }

    fn set_control(&mut self, id: FieldId, value: &str) {
        match &mut self.controls[id as usize] {
            Control::Text(input) => *input = Input::new(value.to_string()),
            Control::Choice { options, selected } => {
                if let Some(pos) = options.iter().position(|o| o == value) {
                    *selected = pos;
                }
            }
        }
        self.sync_field(id);
    }
}
