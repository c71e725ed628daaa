// Submission state machine
//
// Explicit states with a ticketed completion handshake. The caller owns the
// processing timer: `submit` hands back a ticket, and only the matching
// `complete` call confirms the booking. Tickets issued before a reset no
// longer match, so a timer that outlives its form does nothing. While a
// submission is in flight the latch turns further submits away, even if
// the submit control is somehow re-triggered.

use chrono::NaiveDate;
use std::time::Duration;

use super::data::BookingData;
use super::field::FieldId;
use super::form::ReservationForm;

/// Simulated processing delay before a booking confirms.
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(1500);

/// Identifies one accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// Where the booking currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkflowState {
    /// Taking input.
    #[default]
    Idle,
    /// Accepted; waiting out the processing delay.
    Submitting {
        ticket: SubmissionTicket,
        booking: BookingData,
    },
    /// Booked. The snapshot feeds the confirmation card.
    Confirmed { booking: BookingData },
}

/// What came of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every required field passed; the caller should start the timer and
    /// deliver the ticket back via [`BookingWorkflow::complete`].
    Accepted { ticket: SubmissionTicket },
    /// Validation failed. Focus belongs on the first errored field.
    Rejected { first_invalid: FieldId },
    /// A submission is already in flight or confirmed; nothing changed.
    AlreadyPending,
}

/// The reservation form plus its submission lifecycle.
#[derive(Debug, Clone)]
pub struct BookingWorkflow {
    form: ReservationForm,
    state: WorkflowState,
    latency: Duration,
    last_ticket: u64,
}

impl BookingWorkflow {
    pub fn new(today: NaiveDate, advance_months: u32, latency: Duration) -> Self {
        Self {
            form: ReservationForm::new(today, advance_months),
            state: WorkflowState::Idle,
            latency,
            last_ticket: 0,
        }
    }

    pub fn form(&self) -> &ReservationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ReservationForm {
        &mut self.form
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// How long the caller's timer should wait before completing.
    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, WorkflowState::Submitting { .. })
    }

    /// The confirmed booking, if there is one.
    pub fn booking(&self) -> Option<&BookingData> {
        match &self.state {
            WorkflowState::Confirmed { booking } => Some(booking),
            _ => None,
        }
    }

    /// Try to submit the form. All required fields are validated in one
    /// pass; on success the snapshot is captured immediately, so edits made
    /// while the timer runs cannot leak into the booking.
    pub fn submit(&mut self, today: NaiveDate) -> SubmitOutcome {
        if !matches!(self.state, WorkflowState::Idle) {
            return SubmitOutcome::AlreadyPending;
        }
        match self.form.validate_all(today) {
            Ok(booking) => {
                self.last_ticket += 1;
                let ticket = SubmissionTicket(self.last_ticket);
                self.state = WorkflowState::Submitting { ticket, booking };
                SubmitOutcome::Accepted { ticket }
            }
            Err(first_invalid) => SubmitOutcome::Rejected { first_invalid },
        }
    }

    /// Finish the submission the ticket belongs to. Returns whether the
    /// booking confirmed; a stale ticket (issued before a reset, or already
    /// consumed) changes nothing.
    pub fn complete(&mut self, ticket: SubmissionTicket) -> bool {
        if let WorkflowState::Submitting {
            ticket: current,
            booking,
        } = &self.state
        {
            if *current == ticket {
                let booking = booking.clone();
                self.state = WorkflowState::Confirmed { booking };
                return true;
            }
        }
        false
    }

    /// Abandon whatever is on the desk and start a fresh form dated
    /// `today`: values, errors, and the confirmed booking all clear, and
    /// the date window is recomputed.
    pub fn reset(&mut self, today: NaiveDate) {
        self.form.reset(today);
        self.state = WorkflowState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn workflow_with_valid_form() -> BookingWorkflow {
        let mut wf = BookingWorkflow::new(today(), 3, DEFAULT_SUBMIT_LATENCY);
        let form = wf.form_mut();
        form.set_value(FieldId::Date, "2024-06-10");
        form.set_value(FieldId::Time, "18:00");
        form.set_value(FieldId::Guests, "2");
        form.set_value(FieldId::Name, "Jo Lee");
        form.set_value(FieldId::Email, "jo@example.com");
        form.set_value(FieldId::Phone, "(555) 123-4567");
        wf
    }

    #[test]
    fn test_empty_form_is_rejected_with_first_field() {
        let mut wf = BookingWorkflow::new(today(), 3, DEFAULT_SUBMIT_LATENCY);
        let outcome = wf.submit(today());
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                first_invalid: FieldId::Date
            }
        );
        // Rejection leaves the workflow idle and produces no booking
        assert_eq!(*wf.state(), WorkflowState::Idle);
        assert!(wf.booking().is_none());
        assert!(wf.form().has_errors());
    }

    #[test]
    fn test_happy_path_submit_then_complete() {
        let mut wf = workflow_with_valid_form();

        let SubmitOutcome::Accepted { ticket } = wf.submit(today()) else {
            panic!("expected acceptance");
        };
        assert!(wf.is_submitting());
        assert!(wf.booking().is_none());

        assert!(wf.complete(ticket));
        let booking = wf.booking().expect("confirmed booking");
        assert_eq!(booking.guests, "2");
        assert_eq!(booking.occasion, "Not specified");
        assert_eq!(booking.phone, "(555) 123-4567");
    }

    #[test]
    fn test_double_submit_is_latched() {
        let mut wf = workflow_with_valid_form();
        let SubmitOutcome::Accepted { ticket } = wf.submit(today()) else {
            panic!("expected acceptance");
        };
        // In flight: latched
        assert_eq!(wf.submit(today()), SubmitOutcome::AlreadyPending);
        assert!(wf.complete(ticket));
        // Confirmed: still latched until reset
        assert_eq!(wf.submit(today()), SubmitOutcome::AlreadyPending);
    }

    #[test]
    fn test_edits_during_submission_do_not_leak_into_booking() {
        let mut wf = workflow_with_valid_form();
        let SubmitOutcome::Accepted { ticket } = wf.submit(today()) else {
            panic!("expected acceptance");
        };
        wf.form_mut().set_value(FieldId::Name, "Someone Else");
        wf.complete(ticket);
        assert_eq!(wf.booking().unwrap().name, "Jo Lee");
    }

    #[test]
    fn test_stale_ticket_after_reset_is_ignored() {
        let mut wf = workflow_with_valid_form();
        let SubmitOutcome::Accepted { ticket } = wf.submit(today()) else {
            panic!("expected acceptance");
        };

        // Desk resets while the timer is still running
        wf.reset(today());
        assert!(!wf.complete(ticket));
        assert_eq!(*wf.state(), WorkflowState::Idle);
        assert!(wf.booking().is_none());
    }

    #[test]
    fn test_tickets_are_not_reused_across_resets() {
        let mut wf = workflow_with_valid_form();
        let SubmitOutcome::Accepted { ticket: first } = wf.submit(today()) else {
            panic!("expected acceptance");
        };

        wf.reset(today());
        let form = wf.form_mut();
        form.set_value(FieldId::Date, "2024-06-10");
        form.set_value(FieldId::Time, "19:00");
        form.set_value(FieldId::Guests, "4");
        form.set_value(FieldId::Name, "Sam Park");
        form.set_value(FieldId::Email, "sam@example.com");
        form.set_value(FieldId::Phone, "(555) 987-6543");

        let SubmitOutcome::Accepted { ticket: second } = wf.submit(today()) else {
            panic!("expected acceptance");
        };
        assert_ne!(first, second);

        // The old timer firing late cannot confirm the new submission
        assert!(!wf.complete(first));
        assert!(wf.is_submitting());
        assert!(wf.complete(second));
        assert_eq!(wf.booking().unwrap().name, "Sam Park");
    }

    #[test]
    fn test_reset_recomputes_bounds_for_a_new_day() {
        let mut wf = workflow_with_valid_form();
        let next_day = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
        wf.reset(next_day);
        assert_eq!(wf.form().bounds().min, next_day);
    }
}
