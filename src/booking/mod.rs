// Booking domain - pure reservation logic
//
// Everything here is synchronous and UI-free. "Today" is always injected by
// the caller and the submission delay is the caller's timer, so the whole
// module runs deterministically under test. The TUI layer owns rendering,
// focus, and the clock.

pub mod confirmation;
pub mod data;
pub mod dates;
pub mod field;
pub mod form;
pub mod phone;
pub mod rules;
pub mod workflow;

pub use data::BookingData;
pub use field::FieldId;
pub use form::ReservationForm;
pub use rules::ValidationError;
pub use workflow::{BookingWorkflow, SubmissionTicket, SubmitOutcome, WorkflowState};
