// Reservation form state
//
// Pure state object: field values, per-field errors, and the current date
// window. Rendering and focus live in the TUI layer; everything here is
// driven by explicit calls with an injected `today`, which keeps the whole
// form deterministic under test.

use chrono::NaiveDate;

use super::data::{BookingData, DEFAULT_OCCASION, NO_DETAIL};
use super::dates::DateBounds;
use super::field::FieldId;
use super::rules::{self, ValidationError, DATE_FORMAT};

/// Value and validation state for one control.
#[derive(Debug, Clone, Default)]
struct Field {
    value: String,
    error: Option<ValidationError>,
}

/// The booking form: nine fields and a date window.
#[derive(Debug, Clone)]
pub struct ReservationForm {
    fields: [Field; FieldId::ALL.len()],
    bounds: DateBounds,
    advance_months: u32,
}

impl ReservationForm {
    /// Fresh, empty form with its date window anchored at `today`.
    pub fn new(today: NaiveDate, advance_months: u32) -> Self {
        Self {
            fields: Default::default(),
            bounds: DateBounds::from_today(today, advance_months),
            advance_months,
        }
    }

    /// The current selectable date window.
    pub fn bounds(&self) -> DateBounds {
        self.bounds
    }

    pub fn value(&self, id: FieldId) -> &str {
        &self.fields[id as usize].value
    }

    pub fn error(&self, id: FieldId) -> Option<ValidationError> {
        self.fields[id as usize].error
    }

    /// Store a new value. Editing clears the field's error so the guest
    /// is not shouted at while fixing it; the next blur re-validates.
    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) {
        let field = &mut self.fields[id as usize];
        field.value = value.into();
        field.error = None;
    }

    /// Validate one field in place (the blur check). Returns whether the
    /// field is clean afterwards.
    pub fn validate_field(&mut self, id: FieldId, today: NaiveDate) -> bool {
        let error = rules::validate(id, self.value(id), today).err();
        let clean = error.is_none();
        self.fields[id as usize].error = error;
        clean
    }

    /// Validate every field, accumulating errors; nothing short-circuits,
    /// so one pass surfaces every problem at once.
    ///
    /// On success returns the booking snapshot, with optional-field
    /// defaults applied. On failure returns the first invalid field in
    /// document order (the one to focus), with each field's error stored
    /// on the field itself.
    pub fn validate_all(&mut self, today: NaiveDate) -> Result<BookingData, FieldId> {
        let mut first_invalid = None;
        for id in FieldId::ALL {
            if !self.validate_field(id, today) && first_invalid.is_none() {
                first_invalid = Some(id);
            }
        }
        match first_invalid {
            Some(id) => Err(id),
            None => self.snapshot(),
        }
    }

    /// Whether any field currently holds an error.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Clear all values and errors and recompute the date window from the
    /// new `today`.
    pub fn reset(&mut self, today: NaiveDate) {
        self.fields = Default::default();
        self.bounds = DateBounds::from_today(today, self.advance_months);
    }

    /// Assemble the snapshot from current values. Only called after a full
    /// validation pass; the date re-parse is a guard, not a code path.
    fn snapshot(&self) -> Result<BookingData, FieldId> {
        let date = NaiveDate::parse_from_str(self.value(FieldId::Date).trim(), DATE_FORMAT)
            .map_err(|_| FieldId::Date)?;
        Ok(BookingData {
            date,
            time: self.value(FieldId::Time).to_string(),
            guests: self.value(FieldId::Guests).to_string(),
            occasion: self.optional(FieldId::Occasion, DEFAULT_OCCASION),
            name: self.value(FieldId::Name).to_string(),
            email: self.value(FieldId::Email).to_string(),
            phone: self.value(FieldId::Phone).to_string(),
            dietary: self.optional(FieldId::Dietary, NO_DETAIL),
            special_requests: self.optional(FieldId::SpecialRequests, NO_DETAIL),
        })
    }

    /// Optional-field value with its default applied when left blank.
    fn optional(&self, id: FieldId, default: &str) -> String {
        let value = self.value(id).trim();
        if value.is_empty() {
            default.to_string()
        } else {
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn filled_form() -> ReservationForm {
        let mut form = ReservationForm::new(today(), 3);
        form.set_value(FieldId::Date, "2024-06-10");
        form.set_value(FieldId::Time, "18:00");
        form.set_value(FieldId::Guests, "2");
        form.set_value(FieldId::Name, "Jo Lee");
        form.set_value(FieldId::Email, "jo@example.com");
        form.set_value(FieldId::Phone, "(555) 123-4567");
        form
    }

    #[test]
    fn test_empty_submit_accumulates_every_required_error() {
        let mut form = ReservationForm::new(today(), 3);
        let first = form.validate_all(today()).unwrap_err();

        // First invalid field in document order gets focus
        assert_eq!(first, FieldId::Date);

        assert_eq!(form.error(FieldId::Date), Some(ValidationError::DateRequired));
        assert_eq!(form.error(FieldId::Time), Some(ValidationError::TimeRequired));
        assert_eq!(
            form.error(FieldId::Guests),
            Some(ValidationError::GuestsRequired)
        );
        assert_eq!(form.error(FieldId::Name), Some(ValidationError::NameRequired));
        assert_eq!(
            form.error(FieldId::Email),
            Some(ValidationError::EmailRequired)
        );
        assert_eq!(
            form.error(FieldId::Phone),
            Some(ValidationError::PhoneRequired)
        );
        // Optional fields never error
        assert_eq!(form.error(FieldId::Occasion), None);
        assert_eq!(form.error(FieldId::Dietary), None);
        assert_eq!(form.error(FieldId::SpecialRequests), None);
    }

    #[test]
    fn test_first_invalid_follows_document_order() {
        let mut form = filled_form();
        form.set_value(FieldId::Email, "not-an-email");
        form.set_value(FieldId::Phone, "123");
        assert_eq!(form.validate_all(today()).unwrap_err(), FieldId::Email);
    }

    #[test]
    fn test_editing_clears_only_that_fields_error() {
        let mut form = ReservationForm::new(today(), 3);
        let _ = form.validate_all(today());
        assert!(form.has_errors());

        form.set_value(FieldId::Name, "J");
        assert_eq!(form.error(FieldId::Name), None);
        // Others untouched
        assert_eq!(form.error(FieldId::Email), Some(ValidationError::EmailRequired));
    }

    #[test]
    fn test_blur_revalidates_a_single_field() {
        let mut form = ReservationForm::new(today(), 3);
        form.set_value(FieldId::Name, "J");
        assert!(!form.validate_field(FieldId::Name, today()));
        assert_eq!(form.error(FieldId::Name), Some(ValidationError::NameTooShort));

        form.set_value(FieldId::Name, "Jo");
        assert!(form.validate_field(FieldId::Name, today()));
        assert_eq!(form.error(FieldId::Name), None);
    }

    #[test]
    fn test_snapshot_applies_optional_defaults() {
        let mut form = filled_form();
        let booking = form.validate_all(today()).unwrap();
        assert_eq!(booking.occasion, DEFAULT_OCCASION);
        assert_eq!(booking.dietary, NO_DETAIL);
        assert_eq!(booking.special_requests, NO_DETAIL);
        assert_eq!(booking.date, today());
        assert_eq!(booking.guests, "2");
        assert_eq!(booking.phone, "(555) 123-4567");
    }

    #[test]
    fn test_snapshot_keeps_provided_optionals() {
        let mut form = filled_form();
        form.set_value(FieldId::Occasion, "Anniversary");
        form.set_value(FieldId::Dietary, "Vegetarian");
        form.set_value(FieldId::SpecialRequests, "Window table");
        let booking = form.validate_all(today()).unwrap();
        assert_eq!(booking.occasion, "Anniversary");
        assert_eq!(booking.dietary, "Vegetarian");
        assert_eq!(booking.special_requests, "Window table");
    }

    #[test]
    fn test_no_snapshot_while_any_required_field_fails() {
        let mut form = filled_form();
        form.set_value(FieldId::Date, "2024-06-01");
        assert!(form.validate_all(today()).is_err());
        assert_eq!(form.error(FieldId::Date), Some(ValidationError::DatePast));
    }

    #[test]
    fn test_reset_clears_state_and_recomputes_bounds() {
        let mut form = filled_form();
        let _ = form.validate_all(today());

        let next_day = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
        form.reset(next_day);

        for id in FieldId::ALL {
            assert_eq!(form.value(id), "");
            assert_eq!(form.error(id), None);
        }
        assert_eq!(form.bounds(), DateBounds::from_today(next_day, 3));
    }
}
