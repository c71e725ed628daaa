// Validation rules for reservation fields
//
// One rule set per field. Every rule trims its input first; phone strips
// formatting instead, since the mask owns that field's shape. The error
// messages are exactly what the guest sees next to the control.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use super::field::FieldId;
use super::phone;

/// A field failed validation. One variant per rule; `Display` is the
/// message rendered under the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a date for your reservation.")]
    DateRequired,
    #[error("Please enter a valid date.")]
    DateUnparseable,
    #[error("Please select a future date.")]
    DatePast,
    #[error("Please select a time for your reservation.")]
    TimeRequired,
    #[error("Please select the number of guests.")]
    GuestsRequired,
    #[error("Please enter your full name.")]
    NameRequired,
    #[error("Name must be at least 2 characters long.")]
    NameTooShort,
    #[error("Please enter your email address.")]
    EmailRequired,
    #[error("Please enter a valid email address.")]
    EmailInvalid,
    #[error("Please enter your phone number.")]
    PhoneRequired,
    #[error("Please enter a valid phone number.")]
    PhoneInvalid,
}

/// local@domain.tld with no whitespace and at least one dot after the @.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Whether a trimmed value looks like a deliverable email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Whether a value carries 10 digits, or 11 with a country code.
pub fn is_valid_phone(value: &str) -> bool {
    let len = phone::digits(value).len();
    len == 10 || len == 11
}

/// Dates arrive from the date control as ISO calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate one field's raw value.
///
/// `today` anchors the date rule; callers supply it so the check stays
/// deterministic. Optional fields always pass.
pub fn validate(field: FieldId, raw: &str, today: NaiveDate) -> Result<(), ValidationError> {
    match field {
        FieldId::Date => {
            let value = raw.trim();
            if value.is_empty() {
                return Err(ValidationError::DateRequired);
            }
            let picked = NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map_err(|_| ValidationError::DateUnparseable)?;
            if picked < today {
                return Err(ValidationError::DatePast);
            }
            Ok(())
        }
        FieldId::Time => {
            if raw.trim().is_empty() {
                Err(ValidationError::TimeRequired)
            } else {
                Ok(())
            }
        }
        FieldId::Guests => {
            if raw.trim().is_empty() {
                Err(ValidationError::GuestsRequired)
            } else {
                Ok(())
            }
        }
        FieldId::Name => {
            let value = raw.trim();
            if value.is_empty() {
                Err(ValidationError::NameRequired)
            } else if value.chars().count() < 2 {
                Err(ValidationError::NameTooShort)
            } else {
                Ok(())
            }
        }
        FieldId::Email => {
            let value = raw.trim();
            if value.is_empty() {
                Err(ValidationError::EmailRequired)
            } else if !is_valid_email(value) {
                Err(ValidationError::EmailInvalid)
            } else {
                Ok(())
            }
        }
        FieldId::Phone => {
            if raw.trim().is_empty() {
                Err(ValidationError::PhoneRequired)
            } else if !is_valid_phone(raw) {
                Err(ValidationError::PhoneInvalid)
            } else {
                Ok(())
            }
        }
        // Optional fields: anything goes, including empty
        FieldId::Occasion | FieldId::Dietary | FieldId::SpecialRequests => Ok(()),
    }
}
