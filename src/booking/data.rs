// Booking snapshot
//
// Built once, after every required field has passed validation. The
// confirmation card renders from this snapshot, never from live form
// state, so later edits to the form cannot retroactively change a booking.

use chrono::NaiveDate;
use serde::Serialize;

/// Shown when the guest picked no occasion.
pub const DEFAULT_OCCASION: &str = "Not specified";

/// Sentinel for optional detail fields the guest left empty. Confirmation
/// rendering omits lines holding this value.
pub const NO_DETAIL: &str = "None";

/// An accepted reservation, exactly as it will be confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingData {
    pub date: NaiveDate,
    pub time: String,
    pub guests: String,
    pub occasion: String,
    pub name: String,
    pub email: String,
    /// As displayed, i.e. masked: `(555) 123-4567`
    pub phone: String,
    pub dietary: String,
    pub special_requests: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_for_export() {
        let booking = BookingData {
            date: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
            time: "18:00".to_string(),
            guests: "2".to_string(),
            occasion: DEFAULT_OCCASION.to_string(),
            name: "Jo Lee".to_string(),
            email: "jo@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            dietary: NO_DETAIL.to_string(),
            special_requests: NO_DETAIL.to_string(),
        };
        let json = serde_json::to_string(&booking).unwrap();
        assert!(json.contains("\"date\":\"2024-06-14\""));
        assert!(json.contains("\"special_requests\":\"None\""));
    }
}
