// Confirmation card content
//
// Pure content for the post-booking view: the TUI decides layout, this
// module decides wording. Detail lines for optional fields are omitted
// when the guest left them blank.

use super::data::{BookingData, NO_DETAIL};
use super::dates;

/// One labeled line on the confirmation card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String,
}

/// Everything the confirmation view renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub heading: String,
    pub lines: Vec<DetailLine>,
    pub footer: String,
}

impl Confirmation {
    /// Plain-text rendition for the clipboard.
    pub fn as_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.heading);
        out.push_str("\n\n");
        for line in &self.lines {
            out.push_str(&format!("{}: {}\n", line.label, line.value));
        }
        out.push('\n');
        out.push_str(&self.footer);
        out
    }
}

/// Noun agreement for the party size line.
fn party_size(guests: &str) -> String {
    let noun = if guests == "1" { "guest" } else { "guests" };
    format!("{} {}", guests, noun)
}

/// Assemble the confirmation card for a completed booking.
/// `restaurant_phone` lands in the call-us footer.
pub fn build(booking: &BookingData, restaurant_phone: &str) -> Confirmation {
    let mut lines = vec![
        DetailLine {
            label: "Date",
            value: dates::long_format(booking.date),
        },
        DetailLine {
            label: "Time",
            value: booking.time.clone(),
        },
        DetailLine {
            label: "Party Size",
            value: party_size(&booking.guests),
        },
        DetailLine {
            label: "Occasion",
            value: booking.occasion.clone(),
        },
        DetailLine {
            label: "Name",
            value: booking.name.clone(),
        },
        DetailLine {
            label: "Email",
            value: booking.email.clone(),
        },
        DetailLine {
            label: "Phone",
            value: booking.phone.clone(),
        },
    ];
    if booking.dietary != NO_DETAIL {
        lines.push(DetailLine {
            label: "Dietary Restrictions",
            value: booking.dietary.clone(),
        });
    }
    if booking.special_requests != NO_DETAIL {
        lines.push(DetailLine {
            label: "Special Requests",
            value: booking.special_requests.clone(),
        });
    }

    Confirmation {
        heading: "Reservation Confirmed!".to_string(),
        lines,
        footer: format!(
            "We will send a confirmation email to {} shortly. \
             If you need to make any changes, please call us at {}.",
            booking.email, restaurant_phone
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::data::DEFAULT_OCCASION;
    use chrono::NaiveDate;

    fn booking() -> BookingData {
        BookingData {
            date: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
            time: "18:00".to_string(),
            guests: "2".to_string(),
            occasion: DEFAULT_OCCASION.to_string(),
            name: "Jo Lee".to_string(),
            email: "jo@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            dietary: NO_DETAIL.to_string(),
            special_requests: NO_DETAIL.to_string(),
        }
    }

    fn value_of<'a>(card: &'a Confirmation, label: &str) -> Option<&'a str> {
        card.lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.value.as_str())
    }

    #[test]
    fn test_card_for_a_plain_booking() {
        let card = build(&booking(), "(555) 123-4567");

        assert_eq!(card.heading, "Reservation Confirmed!");
        assert_eq!(value_of(&card, "Date"), Some("Friday, June 14, 2024"));
        assert_eq!(value_of(&card, "Time"), Some("18:00"));
        assert_eq!(value_of(&card, "Party Size"), Some("2 guests"));
        assert_eq!(value_of(&card, "Occasion"), Some("Not specified"));
        assert_eq!(value_of(&card, "Phone"), Some("(555) 123-4567"));

        // Blank optionals leave no trace on the card
        assert_eq!(value_of(&card, "Dietary Restrictions"), None);
        assert_eq!(value_of(&card, "Special Requests"), None);
    }

    #[test]
    fn test_single_guest_pluralization() {
        let mut one = booking();
        one.guests = "1".to_string();
        let card = build(&one, "(555) 123-4567");
        assert_eq!(value_of(&card, "Party Size"), Some("1 guest"));
    }

    #[test]
    fn test_provided_optionals_get_their_own_lines() {
        let mut b = booking();
        b.dietary = "Nut allergy".to_string();
        b.special_requests = "Window table".to_string();
        let card = build(&b, "(555) 123-4567");
        assert_eq!(value_of(&card, "Dietary Restrictions"), Some("Nut allergy"));
        assert_eq!(value_of(&card, "Special Requests"), Some("Window table"));
        // Detail lines keep document order
        assert_eq!(card.lines.last().unwrap().label, "Special Requests");
    }

    #[test]
    fn test_footer_carries_guest_email_and_restaurant_phone() {
        let card = build(&booking(), "(212) 555-0100");
        assert!(card.footer.contains("jo@example.com"));
        assert!(card.footer.contains("(212) 555-0100"));
    }

    #[test]
    fn test_text_export_lists_every_line() {
        let card = build(&booking(), "(555) 123-4567");
        let text = card.as_text();
        assert!(text.starts_with("Reservation Confirmed!"));
        assert!(text.contains("Party Size: 2 guests"));
        assert!(text.contains("please call us at (555) 123-4567."));
    }
}
