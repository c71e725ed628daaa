// Reservation date window
//
// Bookings are taken from today through a configurable number of calendar
// months out. The window is recomputed whenever the form (re)initializes,
// so a desk left open overnight picks up the new day on the next reset.

use chrono::{Months, NaiveDate};

/// Inclusive window of selectable reservation dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateBounds {
    /// Window opening today and closing `advance_months` calendar months
    /// later. Month arithmetic clamps to the end of the target month, so
    /// Nov 30 + 3 months lands on the last day of February.
    pub fn from_today(today: NaiveDate, advance_months: u32) -> Self {
        let max = today
            .checked_add_months(Months::new(advance_months))
            .unwrap_or(today);
        Self { min: today, max }
    }

    /// Whether a date falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }
}

/// Long-form date for the confirmation card: "Friday, June 14, 2024".
pub fn long_format(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
