//! Human-readable dates, in the style of an en-US locale.

use chrono::{NaiveDate, NaiveDateTime};

/// e.g. "June 10, 2025 at 11:59 PM".
pub fn deadline(at: NaiveDateTime) -> String {
    at.format("%B %-d, %Y at %-I:%M %p").to_string()
}

/// e.g. "April 2, 2025".
pub fn day(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        assert_eq!(
            deadline(date.and_hms_opt(23, 59, 59).unwrap()),
            "June 10, 2025 at 11:59 PM"
        );
        assert_eq!(
            deadline(date.and_hms_opt(9, 5, 0).unwrap()),
            "June 10, 2025 at 9:05 AM"
        );
        assert_eq!(day(NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()), "April 2, 2025");
    }
}
