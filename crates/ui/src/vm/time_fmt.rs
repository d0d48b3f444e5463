use chrono::{DateTime, NaiveDate, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%d %b %Y, %H:%M UTC").to_string()
}

#[must_use]
pub fn format_date(value: NaiveDate) -> String {
    value.format("%d %b %Y").to_string()
}

/// Value for an `<input type="date">`.
#[must_use]
pub fn date_input_value(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_core::time::fixed_now;

    #[test]
    fn formats_are_stable() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_date(day), "07 Mar 2026");
        assert_eq!(date_input_value(day), "2026-03-07");
        assert_eq!(format_datetime(fixed_now()), "14 Nov 2023, 22:13 UTC");
    }
}
