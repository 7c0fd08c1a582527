use chrono::{Datelike, Days, NaiveDate};

/// Inclusive calendar-day count: a trip starting and ending on the same
/// date is 1 day. `NaiveDate` arithmetic keeps this immune to DST shifts.
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> u32 {
    let diff = (end - start).num_days();
    (diff.max(0) + 1) as u32
}

/// One calendar date per trip day, starting at `start`
pub fn trip_dates(start: NaiveDate, number_of_days: u32) -> Vec<NaiveDate> {
    (0..number_of_days as u64)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .collect()
}

/// Human date range with month/year elision, e.g. "June 1 - 3, 2025"
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        return start.format("%B %-d, %Y").to_string();
    }

    if start.year() == end.year() && start.month() == end.month() {
        return format!(
            "{} - {}",
            start.format("%B %-d"),
            end.format("%-d, %Y")
        );
    }

    format!("{} - {}", start.format("%B %-d"), end.format("%B %-d, %Y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_same_day_is_one() {
        assert_eq!(inclusive_day_count(d(2025, 6, 1), d(2025, 6, 1)), 1);
    }

    #[test]
    fn test_inclusive_count() {
        assert_eq!(inclusive_day_count(d(2025, 6, 1), d(2025, 6, 3)), 3);
        // Across a month boundary
        assert_eq!(inclusive_day_count(d(2025, 1, 30), d(2025, 2, 2)), 4);
        // Leap day
        assert_eq!(inclusive_day_count(d(2024, 2, 28), d(2024, 3, 1)), 3);
    }

    #[test]
    fn test_trip_dates_sequential() {
        let dates = trip_dates(d(2025, 6, 1), 3);
        assert_eq!(dates, vec![d(2025, 6, 1), d(2025, 6, 2), d(2025, 6, 3)]);
    }

    #[test]
    fn test_trip_dates_empty_for_zero_days() {
        assert!(trip_dates(d(2025, 6, 1), 0).is_empty());
    }

    #[test]
    fn test_format_range_same_month() {
        assert_eq!(
            format_date_range(d(2025, 6, 1), d(2025, 6, 3)),
            "June 1 - 3, 2025"
        );
    }

    #[test]
    fn test_format_range_cross_month() {
        assert_eq!(
            format_date_range(d(2025, 6, 28), d(2025, 7, 2)),
            "June 28 - July 2, 2025"
        );
    }

    #[test]
    fn test_format_range_single_day() {
        assert_eq!(format_date_range(d(2025, 6, 1), d(2025, 6, 1)), "June 1, 2025");
    }
}
