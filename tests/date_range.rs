#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use utilrep::libs::date_range::{parse_date, resolve, DateRangeError, TimeRange};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Tests that the current week resolves Monday through Sunday around a
    /// mid-week anchor.
    #[test]
    fn test_current_week_monday_through_sunday() {
        let window = resolve(TimeRange::CurrentWeek, date(2025, 3, 19), None, None, None).unwrap();
        assert_eq!(window.from, date(2025, 3, 17));
        assert_eq!(window.to, date(2025, 3, 23));
    }

    /// Tests that a Monday anchor already starts its own week.
    #[test]
    fn test_current_week_from_monday() {
        let window = resolve(TimeRange::CurrentWeek, date(2025, 3, 17), None, None, None).unwrap();
        assert_eq!(window.from, date(2025, 3, 17));
        assert_eq!(window.to, date(2025, 3, 23));
    }

    /// Tests last week resolution.
    #[test]
    fn test_last_week() {
        let window = resolve(TimeRange::LastWeek, date(2025, 3, 19), None, None, None).unwrap();
        assert_eq!(window.from, date(2025, 3, 10));
        assert_eq!(window.to, date(2025, 3, 16));
    }

    /// Tests that the current month spans its first through last calendar day.
    #[test]
    fn test_current_month() {
        let window = resolve(TimeRange::CurrentMonth, date(2025, 2, 14), None, None, None).unwrap();
        assert_eq!(window.from, date(2025, 2, 1));
        assert_eq!(window.to, date(2025, 2, 28));
    }

    /// Tests that last month crosses a year boundary in January.
    #[test]
    fn test_last_month_across_year_boundary() {
        let window = resolve(TimeRange::LastMonth, date(2025, 1, 15), None, None, None).unwrap();
        assert_eq!(window.from, date(2024, 12, 1));
        assert_eq!(window.to, date(2024, 12, 31));
    }

    /// Tests quarter resolution for an anchor in the middle month of Q2.
    #[test]
    fn test_current_quarter() {
        let window = resolve(TimeRange::CurrentQuarter, date(2025, 5, 10), None, None, None).unwrap();
        assert_eq!(window.from, date(2025, 4, 1));
        assert_eq!(window.to, date(2025, 6, 30));
    }

    /// Tests the full-year windows, both anchored and explicit.
    #[test]
    fn test_year_windows() {
        let current = resolve(TimeRange::CurrentYear, date(2025, 8, 2), None, None, None).unwrap();
        assert_eq!(current.from, date(2025, 1, 1));
        assert_eq!(current.to, date(2025, 12, 31));

        let explicit = resolve(TimeRange::YearOnly, date(2025, 8, 2), Some(2024), None, None).unwrap();
        assert_eq!(explicit.from, date(2024, 1, 1));
        assert_eq!(explicit.to, date(2024, 12, 31));
    }

    /// Tests that year-only without a year is rejected.
    #[test]
    fn test_year_only_requires_year() {
        let result = resolve(TimeRange::YearOnly, date(2025, 8, 2), None, None, None);
        assert!(matches!(result, Err(DateRangeError::InvalidDateRange(_))));
    }

    /// Tests a fully specified custom range.
    #[test]
    fn test_custom_range() {
        let window = resolve(
            TimeRange::Custom,
            date(2025, 8, 2),
            None,
            Some(date(2025, 3, 1)),
            Some(date(2025, 3, 15)),
        )
        .unwrap();
        assert_eq!(window.from, date(2025, 3, 1));
        assert_eq!(window.to, date(2025, 3, 15));
    }

    /// Tests that an inverted custom range is an explicit error rather than a
    /// silently empty window.
    #[test]
    fn test_custom_range_inverted_is_error() {
        let result = resolve(
            TimeRange::Custom,
            date(2025, 8, 2),
            None,
            Some(date(2025, 3, 15)),
            Some(date(2025, 3, 1)),
        );
        assert!(matches!(result, Err(DateRangeError::InvalidDateRange(_))));
    }

    /// Tests that a half-specified custom range falls back to the default
    /// window.
    #[test]
    fn test_custom_range_half_specified_falls_back() {
        let today = date(2025, 3, 19);
        let window = resolve(TimeRange::Custom, today, None, Some(date(2025, 3, 1)), None).unwrap();
        assert_eq!(window.from, date(2025, 2, 19));
        assert_eq!(window.to, today);
    }

    /// Tests the default range with and without a year.
    #[test]
    fn test_default_range() {
        let today = date(2025, 3, 19);
        let window = resolve(TimeRange::Default, today, None, None, None).unwrap();
        assert_eq!(window.from, date(2025, 2, 19));
        assert_eq!(window.to, today);

        let with_year = resolve(TimeRange::Default, today, Some(2023), None, None).unwrap();
        assert_eq!(with_year.from, date(2023, 1, 1));
        assert_eq!(with_year.to, date(2023, 12, 31));
    }

    /// Tests that working days count every day except Sundays.
    #[test]
    fn test_working_days_exclude_sundays() {
        let window = resolve(TimeRange::CurrentWeek, date(2025, 3, 19), None, None, None).unwrap();
        assert_eq!(window.working_days(), 6);

        let two_weeks = resolve(
            TimeRange::Custom,
            date(2025, 3, 19),
            None,
            Some(date(2025, 3, 10)),
            Some(date(2025, 3, 23)),
        )
        .unwrap();
        assert_eq!(two_weeks.working_days(), 12);
    }

    /// Tests window membership at the inclusive bounds.
    #[test]
    fn test_window_contains_bounds() {
        let window = resolve(
            TimeRange::Custom,
            date(2025, 8, 2),
            None,
            Some(date(2025, 3, 1)),
            Some(date(2025, 3, 15)),
        )
        .unwrap();
        assert!(window.contains(date(2025, 3, 1)));
        assert!(window.contains(date(2025, 3, 15)));
        assert!(!window.contains(date(2025, 2, 28)));
        assert!(!window.contains(date(2025, 3, 16)));
    }

    /// Tests explicit date parsing, valid and malformed.
    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-03-17").unwrap(), date(2025, 3, 17));
        assert!(matches!(parse_date("17.03.2025"), Err(DateRangeError::InvalidDateRange(_))));
        assert!(matches!(parse_date("2025-02-30"), Err(DateRangeError::InvalidDateRange(_))));
    }
}
