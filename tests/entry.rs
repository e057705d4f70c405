#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use utilrep::libs::date_range::{DateWindow, TimeRange};
    use utilrep::libs::entry::{FilterCriteria, TimeEntry};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(staff_id: &str, department: &str, project: &str, work_date: NaiveDate) -> TimeEntry {
        TimeEntry {
            staff_id: staff_id.to_string(),
            staff_name: format!("Staff {}", staff_id),
            department: department.to_string(),
            customer: "Acme".to_string(),
            project: project.to_string(),
            project_phase: "P1".to_string(),
            phase: "Dev".to_string(),
            work_date,
            week_number: 0,
            year: 0,
            hours: dec!(8),
            created_by: None,
            created_at: None,
        }
    }

    /// Tests the ISO week key across a year boundary, where the last days of
    /// December belong to week 1 of the next ISO year.
    #[test]
    fn test_iso_week_key() {
        assert_eq!(entry("s1", "IT", "Alpha", date(2025, 3, 17)).iso_week_key(), (2025, 12));
        assert_eq!(entry("s1", "IT", "Alpha", date(2025, 12, 31)).iso_week_key(), (2026, 1));
        assert_eq!(entry("s1", "IT", "Alpha", date(2027, 1, 1)).iso_week_key(), (2026, 53));
    }

    /// Tests that unset dimension filters match everything and set ones match
    /// exactly.
    #[test]
    fn test_dimension_filters() {
        let e = entry("s1", "IT", "Alpha", date(2025, 3, 17));

        assert!(FilterCriteria::default().matches(&e));

        let mut criteria = FilterCriteria {
            department: Some("IT".to_string()),
            project: Some("Alpha".to_string()),
            ..Default::default()
        };
        assert!(criteria.matches(&e));

        criteria.department = Some("Design".to_string());
        assert!(!criteria.matches(&e));
    }

    /// Tests that apply narrows by both the window and the dimension filters.
    #[test]
    fn test_apply() {
        let entries = vec![
            entry("s1", "IT", "Alpha", date(2025, 3, 17)),
            entry("s2", "Design", "Alpha", date(2025, 3, 18)),
            entry("s1", "IT", "Alpha", date(2025, 4, 1)),
        ];
        let window = DateWindow {
            from: date(2025, 3, 1),
            to: date(2025, 3, 31),
        };
        let criteria = FilterCriteria {
            department: Some("IT".to_string()),
            ..Default::default()
        };

        let filtered = criteria.apply(&entries, &window);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].work_date, date(2025, 3, 17));
    }

    /// Tests window resolution through the criteria.
    #[test]
    fn test_resolve_window() {
        let criteria = FilterCriteria {
            time_range: TimeRange::Custom,
            start_date: Some(date(2025, 3, 1)),
            end_date: Some(date(2025, 3, 15)),
            ..Default::default()
        };
        let window = criteria.resolve_window(date(2025, 8, 2)).unwrap();
        assert_eq!(window.from, date(2025, 3, 1));
        assert_eq!(window.to, date(2025, 3, 15));

        let inverted = FilterCriteria {
            time_range: TimeRange::Custom,
            start_date: Some(date(2025, 3, 15)),
            end_date: Some(date(2025, 3, 1)),
            ..Default::default()
        };
        assert!(inverted.resolve_window(date(2025, 8, 2)).is_err());
    }
}
