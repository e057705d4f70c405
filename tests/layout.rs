#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use utilrep::libs::date_range::DateWindow;
    use utilrep::libs::entry::TimeEntry;
    use utilrep::libs::layout::{self, Cell};
    use utilrep::libs::report::{self, ReportResult};
    use utilrep::libs::utilization::{percentage, rounded};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(staff_id: &str, department: &str, project: &str, phase: &str, work_date: NaiveDate, hours: Decimal) -> TimeEntry {
        TimeEntry {
            staff_id: staff_id.to_string(),
            staff_name: format!("Staff {}", staff_id),
            department: department.to_string(),
            customer: "Acme".to_string(),
            project: project.to_string(),
            project_phase: "P1".to_string(),
            phase: phase.to_string(),
            work_date,
            week_number: 0,
            year: 0,
            hours,
            created_by: None,
            created_at: None,
        }
    }

    fn sample_window() -> DateWindow {
        DateWindow {
            from: date(2025, 3, 17),
            to: date(2025, 3, 29),
        }
    }

    fn sample_report() -> ReportResult {
        let entries = vec![
            entry("s1", "IT", "Alpha", "Dev", date(2025, 3, 17), dec!(8)),
            entry("s2", "Design", "Alpha", "Dev", date(2025, 3, 17), dec!(4)),
            entry("s1", "IT", "Beta", "Test", date(2025, 3, 18), dec!(6)),
            entry("s2", "Design", "Beta", "Dev", date(2025, 3, 24), dec!(5)),
        ];
        report::generate(&entries, &sample_window())
    }

    /// Tests that the workbook always carries its seven sheets, in order.
    #[test]
    fn test_sheet_names() {
        let workbook = layout::build(&sample_report(), &sample_window());
        let names: Vec<&str> = workbook.sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Overview", "Weekly Trend", "Departments", "Utilization", "Phases", "Customer Projects", "Daily Detail"]
        );
    }

    /// Tests that the overview percentage is re-derived from the hour sums
    /// shown on the same sheet.
    #[test]
    fn test_overview_percentage_rederived() {
        let result = sample_report();
        let workbook = layout::build(&result, &sample_window());
        let overview = &workbook.sheets[0];

        assert_eq!(overview.rows[2][1], Cell::Number(result.kpis.total_hours));
        assert_eq!(overview.rows[3][1], Cell::Number(result.kpis.available_capacity));
        assert_eq!(
            overview.rows[4][1],
            Cell::Percent(rounded(percentage(result.kpis.total_hours, result.kpis.available_capacity)))
        );
    }

    /// Tests that contiguous equal phases merge in the phase sheet's first
    /// column.
    #[test]
    fn test_phase_sheet_merges_runs() {
        let workbook = layout::build(&sample_report(), &sample_window());
        let phases = &workbook.sheets[4];

        // Phase rows sort by phase then department: Dev/Design, Dev/IT,
        // Test/IT. The two Dev rows merge.
        assert_eq!(phases.rows[1][0], Cell::Text("Dev".to_string()));
        assert_eq!(phases.rows[2][0], Cell::Text("Dev".to_string()));
        assert_eq!(phases.rows[3][0], Cell::Text("Test".to_string()));

        let merge = phases.merges.iter().find(|m| m.label == "Dev").unwrap();
        assert_eq!((merge.first_row, merge.last_row), (1, 2));
        assert_eq!((merge.first_col, merge.last_col), (0, 0));
        assert!(merge.covers(2, 0));
        assert!(!merge.covers(3, 0));
    }

    /// Tests the daily sheet's shape: week label row, header row, one row per
    /// pivot combination, and three footer rows.
    #[test]
    fn test_daily_sheet_shape() {
        let result = sample_report();
        let workbook = layout::build(&result, &sample_window());
        let daily = &workbook.sheets[6];

        let pivot = &result.daily_pivot;
        assert_eq!(daily.rows.len(), 2 + pivot.rows.len() + 3);

        // Six fixed columns, one per date, one total.
        let expected_cols = 6 + pivot.dates.len() + 1;
        assert_eq!(daily.rows[1].len(), expected_cols);
        assert_eq!(daily.rows[1][0], Cell::Header("Customer".to_string()));
        assert_eq!(daily.rows[1][expected_cols - 1], Cell::Header("Total".to_string()));
    }

    /// Tests that week labels span their date columns in the top row.
    #[test]
    fn test_daily_sheet_week_label_merges() {
        let result = sample_report();
        let workbook = layout::build(&result, &sample_window());
        let daily = &workbook.sheets[6];

        // Dates 03-17 and 03-18 fall in week 12, 03-24 in week 13.
        assert_eq!(daily.rows[0][6], Cell::Header("wk12".to_string()));
        assert_eq!(daily.rows[0][8], Cell::Header("wk13".to_string()));

        let merge = daily.merges.iter().find(|m| m.first_row == 0 && m.label == "wk12").unwrap();
        assert_eq!((merge.first_col, merge.last_col), (6, 7));
        // A single-column week needs no merge.
        assert!(!daily.merges.iter().any(|m| m.first_row == 0 && m.label == "wk13"));
    }

    /// Tests the daily sheet footer: per-day totals, capacity, and week spend
    /// percentages re-derived from those two rows.
    #[test]
    fn test_daily_sheet_footer() {
        let result = sample_report();
        let workbook = layout::build(&result, &sample_window());
        let daily = &workbook.sheets[6];
        let pivot = &result.daily_pivot;

        let totals_row = &daily.rows[2 + pivot.rows.len()];
        assert_eq!(totals_row[0], Cell::Header("Total by day".to_string()));
        assert_eq!(totals_row[6], Cell::Number(dec!(12)));
        assert_eq!(totals_row[9], Cell::Number(pivot.grand_total));

        let available_row = &daily.rows[2 + pivot.rows.len() + 1];
        assert_eq!(available_row[0], Cell::Header("Available hrs".to_string()));
        assert_eq!(available_row[9], Cell::Number(dec!(42.5)));

        let pct_row = &daily.rows[2 + pivot.rows.len() + 2];
        assert_eq!(pct_row[6], Cell::Percent(pivot.week_spans[0].pct_spent()));
        assert_eq!(pct_row[9], Cell::Percent(rounded(percentage(pivot.grand_total, dec!(42.5)))));

        // Footer labels stretch across the six fixed columns.
        let label_merge = daily.merges.iter().find(|m| m.label == "Total by day").unwrap();
        assert_eq!((label_merge.first_col, label_merge.last_col), (0, 5));
    }

    /// Tests that data cells keep their values even under a merge, so flat
    /// renderings stay self-describing.
    #[test]
    fn test_merged_cells_keep_values() {
        let result = sample_report();
        let workbook = layout::build(&result, &sample_window());
        let daily = &workbook.sheets[6];

        // All four pivot rows belong to customer Acme; the customer column is
        // merged yet every row still carries the name.
        let merge = daily.merges.iter().find(|m| m.label == "Acme").unwrap();
        assert_eq!((merge.first_row, merge.last_row), (2, 5));
        for row_index in 2..=5 {
            assert_eq!(daily.rows[row_index][0], Cell::Text("Acme".to_string()));
        }
    }
}
