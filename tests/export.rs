#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use utilrep::libs::date_range::DateWindow;
    use utilrep::libs::entry::TimeEntry;
    use utilrep::libs::export::{ExportFormat, Exporter};
    use utilrep::libs::report::{self, ReportResult};

    /// Test context holding a scratch directory for export files.
    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(staff_id: &str, project: &str, work_date: NaiveDate, hours: Decimal) -> TimeEntry {
        TimeEntry {
            staff_id: staff_id.to_string(),
            staff_name: format!("Staff {}", staff_id),
            department: "IT".to_string(),
            customer: "Acme".to_string(),
            project: project.to_string(),
            project_phase: "P1".to_string(),
            phase: "Dev".to_string(),
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
            entry("s1", "Alpha", date(2025, 3, 17), dec!(8)),
            entry("s2", "Alpha", date(2025, 3, 17), dec!(4)),
            entry("s1", "Beta", date(2025, 3, 24), dec!(6)),
        ];
        report::generate(&entries, &sample_window())
    }

    /// Tests that a JSON export writes one parseable file with the report's
    /// top-level views.
    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_export(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("report.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(path.clone()));
        exporter.export(&sample_report(), &sample_window()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(value.get("kpis").is_some());
        assert!(value["trend_weekly"].is_array());
        assert!(value["heatmap"].is_array());
        assert!(value["daily_pivot"].get("rows").is_some());
    }

    /// Tests that a CSV export writes one file per sheet, named after the
    /// sheet.
    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_export_one_file_per_sheet(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("report.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(path));
        exporter.export(&sample_report(), &sample_window()).unwrap();

        for slug in [
            "overview",
            "weekly_trend",
            "departments",
            "utilization",
            "phases",
            "customer_projects",
            "daily_detail",
        ] {
            let sheet_path = ctx.temp_dir.path().join(format!("report_{}.csv", slug));
            assert!(sheet_path.exists(), "missing sheet file {}", slug);
        }

        let overview = std::fs::read_to_string(ctx.temp_dir.path().join("report_overview.csv")).unwrap();
        assert!(overview.contains("Total hours"));
    }

    /// Tests that CSV renderings carry full values in merged regions.
    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_daily_detail_is_flat(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("report.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(path));
        exporter.export(&sample_report(), &sample_window()).unwrap();

        let daily = std::fs::read_to_string(ctx.temp_dir.path().join("report_daily_detail.csv")).unwrap();
        // Three pivot rows, each repeating the customer despite the merge.
        assert_eq!(daily.lines().filter(|l| l.starts_with("Acme")).count(), 3);
    }

    /// Tests that an Excel export produces a workbook file.
    #[test_context(ExportTestContext)]
    #[test]
    fn test_excel_export(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("report.xlsx");
        let exporter = Exporter::new(ExportFormat::Excel, Some(path.clone()));
        exporter.export(&sample_report(), &sample_window()).unwrap();

        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    /// Tests that an empty report still exports cleanly in every format.
    #[test_context(ExportTestContext)]
    #[test]
    fn test_empty_report_exports(ctx: &mut ExportTestContext) {
        let result = report::generate(&[], &sample_window());
        for (format, name) in [
            (ExportFormat::Json, "empty.json"),
            (ExportFormat::Csv, "empty.csv"),
            (ExportFormat::Excel, "empty.xlsx"),
        ] {
            let path = ctx.temp_dir.path().join(name);
            Exporter::new(format, Some(path)).export(&result, &sample_window()).unwrap();
        }
    }
}
