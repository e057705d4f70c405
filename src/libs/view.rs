//! Terminal table rendering for report views.
//!
//! Percentages shown here are re-derived from the raw hour sums in the same
//! table, never taken from a pre-rounded field.

use crate::libs::aggregate::{DepartmentHours, TrendPoint};
use crate::libs::date_range::DateWindow;
use crate::libs::formatter;
use crate::libs::report::{Kpis, StaffCellDetail, StaffDayDetail};
use crate::libs::utilization::{self, FunctionTable};
use prettytable::{row, Table};
use rust_decimal::Decimal;

pub struct View {}

impl View {
    pub fn kpis(kpis: &Kpis, window: &DateWindow) {
        let mut table = Table::new();
        table.add_row(row!["PERIOD", "WORKING DAYS", "TOTAL HOURS", "CAPACITY", "UTILIZATION", "PROJECTS", "STAFF"]);
        table.add_row(row![
            format!("{} .. {}", window.from, window.to),
            window.working_days(),
            formatter::format_hours(&kpis.total_hours),
            formatter::format_hours(&kpis.available_capacity),
            formatter::percent_label(utilization::rounded(utilization::percentage(
                kpis.total_hours,
                kpis.available_capacity
            ))),
            kpis.active_projects,
            kpis.staff_count
        ]);
        table.printstd();
    }

    pub fn departments(rows: &[DepartmentHours], total_hours: Decimal) {
        let mut table = Table::new();
        table.add_row(row!["DEPARTMENT", "HOURS", "SHARE"]);
        for dept in rows {
            table.add_row(row![
                dept.department,
                formatter::format_hours(&dept.hours),
                formatter::percent_label(utilization::rounded(utilization::percentage(dept.hours, total_hours)))
            ]);
        }
        table.printstd();
    }

    pub fn function_table(table_data: &FunctionTable) {
        let mut table = Table::new();
        table.add_row(row!["FUNCTION", "HEAD COUNT", "AVAILABLE", "UTILIZED", "UTILIZATION"]);
        for index in 0..table_data.departments.len() {
            table.add_row(row![
                table_data.departments[index],
                table_data.head_count[index],
                formatter::format_hours(&table_data.available_hours[index]),
                formatter::format_hours(&table_data.utilized_hours[index]),
                formatter::percent_label(utilization::rounded(utilization::utilization_rate(
                    table_data.utilized_hours[index],
                    table_data.available_hours[index]
                )))
            ]);
        }
        table.add_row(row![
            "TOTAL",
            table_data.total_head_count,
            formatter::format_hours(&table_data.total_available),
            formatter::format_hours(&table_data.total_utilized),
            formatter::percent_label(utilization::rounded(utilization::utilization_rate(
                table_data.total_utilized,
                table_data.total_available
            )))
        ]);
        table.printstd();
    }

    pub fn staff_cells(rows: &[StaffCellDetail]) {
        let mut table = Table::new();
        table.add_row(row!["STAFF ID", "NAME", "DEPARTMENT", "HOURS", "DAYS"]);
        for detail in rows {
            table.add_row(row![
                detail.staff_id,
                detail.staff_name,
                detail.department,
                formatter::format_hours(&detail.hours),
                detail.days_worked
            ]);
        }
        table.printstd();
    }

    pub fn staff_days(days: &[StaffDayDetail]) {
        let mut table = Table::new();
        table.add_row(row!["DATE", "DAY", "WEEK", "HOURS"]);
        for day in days {
            table.add_row(row![day.date, day.day_of_week, day.week_label, formatter::format_hours(&day.hours)]);
        }
        table.printstd();
    }

    pub fn trend(bucket: &str, points: &[TrendPoint]) {
        let mut table = Table::new();
        table.add_row(row![bucket, "HOURS", "UTILIZATION"]);
        for point in points {
            table.add_row(row![
                point.label,
                formatter::format_hours(&point.hours),
                formatter::percent_label(utilization::rounded(point.utilization))
            ]);
        }
        table.printstd();
    }
}
