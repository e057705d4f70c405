//! Report orchestration.
//!
//! [`generate`] fans the same window-filtered entry slice out to every
//! reduction and bundles the results into one [`ReportResult`]. The
//! reductions are independent of each other; only the export layout consumes
//! them jointly. Empty input degrades to zeroed KPIs and empty collections,
//! never an error.

use crate::libs::aggregate::{self, CustomerProjectRow, DepartmentHours, HeatmapCell, PhaseDeptRow, ProjectDetailRow, TrendPoint};
use crate::libs::date_range::DateWindow;
use crate::libs::entry::TimeEntry;
use crate::libs::formatter;
use crate::libs::pivot::{self, DailyPivot};
use crate::libs::utilization::{self, FunctionTable};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

/// Whole-report key performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub total_hours: Decimal,
    /// Distinct staff across the filtered set × working days × 8.5.
    pub available_capacity: Decimal,
    /// Unrounded; display sites round.
    pub avg_utilization: Decimal,
    pub active_projects: usize,
    pub staff_count: usize,
}

/// Every derived view of one report request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportResult {
    pub kpis: Kpis,
    pub trend_weekly: Vec<TrendPoint>,
    pub trend_monthly: Vec<TrendPoint>,
    pub by_department: Vec<DepartmentHours>,
    pub by_phase_dept: Vec<PhaseDeptRow>,
    pub by_customer_project_dept: Vec<CustomerProjectRow>,
    pub by_project_dept: Vec<ProjectDetailRow>,
    pub heatmap: Vec<HeatmapCell>,
    pub function_table: FunctionTable,
    pub daily_pivot: DailyPivot,
}

/// Reduces window-filtered entries into the full report.
pub fn generate(entries: &[TimeEntry], window: &DateWindow) -> ReportResult {
    debug!("generating report over {} entries, {} .. {}", entries.len(), window.from, window.to);
    if entries.is_empty() {
        warn!("no entries in window {} .. {}", window.from, window.to);
    }

    let working_days = window.working_days();
    let mut staff: HashSet<&str> = HashSet::new();
    let mut projects: HashSet<&str> = HashSet::new();
    let mut total_hours = Decimal::ZERO;
    for entry in entries {
        total_hours += entry.hours;
        if !entry.staff_id.is_empty() {
            staff.insert(&entry.staff_id);
        }
        if !entry.project.is_empty() {
            projects.insert(&entry.project);
        }
    }
    let available_capacity = utilization::available_hours(staff.len(), working_days);
    let kpis = Kpis {
        total_hours,
        available_capacity,
        avg_utilization: utilization::utilization_rate(total_hours, available_capacity),
        active_projects: projects.len(),
        staff_count: staff.len(),
    };

    ReportResult {
        kpis,
        trend_weekly: aggregate::trend_weekly(entries),
        trend_monthly: aggregate::trend_monthly(entries),
        by_department: aggregate::by_department(entries),
        by_phase_dept: aggregate::by_phase_department(entries),
        by_customer_project_dept: aggregate::by_customer_project_department(entries),
        by_project_dept: aggregate::by_project_department(entries),
        heatmap: aggregate::heatmap(entries),
        function_table: utilization::function_table(entries, working_days),
        daily_pivot: pivot::build(entries, window),
    }
}

/// One staff member's share of a heatmap cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffCellDetail {
    pub staff_id: String,
    pub staff_name: String,
    pub department: String,
    pub hours: Decimal,
    pub days_worked: usize,
}

/// Drill-down into one heatmap cell: staff hours for (project, week,
/// department), ordered by staff id. `week` is the heatmap's ISO label, e.g.
/// `2025-W07`.
pub fn staff_detail(entries: &[TimeEntry], project: &str, week: &str, department: &str) -> Vec<StaffCellDetail> {
    let mut groups: BTreeMap<&str, (Decimal, HashSet<chrono::NaiveDate>, &TimeEntry)> = BTreeMap::new();
    for entry in entries {
        if entry.project != project || entry.department != department || formatter::iso_week_label(entry.work_date) != week {
            continue;
        }
        let slot = groups.entry(&entry.staff_id).or_insert((Decimal::ZERO, HashSet::new(), entry));
        slot.0 += entry.hours;
        slot.1.insert(entry.work_date);
    }
    groups
        .into_iter()
        .map(|(staff_id, (hours, dates, first))| StaffCellDetail {
            staff_id: staff_id.to_string(),
            staff_name: first.staff_name.clone(),
            department: first.department.clone(),
            hours,
            days_worked: dates.len(),
        })
        .collect()
}

/// One day of a staff member's work on a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffDayDetail {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Short weekday name, e.g. `Tue`.
    pub day_of_week: String,
    pub hours: Decimal,
    /// Pivot-style week label, e.g. `wk12`.
    pub week_label: String,
}

/// Drill-down into one pivot row: per-day hours for (project, department,
/// staff) within the window, in date order.
pub fn staff_daily_detail(entries: &[TimeEntry], project: &str, department: &str, staff_id: &str, window: &DateWindow) -> Vec<StaffDayDetail> {
    let mut per_day: BTreeMap<chrono::NaiveDate, Decimal> = BTreeMap::new();
    for entry in entries {
        if entry.project == project && entry.department == department && entry.staff_id == staff_id && window.contains(entry.work_date) {
            *per_day.entry(entry.work_date).or_default() += entry.hours;
        }
    }
    per_day
        .into_iter()
        .map(|(date, hours)| StaffDayDetail {
            date: date.format("%Y-%m-%d").to_string(),
            day_of_week: date.format("%a").to_string(),
            hours,
            week_label: formatter::pivot_week_label(date),
        })
        .collect()
}
