//! Grouping reductions over time entries.
//!
//! Each function here is a pure group-by + sum/count over an already-filtered
//! entry slice. Grouping keys are explicit value types with structural
//! equality, so every grouping is exhaustive and type-checked rather than
//! assembled from concatenated strings.
//!
//! Policy for inconsistent keys: an entry with an empty value in a dimension
//! a grouping requires is excluded from that grouping only; it still counts
//! in every other view. Hour sums use exact decimal arithmetic, and every
//! ordering has a fully specified secondary sort key so repeated runs produce
//! byte-identical output.

use crate::libs::entry::TimeEntry;
use crate::libs::formatter;
use crate::libs::utilization::{self, WORKING_DAYS_PER_WEEK};
use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Grouping key for the phase × department reduction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhaseDeptKey {
    pub phase: String,
    pub department: String,
}

/// Grouping key for the customer × project × department reduction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerProjectDeptKey {
    pub customer: String,
    pub project: String,
    pub department: String,
}

/// Grouping key for the project × department reduction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectDeptKey {
    pub project: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentHours {
    pub department: String,
    pub hours: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseDeptRow {
    pub phase: String,
    pub department: String,
    pub total_hours: Decimal,
    pub staff_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerProjectRow {
    pub customer: String,
    pub project: String,
    pub department: String,
    pub total_hours: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetailRow {
    pub project: String,
    pub department: String,
    pub staff_count: usize,
    pub total_hours: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub project: String,
    /// ISO week label, e.g. `2025-W07`.
    pub week: String,
    pub department: String,
    pub hours: Decimal,
    pub staff_count: usize,
}

/// One bucket of a weekly or monthly trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub hours: Decimal,
    /// Unrounded utilization percentage for the bucket.
    pub utilization: Decimal,
}

/// Sum of hours per department, ordered by hours descending then department.
pub fn by_department(entries: &[TimeEntry]) -> Vec<DepartmentHours> {
    let mut sums: BTreeMap<&str, Decimal> = BTreeMap::new();
    for entry in entries.iter().filter(|e| !e.department.is_empty()) {
        *sums.entry(&entry.department).or_default() += entry.hours;
    }
    let mut rows: Vec<DepartmentHours> = sums
        .into_iter()
        .map(|(department, hours)| DepartmentHours {
            department: department.to_string(),
            hours,
        })
        .collect();
    rows.sort_by(|a, b| b.hours.cmp(&a.hours).then_with(|| a.department.cmp(&b.department)));
    rows
}

/// Hours and distinct staff per (phase, department), ordered by phase then
/// department.
pub fn by_phase_department(entries: &[TimeEntry]) -> Vec<PhaseDeptRow> {
    let mut groups: BTreeMap<PhaseDeptKey, (Decimal, HashSet<&str>)> = BTreeMap::new();
    for entry in entries.iter().filter(|e| !e.phase.is_empty() && !e.department.is_empty()) {
        let key = PhaseDeptKey {
            phase: entry.phase.clone(),
            department: entry.department.clone(),
        };
        let slot = groups.entry(key).or_default();
        slot.0 += entry.hours;
        if !entry.staff_id.is_empty() {
            slot.1.insert(&entry.staff_id);
        }
    }
    groups
        .into_iter()
        .map(|(key, (total_hours, staff))| PhaseDeptRow {
            phase: key.phase,
            department: key.department,
            total_hours,
            staff_count: staff.len(),
        })
        .collect()
}

/// Hours per (customer, project, department), ordered by key. The base of the
/// customer pivot.
pub fn by_customer_project_department(entries: &[TimeEntry]) -> Vec<CustomerProjectRow> {
    let mut sums: BTreeMap<CustomerProjectDeptKey, Decimal> = BTreeMap::new();
    for entry in entries
        .iter()
        .filter(|e| !e.customer.is_empty() && !e.project.is_empty() && !e.department.is_empty())
    {
        let key = CustomerProjectDeptKey {
            customer: entry.customer.clone(),
            project: entry.project.clone(),
            department: entry.department.clone(),
        };
        *sums.entry(key).or_default() += entry.hours;
    }
    sums.into_iter()
        .map(|(key, total_hours)| CustomerProjectRow {
            customer: key.customer,
            project: key.project,
            department: key.department,
            total_hours,
        })
        .collect()
}

/// Hours and distinct staff per (project, department), ordered by hours
/// descending then key.
pub fn by_project_department(entries: &[TimeEntry]) -> Vec<ProjectDetailRow> {
    let mut groups: BTreeMap<ProjectDeptKey, (Decimal, HashSet<&str>)> = BTreeMap::new();
    for entry in entries.iter().filter(|e| !e.project.is_empty() && !e.department.is_empty()) {
        let key = ProjectDeptKey {
            project: entry.project.clone(),
            department: entry.department.clone(),
        };
        let slot = groups.entry(key).or_default();
        slot.0 += entry.hours;
        if !entry.staff_id.is_empty() {
            slot.1.insert(&entry.staff_id);
        }
    }
    let mut rows: Vec<ProjectDetailRow> = groups
        .into_iter()
        .map(|(key, (total_hours, staff))| ProjectDetailRow {
            project: key.project,
            department: key.department,
            staff_count: staff.len(),
            total_hours,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.total_hours
            .cmp(&a.total_hours)
            .then_with(|| a.project.cmp(&b.project))
            .then_with(|| a.department.cmp(&b.department))
    });
    rows
}

/// Hours and distinct staff per (project, ISO week, department), ordered by
/// project then week then department.
pub fn heatmap(entries: &[TimeEntry]) -> Vec<HeatmapCell> {
    let mut groups: BTreeMap<(String, (i32, u32), String), (Decimal, HashSet<&str>)> = BTreeMap::new();
    for entry in entries.iter().filter(|e| !e.project.is_empty() && !e.department.is_empty()) {
        let key = (entry.project.clone(), entry.iso_week_key(), entry.department.clone());
        let slot = groups.entry(key).or_default();
        slot.0 += entry.hours;
        if !entry.staff_id.is_empty() {
            slot.1.insert(&entry.staff_id);
        }
    }
    groups
        .into_iter()
        .map(|((project, (year, week), department), (hours, staff))| HeatmapCell {
            project,
            week: format!("{}-W{:02}", year, week),
            department,
            hours,
            staff_count: staff.len(),
        })
        .collect()
}

/// Weekly trend: hours and utilization per ISO week, in week order.
///
/// The head count of each bucket is the distinct staff active in that week
/// only, over a fixed six-working-day week.
pub fn trend_weekly(entries: &[TimeEntry]) -> Vec<TrendPoint> {
    let mut groups: BTreeMap<(i32, u32), (Decimal, HashSet<&str>)> = BTreeMap::new();
    for entry in entries {
        let slot = groups.entry(entry.iso_week_key()).or_default();
        slot.0 += entry.hours;
        if !entry.staff_id.is_empty() {
            slot.1.insert(&entry.staff_id);
        }
    }
    groups
        .into_iter()
        .map(|((year, week), (hours, staff))| {
            let available = utilization::available_hours(staff.len(), WORKING_DAYS_PER_WEEK);
            TrendPoint {
                label: formatter::trend_week_label(year, week),
                hours,
                utilization: utilization::utilization_rate(hours, available),
            }
        })
        .collect()
}

/// Monthly trend: hours and utilization per calendar month, in month order.
///
/// The working-day count of a month is estimated as days-in-month × 6 / 7,
/// rounded down.
pub fn trend_monthly(entries: &[TimeEntry]) -> Vec<TrendPoint> {
    let mut groups: BTreeMap<(i32, u32), (Decimal, HashSet<&str>)> = BTreeMap::new();
    for entry in entries {
        let key = (entry.work_date.year(), entry.work_date.month());
        let slot = groups.entry(key).or_default();
        slot.0 += entry.hours;
        if !entry.staff_id.is_empty() {
            slot.1.insert(&entry.staff_id);
        }
    }
    groups
        .into_iter()
        .map(|((year, month), (hours, staff))| {
            let working_days = days_in_month(year, month) * WORKING_DAYS_PER_WEEK / 7;
            let available = utilization::available_hours(staff.len(), working_days);
            TrendPoint {
                label: formatter::month_label(year, month),
                hours,
                utilization: utilization::utilization_rate(hours, available),
            }
        })
        .collect()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let first = chrono::NaiveDate::from_ymd_opt(year, month, 1);
    let first_of_next = if month >= 12 {
        chrono::NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        chrono::NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, first_of_next) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        // Unreachable for months taken from a parsed date.
        _ => 30,
    }
}
