//! Daily pivot construction.
//!
//! Builds the customer → project → phase → staff × date matrix shared by the
//! on-screen drill-down and the detailed export sheet. Besides the rows
//! themselves the pivot carries explicit group-span metadata (which
//! contiguous rows belong to one customer or one project) so presentation
//! layers can draw merged blocks without re-deriving them from row order.

use crate::libs::date_range::DateWindow;
use crate::libs::entry::TimeEntry;
use crate::libs::formatter;
use crate::libs::utilization::{self, STANDARD_DAY_HOURS};
use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// One pivot row: a distinct (customer, project, project phase, phase, staff)
/// combination with its date → hours mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotRow {
    pub customer: String,
    pub project: String,
    pub project_phase: String,
    pub phase: String,
    pub staff_id: String,
    pub staff_name: String,
    pub department: String,
    pub daily_hours: BTreeMap<NaiveDate, Decimal>,
    pub total_hours: Decimal,
}

/// A contiguous run of pivot rows sharing one group value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSpan {
    pub label: String,
    /// Index of the first row in the run.
    pub start: usize,
    pub len: usize,
}

/// A contiguous run of date columns falling in one ISO week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSpan {
    /// Column label, e.g. `wk12`.
    pub label: String,
    /// Index of the first date column in the run.
    pub start: usize,
    pub len: usize,
    pub total_hours: Decimal,
    pub available_hours: Decimal,
}

impl WeekSpan {
    /// Week spend as a rounded percentage of the week's capacity, re-derived
    /// from the raw sums; zero when the week has no capacity.
    pub fn pct_spent(&self) -> i64 {
        utilization::rounded(utilization::percentage(self.total_hours, self.available_hours))
    }
}

/// The full daily pivot. `date_labels`, `week_labels` and
/// `available_hours_by_date` run parallel to `dates`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPivot {
    pub dates: Vec<NaiveDate>,
    pub date_labels: Vec<String>,
    pub week_labels: Vec<String>,
    pub available_hours_by_date: Vec<Decimal>,
    pub rows: Vec<PivotRow>,
    /// Contiguous rows per customer, in row order.
    pub customer_groups: Vec<GroupSpan>,
    /// Contiguous rows per (customer, project), in row order.
    pub project_groups: Vec<GroupSpan>,
    /// Contiguous date columns per ISO week, in column order.
    pub week_spans: Vec<WeekSpan>,
    pub total_by_date: BTreeMap<NaiveDate, Decimal>,
    pub grand_total: Decimal,
}

/// Builds the daily pivot from window-filtered entries.
pub fn build(entries: &[TimeEntry], window: &DateWindow) -> DailyPivot {
    let dates = date_axis(entries, window);

    // Distinct staff active per ISO week; available hours are constant across
    // all days of one week and derive from that week's staffing.
    let mut staff_by_week: HashMap<(i32, u32), HashSet<&str>> = HashMap::new();
    for entry in entries {
        if !entry.staff_id.is_empty() {
            staff_by_week.entry(entry.iso_week_key()).or_default().insert(&entry.staff_id);
        }
    }
    let available_hours_by_date: Vec<Decimal> = dates
        .iter()
        .map(|d| {
            let iso = d.iso_week();
            let staff = staff_by_week.get(&(iso.year(), iso.week())).map_or(0, |s| s.len());
            Decimal::from(staff) * STANDARD_DAY_HOURS
        })
        .collect();

    let rows = build_rows(entries);
    let customer_groups = spans_by(&rows, |row| row.customer.clone());
    let project_groups = spans_by(&rows, |row| (row.customer.clone(), row.project.clone()));

    let mut total_by_date: BTreeMap<NaiveDate, Decimal> = dates.iter().map(|d| (*d, Decimal::ZERO)).collect();
    let mut grand_total = Decimal::ZERO;
    for row in &rows {
        for (date, hours) in &row.daily_hours {
            if let Some(total) = total_by_date.get_mut(date) {
                *total += *hours;
            }
        }
        grand_total += row.total_hours;
    }

    let week_spans = build_week_spans(&dates, &available_hours_by_date, &total_by_date);

    DailyPivot {
        date_labels: dates.iter().map(|d| formatter::date_label(*d)).collect(),
        week_labels: dates.iter().map(|d| formatter::pivot_week_label(*d)).collect(),
        dates,
        available_hours_by_date,
        rows,
        customer_groups,
        project_groups,
        week_spans,
        total_by_date,
        grand_total,
    }
}

/// Dates for which at least one entry exists, in order; when no entries
/// exist, every working day of the window.
fn date_axis(entries: &[TimeEntry], window: &DateWindow) -> Vec<NaiveDate> {
    let present: BTreeSet<NaiveDate> = entries.iter().filter(|e| window.contains(e.work_date)).map(|e| e.work_date).collect();
    if present.is_empty() {
        window.days().filter(|d| d.weekday() != Weekday::Sun).collect()
    } else {
        present.into_iter().collect()
    }
}

fn build_rows(entries: &[TimeEntry]) -> Vec<PivotRow> {
    type ComboKey = (String, String, String, String, String);

    // First-appearance ranks order projects and phase pairs within a
    // customer; customers themselves sort alphabetically.
    let mut project_rank: HashMap<(String, String), usize> = HashMap::new();
    let mut phase_rank: HashMap<(String, String, String, String), usize> = HashMap::new();
    let mut combos: HashMap<ComboKey, usize> = HashMap::new();
    let mut rows: Vec<PivotRow> = Vec::new();

    for entry in entries {
        let project_key = (entry.customer.clone(), entry.project.clone());
        let next_rank = project_rank.len();
        project_rank.entry(project_key).or_insert(next_rank);

        let phase_key = (
            entry.customer.clone(),
            entry.project.clone(),
            entry.project_phase.clone(),
            entry.phase.clone(),
        );
        let next_rank = phase_rank.len();
        phase_rank.entry(phase_key).or_insert(next_rank);

        let combo: ComboKey = (
            entry.customer.clone(),
            entry.project.clone(),
            entry.project_phase.clone(),
            entry.phase.clone(),
            entry.staff_id.clone(),
        );
        let index = *combos.entry(combo).or_insert_with(|| {
            rows.push(PivotRow {
                customer: entry.customer.clone(),
                project: entry.project.clone(),
                project_phase: entry.project_phase.clone(),
                phase: entry.phase.clone(),
                staff_id: entry.staff_id.clone(),
                staff_name: entry.staff_name.clone(),
                department: entry.department.clone(),
                daily_hours: BTreeMap::new(),
                total_hours: Decimal::ZERO,
            });
            rows.len() - 1
        });
        let row = &mut rows[index];
        *row.daily_hours.entry(entry.work_date).or_default() += entry.hours;
        row.total_hours += entry.hours;
    }

    rows.sort_by(|a, b| {
        a.customer
            .cmp(&b.customer)
            .then_with(|| {
                let ra = project_rank[&(a.customer.clone(), a.project.clone())];
                let rb = project_rank[&(b.customer.clone(), b.project.clone())];
                ra.cmp(&rb)
            })
            .then_with(|| {
                let ra = phase_rank[&(a.customer.clone(), a.project.clone(), a.project_phase.clone(), a.phase.clone())];
                let rb = phase_rank[&(b.customer.clone(), b.project.clone(), b.project_phase.clone(), b.phase.clone())];
                ra.cmp(&rb)
            })
            .then_with(|| a.staff_id.cmp(&b.staff_id))
    });
    rows
}

/// Contiguous runs of rows sharing one key, labelled with the key's display
/// value taken from the first row of the run.
fn spans_by<K: PartialEq, F: Fn(&PivotRow) -> K>(rows: &[PivotRow], key: F) -> Vec<GroupSpan>
where
    K: LabelSource,
{
    let mut spans: Vec<GroupSpan> = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let current = key(row);
        match spans.last_mut() {
            Some(span) if key(&rows[span.start]) == current => span.len += 1,
            _ => spans.push(GroupSpan {
                label: current.label(),
                start: index,
                len: 1,
            }),
        }
    }
    spans
}

/// Extracts the display label of a span key.
trait LabelSource {
    fn label(&self) -> String;
}

impl LabelSource for String {
    fn label(&self) -> String {
        self.clone()
    }
}

impl LabelSource for (String, String) {
    // (customer, project) spans display the project.
    fn label(&self) -> String {
        self.1.clone()
    }
}

fn build_week_spans(dates: &[NaiveDate], available: &[Decimal], totals: &BTreeMap<NaiveDate, Decimal>) -> Vec<WeekSpan> {
    let mut spans: Vec<WeekSpan> = Vec::new();
    for (index, date) in dates.iter().enumerate() {
        let label = formatter::pivot_week_label(*date);
        let spent = totals.get(date).copied().unwrap_or_default();
        match spans.last_mut() {
            Some(span) if span.label == label => {
                span.len += 1;
                span.total_hours += spent;
                span.available_hours += available[index];
            }
            _ => spans.push(WeekSpan {
                label,
                start: index,
                len: 1,
                total_hours: spent,
                available_hours: available[index],
            }),
        }
    }
    spans
}
