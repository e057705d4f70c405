//! Time entry model and filter criteria.
//!
//! A [`TimeEntry`] is the single input fact of the report engine: one staff
//! member, one calendar day, one project/phase combination, one hours value.
//! Entries arrive already materialized from the surrounding service layer
//! (file loader, HR integration) and are never mutated here.

use crate::libs::date_range::{self, DateRangeError, DateWindow, TimeRange};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single staff/day/project/phase time record.
///
/// The engine assumes the loader has de-duplicated entries on the
/// (staff_id, project, department, project_phase, phase, work_date) tuple;
/// upstream upserts replace, never duplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub staff_id: String,
    pub staff_name: String,
    pub department: String,
    pub customer: String,
    pub project: String,
    /// Project phase code. A distinct dimension from `phase`, not a synonym.
    pub project_phase: String,
    /// Activity phase code.
    pub phase: String,
    pub work_date: NaiveDate,
    /// Week of year as recorded by the source system. Carried through, but
    /// every week label in the report is derived from `work_date` using
    /// ISO-8601 numbering.
    #[serde(default)]
    pub week_number: u32,
    #[serde(default)]
    pub year: i32,
    /// Logged hours. Non-negative; absent values deserialize as zero.
    #[serde(default)]
    pub hours: Decimal,
    // Provenance, carried through but never aggregated.
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl TimeEntry {
    /// ISO week key `(year, week)` derived from the work date.
    pub fn iso_week_key(&self) -> (i32, u32) {
        let iso = self.work_date.iso_week();
        (iso.year(), iso.week())
    }

    /// Fills `week_number`/`year` from the work date when the source system
    /// left them unset.
    pub fn normalize(mut self) -> Self {
        if self.week_number == 0 {
            let (year, week) = self.iso_week_key();
            self.year = year;
            self.week_number = week;
        }
        self
    }
}

/// Report filter criteria supplied by the caller.
///
/// The time range fields are resolved into a concrete [`DateWindow`] via
/// [`FilterCriteria::resolve_window`]; the dimension fields narrow the entry
/// set before aggregation. `None` means "no filter" for a dimension.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub time_range: TimeRange,
    pub year: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub department: Option<String>,
    pub project: Option<String>,
    pub customer: Option<String>,
    pub phase: Option<String>,
}

impl FilterCriteria {
    /// Resolves the named time range into a concrete window anchored to `today`.
    pub fn resolve_window(&self, today: NaiveDate) -> Result<DateWindow, DateRangeError> {
        date_range::resolve(self.time_range, today, self.year, self.start_date, self.end_date)
    }

    /// True when the entry passes every configured dimension filter.
    pub fn matches(&self, entry: &TimeEntry) -> bool {
        let dim = |filter: &Option<String>, value: &str| filter.as_deref().map_or(true, |f| f == value);
        dim(&self.department, &entry.department)
            && dim(&self.project, &entry.project)
            && dim(&self.customer, &entry.customer)
            && dim(&self.phase, &entry.phase)
    }

    /// Narrows the entry set to the window and the dimension filters.
    pub fn apply(&self, entries: &[TimeEntry], window: &DateWindow) -> Vec<TimeEntry> {
        entries
            .iter()
            .filter(|e| window.contains(e.work_date) && self.matches(e))
            .cloned()
            .collect()
    }
}
