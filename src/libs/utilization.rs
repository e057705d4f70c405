//! Capacity and utilization-rate math.
//!
//! Available capacity is head-count × working-days × the standard day length
//! of 8.5 hours. Every ratio here is guarded: a zero denominator yields zero,
//! never a panic or NaN. The functions return unrounded percentages; rounding
//! is a presentation concern and every display site re-derives its percentage
//! from the raw hour sums it shows alongside.

use crate::libs::entry::TimeEntry;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Standard working day length in hours.
pub const STANDARD_DAY_HOURS: Decimal = dec!(8.5);

/// Working days per week: every day except Sunday.
pub const WORKING_DAYS_PER_WEEK: u32 = 6;

/// Available capacity for `head_count` staff over `working_days` days.
pub fn available_hours(head_count: usize, working_days: u32) -> Decimal {
    Decimal::from(head_count) * Decimal::from(working_days) * STANDARD_DAY_HOURS
}

/// Unrounded utilization percentage; zero when there is no capacity.
pub fn utilization_rate(utilized: Decimal, available: Decimal) -> Decimal {
    percentage(utilized, available)
}

/// Unrounded share of `part` in `whole` as a percentage; zero when `whole`
/// is zero or negative.
pub fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    if whole > Decimal::ZERO {
        part / whole * dec!(100)
    } else {
        Decimal::ZERO
    }
}

/// Rounds a percentage to the nearest integer for display, half away from
/// zero.
pub fn rounded(pct: Decimal) -> i64 {
    pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero).to_i64().unwrap_or(0)
}

/// Per-department utilization breakdown, the "by function" table.
///
/// Columns are parallel vectors ordered by utilized hours descending (ties
/// alphabetical), matching the department distribution view. Totals are
/// computed from the whole entry set with a global distinct head count, so
/// the total rate is not a weighted average of the row rates; the divergence
/// is expected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionTable {
    pub departments: Vec<String>,
    pub head_count: Vec<usize>,
    pub available_hours: Vec<Decimal>,
    pub utilized_hours: Vec<Decimal>,
    /// Unrounded rates; display sites round.
    pub utilization_rate: Vec<Decimal>,
    pub total_head_count: usize,
    pub total_available: Decimal,
    pub total_utilized: Decimal,
    pub total_rate: Decimal,
}

/// Builds the function table for a window spanning `working_days` days.
///
/// Entries with an empty department are excluded from the per-department rows
/// but still contribute to the totals.
pub fn function_table(entries: &[TimeEntry], working_days: u32) -> FunctionTable {
    let mut per_dept: BTreeMap<&str, (Decimal, HashSet<&str>)> = BTreeMap::new();
    let mut total_utilized = Decimal::ZERO;
    let mut all_staff: HashSet<&str> = HashSet::new();

    for entry in entries {
        total_utilized += entry.hours;
        if !entry.staff_id.is_empty() {
            all_staff.insert(&entry.staff_id);
        }
        if entry.department.is_empty() {
            continue;
        }
        let slot = per_dept.entry(&entry.department).or_default();
        slot.0 += entry.hours;
        if !entry.staff_id.is_empty() {
            slot.1.insert(&entry.staff_id);
        }
    }

    let mut rows: Vec<(&str, Decimal, usize)> = per_dept.into_iter().map(|(dept, (hours, staff))| (dept, hours, staff.len())).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut table = FunctionTable {
        departments: Vec::with_capacity(rows.len()),
        head_count: Vec::with_capacity(rows.len()),
        available_hours: Vec::with_capacity(rows.len()),
        utilized_hours: Vec::with_capacity(rows.len()),
        utilization_rate: Vec::with_capacity(rows.len()),
        total_head_count: all_staff.len(),
        total_available: available_hours(all_staff.len(), working_days),
        total_utilized,
        total_rate: Decimal::ZERO,
    };
    table.total_rate = utilization_rate(total_utilized, table.total_available);

    for (dept, utilized, head_count) in rows {
        let available = available_hours(head_count, working_days);
        table.departments.push(dept.to_string());
        table.head_count.push(head_count);
        table.available_hours.push(available);
        table.utilized_hours.push(utilized);
        table.utilization_rate.push(utilization_rate(utilized, available));
    }

    table
}
