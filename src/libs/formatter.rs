//! Label and number formatting helpers for display and export.
//!
//! All week labels use ISO-8601 numbering derived from the work date; the
//! source system's own week field is never consulted for labels.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

/// Hours value for tables: at most two decimal places, no trailing zeros.
pub fn format_hours(hours: &Decimal) -> String {
    hours.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero).normalize().to_string()
}

/// Heatmap/drill-down week label, e.g. `2025-W07`.
pub fn iso_week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// Trend week label, e.g. `2025-W7`.
pub fn trend_week_label(year: i32, week: u32) -> String {
    format!("{}-W{}", year, week)
}

/// Trend month label, e.g. `2025-03`.
pub fn month_label(year: i32, month: u32) -> String {
    format!("{}-{:02}", year, month)
}

/// Pivot column week label, e.g. `wk12`.
pub fn pivot_week_label(date: NaiveDate) -> String {
    format!("wk{}", date.iso_week().week())
}

/// Pivot column date label, e.g. `03-17`.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%m-%d").to_string()
}

/// Percentage for display, e.g. `31%`.
pub fn percent_label(pct: i64) -> String {
    format!("{}%", pct)
}
