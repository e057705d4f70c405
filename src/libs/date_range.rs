//! Date range resolution for report queries.
//!
//! Converts a named range selector (current week, last month, a custom
//! interval, ...) into a concrete inclusive [`DateWindow`] and a working-day
//! count. Resolution is always anchored to a caller-supplied "today" so the
//! engine stays pure and testable; weeks start on Monday.
//!
//! This is the only place in the engine that rejects input outright: malformed
//! explicit dates and inverted custom ranges fail with
//! [`DateRangeError::InvalidDateRange`]. Every other component degrades to
//! empty output instead of failing.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::Serialize;
use thiserror::Error;

/// Named reporting period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TimeRange {
    /// Monday through Sunday of the current calendar week.
    CurrentWeek,
    /// Monday through Sunday of the week seven days prior.
    LastWeek,
    /// First through last calendar day of the current month.
    CurrentMonth,
    /// First through last calendar day of the previous month.
    LastMonth,
    /// The three-month span starting at the current quarter's first month.
    CurrentQuarter,
    /// January 1 through December 31 of the current year.
    CurrentYear,
    /// Explicit start/end dates; falls back to the default window when a
    /// bound is missing.
    Custom,
    /// January 1 through December 31 of a supplied year.
    YearOnly,
    /// Last one month through today. Also applied when nothing is supplied.
    #[default]
    Default,
}

/// Errors produced while resolving a report window.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),
}

/// An inclusive calendar interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Every calendar day in the window, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let from = self.from;
        (0..=(self.to - self.from).num_days()).map(move |offset| from + Duration::days(offset))
    }

    /// Count of days in the window that are not Sundays. Saturdays count as
    /// working days.
    pub fn working_days(&self) -> u32 {
        self.days().filter(|d| d.weekday() != Weekday::Sun).count() as u32
    }
}

/// Parses an explicit `YYYY-MM-DD` date supplied by the caller.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|e| DateRangeError::InvalidDateRange(format!("unparseable date '{}': {}", input, e)))
}

/// Resolves a named range into a concrete window anchored to `today`.
///
/// `year` is consulted by [`TimeRange::YearOnly`] and by
/// [`TimeRange::Default`] when supplied without a range keyword. `start`/`end`
/// are consulted by [`TimeRange::Custom`] only.
pub fn resolve(
    range: TimeRange,
    today: NaiveDate,
    year: Option<i32>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<DateWindow, DateRangeError> {
    match range {
        TimeRange::CurrentWeek => week_of(today),
        TimeRange::LastWeek => week_of(today - Duration::days(7)),
        TimeRange::CurrentMonth => month_window(today.year(), today.month()),
        TimeRange::CurrentQuarter => {
            let quarter_start = (today.month() - 1) / 3 * 3 + 1;
            Ok(DateWindow {
                from: ymd(today.year(), quarter_start, 1)?,
                to: last_day_of_month(today.year(), quarter_start + 2)?,
            })
        }
        TimeRange::LastMonth => {
            let anchor = today
                .checked_sub_months(Months::new(1))
                .ok_or_else(|| DateRangeError::InvalidDateRange(format!("no month precedes {}", today)))?;
            month_window(anchor.year(), anchor.month())
        }
        TimeRange::CurrentYear => year_window(today.year()),
        TimeRange::YearOnly => {
            let year = year.ok_or_else(|| DateRangeError::InvalidDateRange("year-only range requires a year".to_string()))?;
            year_window(year)
        }
        TimeRange::Custom => match (start, end) {
            (Some(from), Some(to)) => {
                if from > to {
                    return Err(DateRangeError::InvalidDateRange(format!("start {} is after end {}", from, to)));
                }
                Ok(DateWindow { from, to })
            }
            // A half-specified custom range falls back to the default window.
            _ => default_window(today),
        },
        TimeRange::Default => match year {
            Some(year) => year_window(year),
            None => default_window(today),
        },
    }
}

/// "Last one month through today", the fallback window.
fn default_window(today: NaiveDate) -> Result<DateWindow, DateRangeError> {
    let from = today
        .checked_sub_months(Months::new(1))
        .ok_or_else(|| DateRangeError::InvalidDateRange(format!("no month precedes {}", today)))?;
    Ok(DateWindow { from, to: today })
}

/// Monday..Sunday of the week containing `date`.
fn week_of(date: NaiveDate) -> Result<DateWindow, DateRangeError> {
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    Ok(DateWindow {
        from: monday,
        to: monday + Duration::days(6),
    })
}

fn month_window(year: i32, month: u32) -> Result<DateWindow, DateRangeError> {
    Ok(DateWindow {
        from: ymd(year, month, 1)?,
        to: last_day_of_month(year, month)?,
    })
}

fn year_window(year: i32) -> Result<DateWindow, DateRangeError> {
    Ok(DateWindow {
        from: ymd(year, 1, 1)?,
        to: ymd(year, 12, 31)?,
    })
}

fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate, DateRangeError> {
    let first_of_next = if month >= 12 { ymd(year + 1, 1, 1)? } else { ymd(year, month + 1, 1)? };
    Ok(first_of_next - Duration::days(1))
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateRangeError::InvalidDateRange(format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day)))
}
