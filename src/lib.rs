//! # Utilrep - Workforce Utilization Reporting
//!
//! A command-line utility for aggregating time entries into utilization
//! reports, with drill-down queries and multi-format export.
//!
//! ## Features
//!
//! - **Time Windows**: Named reporting periods (current week, last month,
//!   quarter, year) plus custom date ranges
//! - **Aggregation**: Hours by department, phase, customer, project, and
//!   project-week heatmap cells
//! - **Utilization**: Capacity and utilization rates from distinct head
//!   counts and an 8.5-hour working day
//! - **Daily Pivot**: Per-day hours matrix with customer, project, and week
//!   group spans
//! - **Drill-Down**: Staff detail for a heatmap cell, per-day detail for one
//!   staff member
//! - **Data Export**: Excel workbook with merged ranges, per-sheet CSV, JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use utilrep::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
