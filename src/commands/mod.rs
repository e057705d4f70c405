pub mod detail;
pub mod export;
pub mod report;

use crate::libs::date_range::{self, TimeRange};
use crate::libs::entry::FilterCriteria;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Render the utilization report in the terminal")]
    Report(report::ReportArgs),
    #[command(about = "Drill down into one heatmap cell or one staff member")]
    Detail(detail::DetailArgs),
    #[command(about = "Export the report to Excel, CSV, or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Report(args) => report::cmd(args),
            Commands::Detail(args) => detail::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Time range and dimension filters shared by every subcommand.
#[derive(Debug, Args)]
pub struct FilterArgs {
    #[arg(long, value_enum, default_value = "default", help = "Named reporting period")]
    pub range: TimeRange,
    #[arg(long, help = "Explicit start date YYYY-MM-DD (with --range custom)")]
    pub start: Option<String>,
    #[arg(long, help = "Explicit end date YYYY-MM-DD (with --range custom)")]
    pub end: Option<String>,
    #[arg(long, help = "Report year (with --range year-only)")]
    pub year: Option<i32>,
    #[arg(long, help = "Only this department")]
    pub department: Option<String>,
    #[arg(long, help = "Only this project")]
    pub project: Option<String>,
    #[arg(long, help = "Only this customer")]
    pub customer: Option<String>,
    #[arg(long, help = "Only this phase")]
    pub phase: Option<String>,
}

impl FilterArgs {
    /// Parses the explicit dates and assembles the filter criteria.
    pub fn criteria(&self) -> Result<FilterCriteria> {
        let start_date = self.start.as_deref().map(date_range::parse_date).transpose()?;
        let end_date = self.end.as_deref().map(date_range::parse_date).transpose()?;
        Ok(FilterCriteria {
            time_range: self.range,
            year: self.year,
            start_date,
            end_date,
            department: self.department.clone(),
            project: self.project.clone(),
            customer: self.customer.clone(),
            phase: self.phase.clone(),
        })
    }
}
